//! The rules of War.
//!
//! - `round`: one basic round, every player plays their top card
//! - `war`: tie escalation, ante one card and replay until someone wins
//! - `result`: the outcome type both produce
//!
//! These are free functions over a `PlayerMap<Player>` and an ordered list
//! of contending `PlayerId`s. The match engine in `game` drives them.

pub mod result;
pub mod round;
pub mod war;

pub use result::{Outcome, RoundResult, TiedPlayers};
pub use round::{any_player_has_cards, resolve_round};
pub use war::resolve_war;
