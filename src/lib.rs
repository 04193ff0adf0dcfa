//! # rust-war
//!
//! An N-player simulation of the card game War.
//!
//! Cards are dealt round-robin. Each round every player with cards plays
//! their top card; the highest rank takes one point per card played. Equal
//! highest ranks start a war: the tied players ante one card each and play
//! again, repeating until one of them wins the whole pile of points.
//!
//! ## Design Principles
//!
//! 1. **N-Player First**: Every rule works on an ordered list of
//!    contenders, from one player up to the whole table.
//!
//! 2. **Ties Are Types**: A round resolves to `Outcome::Winner` or
//!    `Outcome::Tie`, and a tie always holds at least two players.
//!
//! 3. **Deterministic**: Given the same card sequence a match always plays
//!    out the same way. Shuffling is seedable.
//!
//! ## Modules
//!
//! - `core`: Players, configuration, errors, RNG
//! - `cards`: Cards and decks
//! - `rules`: Round resolution and war escalation
//! - `game`: The match engine and final standings
//! - `cli`: Argument parsing and output for the `war` binary

pub mod core;
pub mod cards;
pub mod rules;
pub mod game;
pub mod cli;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerId, PlayerMap,
    GameRng,
    MatchConfig, Result, WarError,
};

pub use crate::cards::{Card, Deck, ShuffledDeck, StackedDeck};

pub use crate::rules::{
    any_player_has_cards, resolve_round, resolve_war,
    Outcome, RoundResult, TiedPlayers,
};

pub use crate::game::{
    deal_cards, MatchReport, MatchStats, PlayerScore, ScoreTable, Standings, WarGame,
};
