//! Core types: players, configuration, errors, RNG.
//!
//! Everything here is independent of the War rules themselves. The
//! `rules` and `game` modules build on these types.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::MatchConfig;
pub use error::{Result, WarError};
