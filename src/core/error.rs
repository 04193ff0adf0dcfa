//! Error types for match setup.
//!
//! Only configuration can fail. Running out of cards mid-round is part of
//! the rules and is reported through `Option`, never through `WarError`.

use thiserror::Error;

/// Rejected match parameters.
///
/// Every variant is detected before any card is dealt, so a failed call
/// leaves players, deck and scores untouched.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WarError {
    /// A deck needs at least one suit.
    #[error("number of suits must be greater than zero")]
    NoSuits,

    /// A deck needs at least one rank.
    #[error("number of ranks must be greater than zero")]
    NoRanks,

    /// A match needs at least one player.
    #[error("number of players must be greater than zero")]
    NoPlayers,

    /// Every player must be dealt at least one card.
    #[error("suits times ranks gives {cards} cards, fewer than the {players} players")]
    NotEnoughCards { cards: usize, players: usize },

    /// A parameter is outside its allowed range.
    #[error("{name} parameter out of bounds: got {value}, minimum {min}, max {max}")]
    OutOfBounds {
        name: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
}

/// Result alias for fallible match setup.
pub type Result<T> = std::result::Result<T, WarError>;
