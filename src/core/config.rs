//! Match configuration.
//!
//! A match is described by the deck shape (suits x ranks), the number of
//! players, and an optional shuffle seed. The limits below are guard rails
//! on memory use for the command-line binary; the engine itself only
//! requires that every player can be dealt a card.

use serde::{Deserialize, Serialize};

use super::error::{Result, WarError};

pub const DEFAULT_SUITS: u16 = 4;
pub const DEFAULT_RANKS: u16 = 13;
pub const DEFAULT_PLAYERS: usize = 2;

pub const MIN_SUITS: u16 = 1;
pub const MAX_SUITS: u16 = 100;
pub const MIN_RANKS: u16 = 1;
pub const MAX_RANKS: u16 = 10_000;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 600;

/// Parameters for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of suits in the deck.
    pub suits: u16,

    /// Number of ranks per suit.
    pub ranks: u16,

    /// Number of players at the table.
    pub players: usize,

    /// Shuffle seed. `None` draws a fresh seed for every match.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            suits: DEFAULT_SUITS,
            ranks: DEFAULT_RANKS,
            players: DEFAULT_PLAYERS,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Create a config with explicit deck shape and player count.
    #[must_use]
    pub fn new(suits: u16, ranks: u16, players: usize) -> Self {
        Self {
            suits,
            ranks,
            players,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_suits(mut self, suits: u16) -> Self {
        self.suits = suits;
        self
    }

    #[must_use]
    pub fn with_ranks(mut self, ranks: u16) -> Self {
        self.ranks = ranks;
        self
    }

    #[must_use]
    pub fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Fix the shuffle seed for a reproducible match.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of cards in the deck.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.suits as usize * self.ranks as usize
    }

    /// Check the minimum requirements for a playable match.
    ///
    /// At least one player, no more players than a `PlayerId` can address,
    /// and enough cards for every player to get one.
    pub fn check_supply(&self) -> Result<()> {
        if self.players == 0 {
            return Err(WarError::NoPlayers);
        }
        check_bounds("Players", self.players, 1, u16::MAX as usize)?;
        if self.card_count() < self.players {
            return Err(WarError::NotEnoughCards {
                cards: self.card_count(),
                players: self.players,
            });
        }
        Ok(())
    }

    /// Check every parameter against the configured bounds, then the
    /// card supply.
    pub fn validate(&self) -> Result<()> {
        check_bounds("Suits", self.suits as usize, MIN_SUITS as usize, MAX_SUITS as usize)?;
        check_bounds("Ranks", self.ranks as usize, MIN_RANKS as usize, MAX_RANKS as usize)?;
        check_bounds("Players", self.players, MIN_PLAYERS, MAX_PLAYERS)?;
        self.check_supply()
    }
}

fn check_bounds(name: &'static str, value: usize, min: usize, max: usize) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(WarError::OutOfBounds {
            name,
            value,
            min,
            max,
        })
    }
}
