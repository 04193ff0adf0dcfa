//! Playing cards.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A single card: a suit index and a rank index, both 0-based.
///
/// Only the rank matters when cards are compared during a round. The suit
/// exists so that a deck can hold several cards of the same rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: u16,
    rank: u16,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub const fn new(suit: u16, rank: u16) -> Self {
        Self { suit, rank }
    }

    /// Get the suit index.
    #[must_use]
    pub const fn suit(self) -> u16 {
        self.suit
    }

    /// Get the rank index.
    #[must_use]
    pub const fn rank(self) -> u16 {
        self.rank
    }

    /// Compare two cards the way a round does: by rank, ignoring suit.
    #[must_use]
    pub fn cmp_rank(self, other: Card) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.suit, self.rank)
    }
}
