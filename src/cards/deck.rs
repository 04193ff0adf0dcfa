//! Card sources for dealing.
//!
//! The match engine only sees the [`Deck`] trait. Two implementations ship
//! with the crate:
//!
//! - [`ShuffledDeck`]: normal play, reordered by a seedable [`GameRng`]
//! - [`StackedDeck`]: deals in creation order, for reproducible tests
//!
//! ```
//! use rust_war::cards::{Card, Deck, StackedDeck};
//!
//! let mut deck = StackedDeck::new();
//! deck.create(2, 3).unwrap();
//!
//! assert_eq!(deck.undealt(), 6);
//! assert_eq!(deck.deal(), Some(Card::new(0, 0)));
//! assert_eq!(deck.deal(), Some(Card::new(0, 1)));
//! ```

use im::Vector;

use super::card::Card;
use crate::core::error::{Result, WarError};
use crate::core::rng::GameRng;

/// A source of cards, dealt one at a time from the front.
pub trait Deck {
    /// Fill the deck with one card per (suit, rank) pair.
    ///
    /// Cards are laid out suit-major: `(0, 0), (0, 1), ..., (1, 0), ...`.
    /// Replaces any previous contents.
    fn create(&mut self, suits: u16, ranks: u16) -> Result<()>;

    /// Reorder the cards that have not been dealt yet.
    fn shuffle(&mut self);

    /// Deal the next card, or `None` once the deck is exhausted.
    fn deal(&mut self) -> Option<Card>;

    /// Number of cards left to deal.
    fn undealt(&self) -> usize;
}

/// Build the suit-major card sequence shared by every deck.
fn ordered_cards(suits: u16, ranks: u16) -> Result<Vector<Card>> {
    if suits == 0 {
        return Err(WarError::NoSuits);
    }
    if ranks == 0 {
        return Err(WarError::NoRanks);
    }

    Ok((0..suits)
        .flat_map(|suit| (0..ranks).map(move |rank| Card::new(suit, rank)))
        .collect())
}

/// A deck shuffled by a deterministic RNG.
///
/// Dealt cards are kept aside; shuffling returns them to the deck before
/// reordering, so a shuffled deck always holds the full set again.
#[derive(Clone, Debug)]
pub struct ShuffledDeck {
    undealt: Vector<Card>,
    dealt: Vector<Card>,
    rng: GameRng,
}

impl ShuffledDeck {
    /// Create an empty deck driven by the given RNG.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            undealt: Vector::new(),
            dealt: Vector::new(),
            rng,
        }
    }

    /// Create an empty deck with a seeded RNG.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Number of cards dealt since the last `create` or `shuffle`.
    #[must_use]
    pub fn dealt(&self) -> usize {
        self.dealt.len()
    }

    /// Seed of the underlying RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Deck for ShuffledDeck {
    fn create(&mut self, suits: u16, ranks: u16) -> Result<()> {
        self.undealt = ordered_cards(suits, ranks)?;
        self.dealt.clear();
        Ok(())
    }

    fn shuffle(&mut self) {
        let mut cards: Vec<Card> = self.dealt.iter().chain(self.undealt.iter()).copied().collect();
        self.rng.shuffle(&mut cards);
        self.undealt = cards.into_iter().collect();
        self.dealt.clear();
    }

    fn deal(&mut self) -> Option<Card> {
        let card = self.undealt.pop_front()?;
        self.dealt.push_back(card);
        Some(card)
    }

    fn undealt(&self) -> usize {
        self.undealt.len()
    }
}

/// A deck that deals in a fixed, known order.
///
/// `shuffle` is a no-op, so the deal order is always the creation order.
#[derive(Clone, Debug, Default)]
pub struct StackedDeck {
    undealt: Vector<Card>,
}

impl StackedDeck {
    /// Create an empty stacked deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck that deals exactly the given cards, in order.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            undealt: cards.into_iter().collect(),
        }
    }
}

impl Deck for StackedDeck {
    fn create(&mut self, suits: u16, ranks: u16) -> Result<()> {
        self.undealt = ordered_cards(suits, ranks)?;
        Ok(())
    }

    fn shuffle(&mut self) {}

    fn deal(&mut self) -> Option<Card> {
        self.undealt.pop_front()
    }

    fn undealt(&self) -> usize {
        self.undealt.len()
    }
}
