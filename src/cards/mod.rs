//! Cards and the decks they are dealt from.
//!
//! - `Card`: immutable suit/rank value
//! - `Deck`: trait for anything that deals cards one at a time
//! - `ShuffledDeck` / `StackedDeck`: random and fixed-order decks

pub mod card;
pub mod deck;

pub use card::Card;
pub use deck::{Deck, ShuffledDeck, StackedDeck};
