//! Full matches: dealing, the round loop, scoring and standings.

mod engine;
mod standings;

pub use engine::{deal_cards, MatchReport, MatchStats, WarGame};
pub use standings::{PlayerScore, ScoreTable, Standings};
