//! Match scores and final standings.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::core::player::PlayerId;

/// Accumulated score per player over a whole match.
///
/// Scores only grow. A player who never won a round is absent and has an
/// implicit score of zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreTable {
    scores: FxHashMap<PlayerId, u32>,
}

impl ScoreTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `points` to a player's running total.
    pub fn credit(&mut self, player: PlayerId, points: u32) {
        *self.scores.entry(player).or_insert(0) += points;
    }

    /// A player's total, zero if they never scored.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores.get(&player).copied().unwrap_or(0)
    }

    /// Sum of every credited point.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.scores.values().map(|&s| u64::from(s)).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Every player who scored, ordered by player id.
    #[must_use]
    pub fn sorted(&self) -> Vec<PlayerScore> {
        let mut scores: Vec<_> = self
            .scores
            .iter()
            .map(|(&player, &score)| PlayerScore { player, score })
            .collect();
        scores.sort_by_key(|s| s.player);
        scores
    }

    /// The high score and every player who reached it.
    #[must_use]
    pub fn standings(&self) -> Standings {
        let high_score = self.scores.values().copied().max().unwrap_or(0);
        let mut winners: Vec<_> = self
            .scores
            .iter()
            .filter(|(_, &score)| score == high_score)
            .map(|(&player, _)| player)
            .collect();
        winners.sort();

        Standings { high_score, winners }
    }

    pub(crate) fn clear(&mut self) {
        self.scores.clear();
    }
}

/// One row of the score table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerScore {
    pub player: PlayerId,
    pub score: u32,
}

/// Final result of a match.
///
/// Several players may share the high score; all of them are winners.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Standings {
    high_score: u32,
    winners: Vec<PlayerId>,
}

impl Standings {
    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Winning players, ordered by id.
    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        &self.winners
    }

    /// True if more than one player shares the high score.
    #[must_use]
    pub fn is_shared(&self) -> bool {
        self.winners.len() > 1
    }
}

impl std::fmt::Display for Standings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "The winning score was {}", self.high_score)?;
        writeln!(f)?;
        writeln!(f, "There were {} winning players!", self.winners.len())?;
        writeln!(f)?;
        writeln!(f, "----- WINNERS -----")?;
        for winner in &self.winners {
            writeln!(f, "\t{}", winner.number())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_accumulates() {
        let mut table = ScoreTable::new();
        assert!(table.is_empty());
        assert_eq!(table.score(PlayerId::new(0)), 0);

        table.credit(PlayerId::new(0), 2);
        table.credit(PlayerId::new(1), 5);
        table.credit(PlayerId::new(0), 4);

        assert_eq!(table.score(PlayerId::new(0)), 6);
        assert_eq!(table.score(PlayerId::new(1)), 5);
        assert_eq!(table.score(PlayerId::new(2)), 0);
        assert_eq!(table.total(), 11);
    }

    #[test]
    fn test_single_winner() {
        let mut table = ScoreTable::new();
        table.credit(PlayerId::new(0), 2);
        table.credit(PlayerId::new(1), 4);

        let standings = table.standings();
        assert_eq!(standings.high_score(), 4);
        assert_eq!(standings.winners(), &[PlayerId::new(1)]);
        assert!(!standings.is_shared());
    }

    #[test]
    fn test_shared_high_score() {
        let mut table = ScoreTable::new();
        table.credit(PlayerId::new(3), 6);
        table.credit(PlayerId::new(0), 1);
        table.credit(PlayerId::new(1), 6);

        let standings = table.standings();
        assert_eq!(standings.high_score(), 6);
        assert_eq!(standings.winners(), &[PlayerId::new(1), PlayerId::new(3)]);
        assert!(standings.is_shared());
    }

    #[test]
    fn test_empty_table() {
        let standings = ScoreTable::new().standings();
        assert_eq!(standings.high_score(), 0);
        assert!(standings.winners().is_empty());
    }

    #[test]
    fn test_sorted_rows() {
        let mut table = ScoreTable::new();
        table.credit(PlayerId::new(2), 1);
        table.credit(PlayerId::new(0), 3);

        assert_eq!(
            table.sorted(),
            vec![
                PlayerScore { player: PlayerId::new(0), score: 3 },
                PlayerScore { player: PlayerId::new(2), score: 1 },
            ]
        );
    }

    #[test]
    fn test_display() {
        let mut table = ScoreTable::new();
        table.credit(PlayerId::new(1), 4);

        let text = table.standings().to_string();
        assert_eq!(
            text,
            "The winning score was 4\n\nThere were 1 winning players!\n\n----- WINNERS -----\n\t2\n"
        );
    }
}
