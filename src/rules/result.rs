//! Outcome of a single resolution step.

use serde::Serialize;
use smallvec::SmallVec;

use crate::core::player::PlayerId;

/// Players tied on the highest rank, in the order they tied.
///
/// Can only be built from a pair and grown by `push`, so it always holds
/// at least two players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TiedPlayers(SmallVec<[PlayerId; 4]>);

impl TiedPlayers {
    /// Start a tie between the current leader and a challenger.
    #[must_use]
    pub fn pair(leader: PlayerId, challenger: PlayerId) -> Self {
        let mut players = SmallVec::new();
        players.push(leader);
        players.push(challenger);
        Self(players)
    }

    /// Add another player who matched the tied rank.
    pub fn push(&mut self, player: PlayerId) {
        self.0.push(player);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true: a tie holds at least two players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[PlayerId] {
        &self.0
    }
}

/// Either one player won, or several tied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// A single player holds the highest rank.
    Winner(PlayerId),
    /// Two or more players share the highest rank.
    Tie(TiedPlayers),
}

/// Result of resolving a round or a war chain.
///
/// `score` is the number of cards played so far in the chain, including
/// any starting score carried in from earlier steps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    score: u32,
    outcome: Outcome,
}

impl RoundResult {
    #[must_use]
    pub fn winner(player: PlayerId, score: u32) -> Self {
        Self {
            score,
            outcome: Outcome::Winner(player),
        }
    }

    #[must_use]
    pub fn tie(players: TiedPlayers, score: u32) -> Self {
        Self {
            score,
            outcome: Outcome::Tie(players),
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    #[must_use]
    pub fn into_outcome(self) -> Outcome {
        self.outcome
    }

    /// The winner, if there was no tie.
    #[must_use]
    pub fn winner_id(&self) -> Option<PlayerId> {
        match &self.outcome {
            Outcome::Winner(player) => Some(*player),
            Outcome::Tie(_) => None,
        }
    }

    /// The tied players, if there was a tie.
    #[must_use]
    pub fn tied_players(&self) -> Option<&[PlayerId]> {
        match &self.outcome {
            Outcome::Winner(_) => None,
            Outcome::Tie(players) => Some(players.as_slice()),
        }
    }

    #[must_use]
    pub fn is_tie(&self) -> bool {
        matches!(self.outcome, Outcome::Tie(_))
    }
}
