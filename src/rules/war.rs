//! War escalation: resolving ties.
//!
//! Tied players each ante one card, then the ones who could ante play a
//! basic round. Another tie repeats the process with the new tie set. A
//! player who cannot ante drops out of the chain for good.
//!
//! Escalation runs as a loop, so an arbitrarily long run of ties (a deck
//! with a single rank, say) never grows the call stack.

use smallvec::SmallVec;

use crate::core::player::{Player, PlayerId, PlayerMap};

use super::result::{Outcome, RoundResult};
use super::round::resolve_round;

type Contenders = SmallVec<[PlayerId; 4]>;

/// Final result of a war chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Resolution {
    pub winner: PlayerId,
    pub score: u32,
    /// Number of ante levels played.
    pub levels: u32,
}

/// Resolve a tie between `tied`, starting from `starting_score`.
///
/// Returns the final winner of the whole chain with every ante and every
/// card played in deciding rounds added to the score. If at some level
/// nobody can ante, the first contender of that level wins.
///
/// # Panics
///
/// Panics if `tied` is empty.
pub fn resolve_war(
    players: &mut PlayerMap<Player>,
    tied: &[PlayerId],
    starting_score: u32,
) -> RoundResult {
    let resolution = escalate(players, tied, starting_score);
    RoundResult::winner(resolution.winner, resolution.score)
}

/// Resolve a war chain, also recording how many ante levels it took.
pub(crate) fn escalate(
    players: &mut PlayerMap<Player>,
    tied: &[PlayerId],
    starting_score: u32,
) -> Resolution {
    assert!(!tied.is_empty(), "A war needs at least one player");

    let mut contenders: Contenders = SmallVec::from_slice(tied);
    let mut score = starting_score;
    let mut levels = 0;

    loop {
        levels += 1;

        let anted: Contenders = contenders
            .iter()
            .copied()
            .filter(|&id| players[id].play_card().is_some())
            .collect();
        score += anted.len() as u32;

        log::trace!(
            "war level {}: {} of {} contenders anted, score {}",
            levels,
            anted.len(),
            contenders.len(),
            score
        );

        if anted.is_empty() {
            return Resolution {
                winner: contenders[0],
                score,
                levels,
            };
        }

        let result = resolve_round(players, &anted, score);
        score = result.score();

        match result.into_outcome() {
            Outcome::Winner(winner) => {
                return Resolution {
                    winner,
                    score,
                    levels,
                }
            }
            Outcome::Tie(next) => contenders = SmallVec::from_slice(next.as_slice()),
        }
    }
}
