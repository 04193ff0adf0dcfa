//! Basic round resolution.
//!
//! Every listed player with cards plays their top card. The highest rank
//! wins; equal highest ranks tie. Each card played is worth one point.

use std::cmp::Ordering;

use crate::cards::Card;
use crate::core::player::{Player, PlayerId, PlayerMap};

use super::result::{RoundResult, TiedPlayers};

/// Leader state while scanning the played cards.
enum Lead {
    /// Nobody has played yet.
    Open,
    /// One player holds the best card.
    Sole { player: PlayerId, card: Card },
    /// Several players share the best rank.
    Tied { players: TiedPlayers, card: Card },
}

impl Lead {
    fn challenge(self, player: PlayerId, card: Card) -> Self {
        match self {
            Lead::Open => Lead::Sole { player, card },
            Lead::Sole { player: leader, card: best } => match card.cmp_rank(best) {
                Ordering::Greater => Lead::Sole { player, card },
                Ordering::Equal => Lead::Tied {
                    players: TiedPlayers::pair(leader, player),
                    card: best,
                },
                Ordering::Less => Lead::Sole { player: leader, card: best },
            },
            Lead::Tied { mut players, card: best } => match card.cmp_rank(best) {
                Ordering::Greater => Lead::Sole { player, card },
                Ordering::Equal => {
                    players.push(player);
                    Lead::Tied { players, card: best }
                }
                Ordering::Less => Lead::Tied { players, card: best },
            },
        }
    }
}

/// Resolve one round between `order`, starting from `starting_score`.
///
/// Players are visited in `order`; anyone with an empty hand is skipped and
/// can neither win nor tie. Each played card adds one to the score.
///
/// If nobody can play, the first listed player wins with the score
/// unchanged. Tied players are listed in the order they tied.
///
/// # Panics
///
/// Panics if `order` is empty.
pub fn resolve_round(
    players: &mut PlayerMap<Player>,
    order: &[PlayerId],
    starting_score: u32,
) -> RoundResult {
    assert!(!order.is_empty(), "A round needs at least one player");

    let (lead, played) = order
        .iter()
        .filter_map(|&id| players[id].play_card().map(|card| (id, card)))
        .fold((Lead::Open, 0u32), |(lead, played), (id, card)| {
            (lead.challenge(id, card), played + 1)
        });

    let score = starting_score + played;

    match lead {
        Lead::Open => RoundResult::winner(order[0], starting_score),
        Lead::Sole { player, .. } => RoundResult::winner(player, score),
        Lead::Tied { players, .. } => RoundResult::tie(players, score),
    }
}

/// True if anyone in the table still holds a card.
#[must_use]
pub fn any_player_has_cards(players: &PlayerMap<Player>) -> bool {
    players.values().any(Player::has_cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(hands: &[&[u16]]) -> PlayerMap<Player> {
        let mut players = PlayerMap::new(hands.len(), Player::new);
        for (id, ranks) in PlayerId::all(hands.len()).zip(hands) {
            for &rank in *ranks {
                players[id].add_card(Card::new(0, rank));
            }
        }
        players
    }

    fn ids(n: u16) -> Vec<PlayerId> {
        (0..n).map(PlayerId::new).collect()
    }

    #[test]
    fn test_highest_rank_wins() {
        let mut players = table(&[&[1], &[2], &[3], &[0]]);
        let result = resolve_round(&mut players, &ids(4), 0);
        assert_eq!(result.winner_id(), Some(PlayerId::new(2)));
        assert_eq!(result.score(), 4);
    }

    #[test]
    fn test_tie_then_higher_card_clears_tie() {
        let mut players = table(&[&[3], &[3], &[5]]);
        let result = resolve_round(&mut players, &ids(3), 0);
        assert_eq!(result.winner_id(), Some(PlayerId::new(2)));
    }

    #[test]
    fn test_lower_card_keeps_tie() {
        let mut players = table(&[&[4], &[4], &[1]]);
        let result = resolve_round(&mut players, &ids(3), 2);
        assert_eq!(
            result.tied_players(),
            Some(&[PlayerId::new(0), PlayerId::new(1)][..])
        );
        assert_eq!(result.score(), 5);
    }

    #[test]
    fn test_round_consumes_one_card_each() {
        let mut players = table(&[&[1, 2], &[], &[3, 4, 5]]);
        resolve_round(&mut players, &ids(3), 0);
        assert_eq!(players[PlayerId::new(0)].card_count(), 1);
        assert_eq!(players[PlayerId::new(1)].card_count(), 0);
        assert_eq!(players[PlayerId::new(2)].card_count(), 2);
    }

    #[test]
    fn test_nobody_plays() {
        let mut players = table(&[&[], &[]]);
        let result = resolve_round(&mut players, &[PlayerId::new(1), PlayerId::new(0)], 6);
        assert_eq!(result.winner_id(), Some(PlayerId::new(1)));
        assert_eq!(result.score(), 6);
    }

    #[test]
    fn test_any_player_has_cards() {
        let mut players = table(&[&[], &[], &[]]);
        assert!(!any_player_has_cards(&players));

        players[PlayerId::new(2)].add_card(Card::new(1, 1));
        assert!(any_player_has_cards(&players));
    }

    #[test]
    #[should_panic(expected = "A round needs at least one player")]
    fn test_empty_order_panics() {
        let mut players = table(&[&[1]]);
        resolve_round(&mut players, &[], 0);
    }
}
