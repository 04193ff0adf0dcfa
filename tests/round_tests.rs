//! Basic round resolution tests.
//!
//! The standard table gives players 1 to 4 a single card each with ranks
//! 1, 2, 3 and 0, so player 3 wins an untouched round outright.

use rust_war::cards::Card;
use rust_war::core::{Player, PlayerId, PlayerMap};
use rust_war::rules::{any_player_has_cards, resolve_round, Outcome};

const NO_WAR_STARTING_SCORE: u32 = 0;

/// Players 1-4 with their standard card, plus `extra` empty-handed players.
fn setup(extra: usize) -> PlayerMap<Player> {
    let mut players = PlayerMap::new(4 + extra, Player::new);
    for (i, rank) in [1, 2, 3, 0].into_iter().enumerate() {
        players[PlayerId::new(i as u16)].add_card(Card::new(1, rank));
    }
    players
}

fn order(n: u16) -> Vec<PlayerId> {
    (0..n).map(PlayerId::new).collect()
}

fn p(number: u16) -> PlayerId {
    PlayerId::new(number - 1)
}

#[test]
fn test_play_round_basic() {
    let mut players = setup(0);
    let result = resolve_round(&mut players, &order(4), NO_WAR_STARTING_SCORE);
    assert_eq!(result.winner_id(), Some(p(3)));
}

#[test]
fn test_tie_between_two_players() {
    let mut players = setup(1);
    players[p(5)].add_card(Card::new(2, 3));

    let result = resolve_round(&mut players, &order(5), NO_WAR_STARTING_SCORE);
    assert_eq!(result.tied_players(), Some(&[p(3), p(5)][..]));
}

#[test]
fn test_multi_way_tie_keeps_scan_order() {
    let mut players = setup(2);
    players[p(5)].add_card(Card::new(2, 3));
    players[p(6)].add_card(Card::new(3, 3));

    let result = resolve_round(&mut players, &order(6), NO_WAR_STARTING_SCORE);
    assert_eq!(result.tied_players(), Some(&[p(3), p(5), p(6)][..]));
}

#[test]
fn test_switch_from_tie_to_winner() {
    let mut players = setup(2);
    players[p(5)].add_card(Card::new(2, 3));
    players[p(6)].add_card(Card::new(3, 4));

    let result = resolve_round(&mut players, &order(6), NO_WAR_STARTING_SCORE);
    assert_eq!(result.winner_id(), Some(p(6)));
    assert!(!result.is_tie());
}

#[test]
fn test_player_out_of_cards_is_skipped() {
    let mut players = setup(0);
    players[p(3)].play_card();

    let result = resolve_round(&mut players, &order(4), NO_WAR_STARTING_SCORE);
    assert_eq!(result.winner_id(), Some(p(2)));
    assert_eq!(result.score(), 3);
}

#[test]
fn test_starting_score_carried_into_round() {
    let test_start_score = 10;
    let mut players = setup(0);

    let result = resolve_round(&mut players, &order(4), test_start_score);
    assert_eq!(result.score(), test_start_score + 4);
}

#[test]
fn test_tie_score_counts_every_card() {
    let mut players = setup(1);
    players[p(5)].add_card(Card::new(2, 3));

    let result = resolve_round(&mut players, &order(5), 7);
    assert!(result.is_tie());
    assert_eq!(result.score(), 12);
}

#[test]
fn test_first_listed_player_wins_when_nobody_has_cards() {
    let mut players = setup(0);
    for id in order(4) {
        players[id].play_card();
    }

    let result = resolve_round(&mut players, &order(4), 3);
    assert_eq!(result.winner_id(), Some(p(1)));
    assert_eq!(result.score(), 3);
}

#[test]
fn test_first_listed_is_by_position_not_id() {
    let mut players = PlayerMap::new(3, Player::new);
    let result = resolve_round(&mut players, &[p(3), p(1), p(2)], 0);
    assert_eq!(result.winner_id(), Some(p(3)));
}

#[test]
fn test_drained_round_is_idempotent() {
    let mut players = setup(0);
    resolve_round(&mut players, &order(4), 0);
    assert!(!any_player_has_cards(&players));

    let first = resolve_round(&mut players, &order(4), 5);
    for _ in 0..3 {
        assert_eq!(resolve_round(&mut players, &order(4), 5), first);
    }
    assert_eq!(first.winner_id(), Some(p(1)));
    assert_eq!(first.score(), 5);
}

#[test]
fn test_players_have_cards() {
    let mut players = setup(0);
    for id in order(4) {
        players[id].play_card();
    }
    assert!(!any_player_has_cards(&players));

    players[p(1)].add_card(Card::new(1, 1));
    assert!(any_player_has_cards(&players));
}

#[test]
fn test_outcome_is_exclusive() {
    let mut players = setup(1);
    players[p(5)].add_card(Card::new(2, 3));

    let result = resolve_round(&mut players, &order(5), 0);
    match result.outcome() {
        Outcome::Tie(tied) => {
            assert!(tied.len() >= 2);
            assert_eq!(result.winner_id(), None);
        }
        Outcome::Winner(_) => panic!("expected a tie"),
    }
}
