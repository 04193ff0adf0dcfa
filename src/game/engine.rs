//! Match engine.
//!
//! `WarGame` runs a complete match: it validates the configuration, builds
//! and shuffles a deck (unless one was injected), deals round-robin, then
//! plays rounds until every hand is empty. Each round's winner, after any
//! war escalation, is credited with the round's score.
//!
//! ```
//! use rust_war::cards::{Deck, StackedDeck};
//! use rust_war::core::{MatchConfig, PlayerId};
//! use rust_war::game::WarGame;
//!
//! let mut deck = StackedDeck::new();
//! deck.create(2, 3).unwrap();
//!
//! let mut game = WarGame::with_deck(MatchConfig::default(), deck);
//! let standings = game.play().unwrap();
//!
//! assert_eq!(standings.high_score(), 4);
//! assert_eq!(standings.winners(), &[PlayerId::new(1)]);
//! ```

use serde::Serialize;

use crate::cards::{Deck, ShuffledDeck};
use crate::core::config::MatchConfig;
use crate::core::error::Result;
use crate::core::player::{Player, PlayerId, PlayerMap};
use crate::core::rng::GameRng;
use crate::rules::round::{any_player_has_cards, resolve_round};
use crate::rules::war::escalate;
use crate::rules::Outcome;

use super::standings::{PlayerScore, ScoreTable, Standings};

/// Deal every card in `deck` round-robin, starting with the first player.
///
/// Card k goes to player `k mod P`, appended to the back of their hand.
pub fn deal_cards<D: Deck + ?Sized>(players: &mut PlayerMap<Player>, deck: &mut D) {
    let ids: Vec<PlayerId> = players.player_ids().collect();
    for (card, id) in std::iter::from_fn(|| deck.deal()).zip(ids.into_iter().cycle()) {
        players[id].add_card(card);
    }
}

/// Counters collected while a match is played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MatchStats {
    /// Basic rounds played over the full table.
    pub rounds: u32,
    /// Rounds that ended in a tie and escalated.
    pub wars: u32,
    /// Most ante levels needed by a single war.
    pub deepest_war: u32,
    /// Cards dealt at the start of the match.
    pub cards_dealt: usize,
    /// Shuffle seed the deck was built with. `None` for an injected deck.
    pub seed: Option<u64>,
}

/// Everything known about a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    pub config: MatchConfig,
    pub standings: Standings,
    pub scores: Vec<PlayerScore>,
    pub stats: MatchStats,
}

/// A game of War between `config.players` players.
pub struct WarGame {
    config: MatchConfig,
    deck: Option<Box<dyn Deck>>,
    scores: ScoreTable,
    stats: MatchStats,
}

impl WarGame {
    /// Create a game that builds and shuffles its own deck when played.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            deck: None,
            scores: ScoreTable::new(),
            stats: MatchStats::default(),
        }
    }

    /// Create a game that deals from `deck` as-is.
    ///
    /// The deck is used in whatever state it is in; its shape does not need
    /// to match `config.suits` and `config.ranks`.
    #[must_use]
    pub fn with_deck(config: MatchConfig, deck: impl Deck + 'static) -> Self {
        Self {
            deck: Some(Box::new(deck)),
            ..Self::new(config)
        }
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn scores(&self) -> &ScoreTable {
        &self.scores
    }

    #[must_use]
    pub fn stats(&self) -> MatchStats {
        self.stats
    }

    /// Play a full match and return the final standings.
    ///
    /// Fails before dealing if there are no players or fewer cards than
    /// players. Playing again starts a fresh match with a new deck.
    pub fn play(&mut self) -> Result<Standings> {
        self.config.check_supply()?;

        let mut seed = None;
        let mut deck: Box<dyn Deck> = match self.deck.take() {
            Some(deck) => deck,
            None => {
                let deck = self.build_deck()?;
                seed = Some(deck.seed());
                Box::new(deck)
            }
        };

        self.scores.clear();
        self.stats = MatchStats {
            seed,
            ..MatchStats::default()
        };

        log::info!(
            "{} players playing war with {} suits and {} ranks",
            self.config.players,
            self.config.suits,
            self.config.ranks
        );

        let mut players = PlayerMap::new(self.config.players, Player::new);
        deal_cards(&mut players, deck.as_mut());
        self.stats.cards_dealt = players.values().map(Player::card_count).sum();

        let order: Vec<PlayerId> = players.player_ids().collect();

        while any_player_has_cards(&players) {
            self.play_round(&mut players, &order);
        }

        let standings = self.scores.standings();
        log::info!(
            "match over after {} rounds and {} wars, high score {} held by {} player(s)",
            self.stats.rounds,
            self.stats.wars,
            standings.high_score(),
            standings.winners().len()
        );

        Ok(standings)
    }

    /// Summary of the last match played.
    #[must_use]
    pub fn report(&self) -> MatchReport {
        MatchReport {
            config: self.config.clone(),
            standings: self.scores.standings(),
            scores: self.scores.sorted(),
            stats: self.stats,
        }
    }

    fn build_deck(&self) -> Result<ShuffledDeck> {
        let rng = self.config.seed.map_or_else(GameRng::from_entropy, GameRng::new);

        let mut deck = ShuffledDeck::new(rng);
        deck.create(self.config.suits, self.config.ranks)?;
        deck.shuffle();

        Ok(deck)
    }

    fn play_round(&mut self, players: &mut PlayerMap<Player>, order: &[PlayerId]) {
        self.stats.rounds += 1;

        let round = resolve_round(players, order, 0);
        let score = round.score();

        let (winner, score) = match round.into_outcome() {
            Outcome::Winner(winner) => (winner, score),
            Outcome::Tie(tied) => {
                let resolution = escalate(players, tied.as_slice(), score);
                self.stats.wars += 1;
                self.stats.deepest_war = self.stats.deepest_war.max(resolution.levels);
                log::debug!(
                    "round {}: war between {} players lasted {} level(s)",
                    self.stats.rounds,
                    tied.len(),
                    resolution.levels
                );
                (resolution.winner, resolution.score)
            }
        };

        log::debug!("round {}: {} wins {} points", self.stats.rounds, winner, score);
        self.scores.credit(winner, score);
    }
}
