//! The Cheat game engine.
//!
//! `CheatGame` owns the authoritative state and is the only thing that
//! mutates it. It has two states:
//!
//! - `AwaitingAction(player)`: `player` must play or call
//! - `GameOver(winner)`: terminal
//!
//! A challenge resolves synchronously inside a single `apply_action` call.
//!
//! ## Example
//!
//! ```
//! use cheat_engine::rules::CheatGame;
//! use cheat_engine::strategy::ParamStrategy;
//!
//! let mut game = CheatGame::new(42).unwrap();
//! let summary = game
//!     .run_to_completion(&ParamStrategy::honest(), &ParamStrategy::honest())
//!     .unwrap();
//!
//! // Nobody bluffs, so nobody calls, so every action is a play
//! assert!(summary.actions <= 51);
//! assert_eq!(game.hand(summary.winner).len(), 0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::challenge::{resolve_challenge, ChallengeOutcome};
use super::deal::{deal, validate_hands};
use crate::core::{
    full_deck, Action, ActionKind, Card, CheatError, GameConfig, GameRng, GameState, Hand,
    HandDistribution, InvalidAction, Pile, PlayerId, PlayerMap, PlayerView, Result,
};
use crate::strategy::Strategy;

/// Engine state machine status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for this player to act.
    AwaitingAction(PlayerId),
    /// The game is over and this player won.
    GameOver(PlayerId),
}

/// Result of applying one action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// A card was played and the turn passed to the opponent.
    Played {
        player: PlayerId,
        kind: ActionKind,
        claim: Card,
    },
    /// A claim was called and resolved.
    Challenged(ChallengeOutcome),
    /// The player's last card was played; they win.
    Won { winner: PlayerId, kind: ActionKind },
}

/// Final result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Player who emptied their hand.
    pub winner: PlayerId,
    /// Actions applied over the whole game.
    pub actions: u32,
    /// Cards left on each pile when the game ended.
    pub pile_sizes: PlayerMap<usize>,
}

/// A single game of two-player Cheat.
#[derive(Clone, Debug)]
pub struct CheatGame {
    config: GameConfig,
    state: GameState,
    /// Randomness handed to each player's strategy.
    strategy_rngs: PlayerMap<GameRng>,
}

impl CheatGame {
    /// Deal a new game with the default configuration.
    pub fn new(seed: u64) -> Result<Self> {
        Self::builder().build(seed)
    }

    /// Start configuring a game.
    #[must_use]
    pub fn builder() -> CheatGameBuilder {
        CheatGameBuilder::new()
    }

    /// The configuration this game was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Full authoritative state. Never hand this to a strategy.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current state machine status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.state.winner {
            Some(winner) => GameStatus::GameOver(winner),
            None => GameStatus::AwaitingAction(self.state.active_player),
        }
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.winner.is_some()
    }

    /// The winner, once the game has ended.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.state.active_player
    }

    /// Player waiting for their turn.
    #[must_use]
    pub fn waiting_player(&self) -> PlayerId {
        self.state.waiting_player()
    }

    /// Player who opens the next round.
    #[must_use]
    pub fn starting_player(&self) -> PlayerId {
        self.state.starting_player
    }

    /// Claim attached to the most recent play this round.
    #[must_use]
    pub fn current_claim(&self) -> Option<Card> {
        self.state.current_claim
    }

    /// A player's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.state.hands[player]
    }

    /// A player's pile.
    #[must_use]
    pub fn pile(&self, player: PlayerId) -> &Pile {
        &self.state.piles[player]
    }

    /// Actions applied so far.
    #[must_use]
    pub fn actions_taken(&self) -> u32 {
        self.state.actions_taken
    }

    /// What `player` is allowed to see.
    #[must_use]
    pub fn view(&self, player: PlayerId) -> PlayerView {
        PlayerView::project(&self.state, player)
    }

    /// Summary of the finished game, or `None` while it is still running.
    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        self.state.winner.map(|winner| GameSummary {
            winner,
            actions: self.state.actions_taken,
            pile_sizes: self.state.piles.map(|_, pile| pile.len()),
        })
    }

    /// Apply `player`'s action.
    ///
    /// On error the state is left untouched.
    ///
    /// # Errors
    ///
    /// - `CheatError::GameOver` once someone has won
    /// - `InvalidAction::OutOfTurn` if `player` is not the active player
    /// - `InvalidAction::CardNotInHand` if the played card is not held
    /// - `CheatError::IllegalCall` if there is no claim to call
    pub fn apply_action(&mut self, player: PlayerId, action: &Action) -> Result<Transition> {
        if let Some(winner) = self.state.winner {
            return Err(CheatError::GameOver { winner });
        }
        let active = self.state.active_player;
        if player != active {
            return Err(InvalidAction::OutOfTurn {
                expected: active,
                actual: player,
            }
            .into());
        }

        let transition = match *action {
            Action::Truth(card) => self.play(player, card, card, ActionKind::Truth)?,
            Action::Lie(bluff) => self.play(player, bluff.card(), bluff.claim(), ActionKind::Lie)?,
            Action::Call => {
                let outcome = resolve_challenge(&mut self.state, player)?;
                self.state.active_player = outcome.next_starting;
                debug!(
                    caller = %outcome.caller,
                    claim = %outcome.claim,
                    revealed = %outcome.revealed,
                    absorbed_by = %outcome.absorbed_by,
                    cards = outcome.cards_absorbed,
                    "challenge resolved"
                );
                Transition::Challenged(outcome)
            }
        };

        self.state.actions_taken += 1;
        Ok(transition)
    }

    fn play(
        &mut self,
        player: PlayerId,
        card: Card,
        claim: Card,
        kind: ActionKind,
    ) -> Result<Transition> {
        if !self.state.move_to_pile(player, card) {
            return Err(InvalidAction::CardNotInHand(card).into());
        }
        self.state.current_claim = Some(claim);

        // Emptying the hand wins before the opponent can call the last play.
        if self.state.hands[player].is_empty() {
            self.state.winner = Some(player);
            debug!(winner = %player, actions = self.state.actions_taken + 1, "game over");
            return Ok(Transition::Won {
                winner: player,
                kind,
            });
        }

        self.state.active_player = player.opponent();
        trace!(%player, ?kind, %claim, hand = self.state.hands[player].len(), "card played");
        Ok(Transition::Played {
            player,
            kind,
            claim,
        })
    }

    /// Drive the game to the end.
    ///
    /// Repeatedly shows the active player their view, asks their strategy
    /// for an action, and applies it, until someone wins.
    ///
    /// # Errors
    ///
    /// - any error from [`apply_action`](Self::apply_action) caused by an
    ///   illegal strategy decision
    /// - `CheatError::NoAction` if a strategy returns nothing
    /// - `CheatError::ActionLimit` if `max_actions` is configured and reached
    pub fn run_to_completion(
        &mut self,
        player_one: &dyn Strategy,
        player_two: &dyn Strategy,
    ) -> Result<GameSummary> {
        let strategies: PlayerMap<&dyn Strategy> = PlayerMap::from_pair(player_one, player_two);

        loop {
            if let Some(summary) = self.summary() {
                return Ok(summary);
            }
            if let Some(limit) = self.config.max_actions {
                if self.state.actions_taken >= limit {
                    return Err(CheatError::ActionLimit { limit });
                }
            }

            let player = self.state.active_player;
            let view = self.view(player);
            let action = strategies[player]
                .choose_action(&view, &mut self.strategy_rngs[player])
                .ok_or(CheatError::NoAction { player })?;
            self.apply_action(player, &action)?;
        }
    }
}

/// Builder for creating a CheatGame.
#[derive(Clone, Debug, Default)]
pub struct CheatGameBuilder {
    config: GameConfig,
    hands: Option<PlayerMap<Hand>>,
}

impl CheatGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn distribution(mut self, distribution: HandDistribution) -> Self {
        self.config.distribution = distribution;
        self
    }

    pub fn starting_player(mut self, player: PlayerId) -> Self {
        self.config.starting_player = player;
        self
    }

    pub fn max_actions(mut self, limit: u32) -> Self {
        self.config.max_actions = Some(limit);
        self
    }

    /// Deal these exact hands instead of dealing randomly.
    ///
    /// Together they must hold the full deck with no card twice, and each
    /// must hold at least one card. The configured distribution is ignored.
    pub fn hands(
        mut self,
        player_one: impl IntoIterator<Item = Card>,
        player_two: impl IntoIterator<Item = Card>,
    ) -> Self {
        self.hands = Some(PlayerMap::from_pair(
            player_one.into_iter().collect(),
            player_two.into_iter().collect(),
        ));
        self
    }

    /// Deal and build the game.
    ///
    /// # Errors
    ///
    /// `CheatError::Config` if the deal is impossible or the scripted hands
    /// do not partition the deck.
    pub fn build(self, seed: u64) -> Result<CheatGame> {
        let rng = GameRng::new(seed);

        let hands = match self.hands {
            Some(hands) => {
                validate_hands(&hands)?;
                hands
            }
            None => deal(
                self.config.distribution,
                &full_deck(),
                &mut rng.for_context("deal"),
            )?,
        };

        let state = GameState::new(hands, self.config.starting_player);
        debug!(
            seed,
            starting = %state.starting_player,
            hand_one = state.hands[PlayerId::ONE].len(),
            hand_two = state.hands[PlayerId::TWO].len(),
            "game dealt"
        );

        Ok(CheatGame {
            config: self.config,
            state,
            strategy_rngs: PlayerMap::new(|player| {
                rng.for_context(&format!("player-{}", player.number()))
            }),
        })
    }
}
