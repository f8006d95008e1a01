//! Batch play and payoff estimation.
//!
//! Games are independent, so a batch runs in parallel with rayon. Each game
//! gets its own seed derived from the batch seed and its index, which makes
//! results identical however the work is scheduled.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::SimulationConfig;
use crate::core::{CheatError, GameConfig, GameRng, PlayerId, Result};
use crate::rules::{CheatGame, GameSummary};
use crate::strategy::Strategy;

/// Wins per player over a batch of games.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinTally {
    pub player_one: u32,
    pub player_two: u32,
    /// Games abandoned at the action limit.
    pub unfinished: u32,
}

impl WinTally {
    /// Record one game. `None` means the game hit the action limit.
    pub fn record(&mut self, winner: Option<PlayerId>) {
        match winner {
            Some(PlayerId::ONE) => self.player_one += 1,
            Some(_) => self.player_two += 1,
            None => self.unfinished += 1,
        }
    }

    /// Combine two tallies.
    #[must_use]
    pub fn merged(self, other: Self) -> Self {
        Self {
            player_one: self.player_one + other.player_one,
            player_two: self.player_two + other.player_two,
            unfinished: self.unfinished + other.unfinished,
        }
    }

    /// Total games recorded.
    #[must_use]
    pub fn games(&self) -> u32 {
        self.player_one + self.player_two + self.unfinished
    }

    /// Wins for one player.
    #[must_use]
    pub fn wins(&self, player: PlayerId) -> u32 {
        match player {
            PlayerId::ONE => self.player_one,
            _ => self.player_two,
        }
    }

    /// Average payoff to player 1: +1 per win, -1 per loss, 0 if unfinished.
    #[must_use]
    pub fn payoff(&self) -> f64 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        (f64::from(self.player_one) - f64::from(self.player_two)) / f64::from(games)
    }
}

/// Play one game to completion.
pub fn play_game(
    player_one: &dyn Strategy,
    player_two: &dyn Strategy,
    seed: u64,
    config: &GameConfig,
) -> Result<GameSummary> {
    let mut game = CheatGame::builder().config(config.clone()).build(seed)?;
    game.run_to_completion(player_one, player_two)
}

/// Play one game, mapping the action limit to "no winner".
fn play_outcome(
    player_one: &dyn Strategy,
    player_two: &dyn Strategy,
    seed: u64,
    config: &GameConfig,
) -> Result<Option<PlayerId>> {
    match play_game(player_one, player_two, seed, config) {
        Ok(summary) => Ok(Some(summary.winner)),
        Err(CheatError::ActionLimit { limit }) => {
            debug!(seed, limit, "game abandoned at action limit");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Play `config.games` games and count the wins.
///
/// # Errors
///
/// Any engine error other than the action limit, e.g. a strategy playing a
/// card it does not hold.
pub fn tally_wins(
    player_one: &dyn Strategy,
    player_two: &dyn Strategy,
    config: &SimulationConfig,
) -> Result<WinTally> {
    config.validate()?;
    let game_config = config.game_config();

    (0..config.games)
        .into_par_iter()
        .map(|i| {
            let seed = GameRng::derive_seed(config.seed, u64::from(i));
            play_outcome(player_one, player_two, seed, &game_config)
        })
        .try_fold(
            WinTally::default,
            |mut tally: WinTally, outcome: Result<Option<PlayerId>>| -> Result<WinTally> {
                tally.record(outcome?);
                Ok(tally)
            },
        )
        .try_reduce(WinTally::default, |a, b| Ok(a.merged(b)))
}

/// Estimate player 1's expected payoff (+1 win, -1 loss) against player 2.
pub fn estimate_payoff(
    player_one: &dyn Strategy,
    player_two: &dyn Strategy,
    config: &SimulationConfig,
) -> Result<f64> {
    tally_wins(player_one, player_two, config).map(|tally| tally.payoff())
}
