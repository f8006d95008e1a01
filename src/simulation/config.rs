//! Configuration for batch simulation and equilibrium search.

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, GameConfig};

/// Default action cap for simulated games.
///
/// Heavy bluffers against heavy callers can play for tens of thousands of
/// actions, and an always-bluff/always-call pair never finishes.
pub const DEFAULT_MAX_ACTIONS: u32 = 100_000;

/// Settings for a batch of games between two fixed strategies.
///
/// # Example
/// ```
/// use cheat_engine::simulation::SimulationConfig;
///
/// let config = SimulationConfig { games: 100, ..SimulationConfig::default() };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of games to play.
    pub games: u32,

    /// Base seed. Game `i` uses `GameRng::derive_seed(seed, i)`.
    pub seed: u64,

    /// Games reaching this many actions are abandoned and counted as
    /// unfinished.
    pub max_actions: Option<u32>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 10_000,
            seed: 0,
            max_actions: Some(DEFAULT_MAX_ACTIONS),
        }
    }
}

impl SimulationConfig {
    /// Check the settings are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::NoGames);
        }
        Ok(())
    }

    /// Per-game engine configuration.
    #[must_use]
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            max_actions: self.max_actions,
            ..GameConfig::default()
        }
    }
}

/// Settings for the symmetric-equilibrium search.
///
/// The search starts from `(start_p, start_q)` and repeatedly replaces it
/// with the best response found on a grid, until the best response moves
/// less than `tolerance` in both coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquilibriumConfig {
    /// Initial bluff probability.
    pub start_p: f64,

    /// Initial uncertain-call probability.
    pub start_q: f64,

    /// Spacing of the `(p, q)` grid searched for best responses.
    pub grid_step: f64,

    /// Games played per grid point.
    pub games_per_point: u32,

    /// Maximum best-response iterations.
    pub iterations: u32,

    /// Convergence threshold on both coordinates.
    pub tolerance: f64,

    /// Base seed.
    pub seed: u64,

    /// Action cap per game.
    pub max_actions: Option<u32>,
}

impl Default for EquilibriumConfig {
    fn default() -> Self {
        Self {
            start_p: 0.3,
            start_q: 0.3,
            grid_step: 0.2,
            games_per_point: 300,
            iterations: 5,
            tolerance: 0.05,
            seed: 0,
            max_actions: Some(DEFAULT_MAX_ACTIONS),
        }
    }
}

impl EquilibriumConfig {
    /// Check the settings are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("start_p", self.start_p), ("start_q", self.start_q)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { name, value });
            }
        }
        if !(self.grid_step > 0.0 && self.grid_step <= 1.0) {
            return Err(ConfigError::InvalidGridStep(self.grid_step));
        }
        if self.games_per_point == 0 {
            return Err(ConfigError::NoGames);
        }
        Ok(())
    }

    /// Batch settings used at each grid point of one iteration.
    #[must_use]
    pub fn simulation(&self, seed: u64) -> SimulationConfig {
        SimulationConfig {
            games: self.games_per_point,
            seed,
            max_actions: self.max_actions,
        }
    }
}
