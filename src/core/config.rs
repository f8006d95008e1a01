//! Game configuration types.
//!
//! A game is configured once at construction:
//! - `HandDistribution`: how the deck is split between the two players
//! - `GameConfig`: distribution, opening player, optional action limit

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// How the deck is dealt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandDistribution {
    /// Shuffle, then deal one card at a time alternating between players.
    #[default]
    Random,
    /// Declared for symmetric deals but not implemented; dealing with it
    /// fails with `ConfigError::UnsupportedDistribution`.
    Mirror,
}

/// Configuration for a single game.
///
/// ## Example
///
/// ```
/// use cheat_engine::core::{GameConfig, PlayerId};
///
/// let config = GameConfig {
///     starting_player: PlayerId::TWO,
///     max_actions: Some(10_000),
///     ..GameConfig::default()
/// };
/// assert_eq!(config.starting_player, PlayerId::TWO);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// How the deck is dealt.
    pub distribution: HandDistribution,

    /// Player who opens the first round.
    pub starting_player: PlayerId,

    /// Stop `run_to_completion` with `CheatError::ActionLimit` after this many
    /// actions. `None` runs until someone wins.
    ///
    /// Games with challenges have no hard length bound (two players who
    /// always bluff and always call never finish), so drivers running
    /// arbitrary strategies should set this.
    pub max_actions: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            distribution: HandDistribution::Random,
            starting_player: PlayerId::ONE,
            max_actions: None,
        }
    }
}
