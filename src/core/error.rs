//! Error types.
//!
//! Three families, all surfaced to the caller and never recovered inside the
//! engine:
//!
//! - [`ConfigError`]: the game or simulation could not be set up.
//! - [`InvalidAction`]: a strategy produced an action the engine refuses to
//!   apply (it would break card conservation).
//! - [`CheatError::IllegalCall`]: a challenge with nothing to challenge.

use thiserror::Error;

use super::action::ActionKind;
use super::card::Card;
use super::config::HandDistribution;
use super::player::PlayerId;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CheatError>;

/// Fatal setup errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("deck of {size} cards cannot be split evenly between two players")]
    OddDeck { size: usize },

    #[error("hand distribution {0:?} is not supported")]
    UnsupportedDistribution(HandDistribution),

    #[error("hands must partition the full deck: {reason}")]
    HandsNotPartition { reason: String },

    #[error("{name} must be within [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("grid step must be within (0, 1], got {0}")]
    InvalidGridStep(f64),

    #[error("at least one game is required")]
    NoGames,
}

/// Reasons the engine refuses an action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidAction {
    #[error("{0} is not in the active player's hand")]
    CardNotInHand(Card),

    #[error("a bluff must claim a different card than {0}")]
    ClaimMatchesCard(Card),

    #[error("truthful play of {card} claims {claim}")]
    TruthMismatch { card: Card, claim: Card },

    #[error("{0:?} requires a played card")]
    MissingCard(ActionKind),

    #[error("{0:?} requires a claimed card")]
    MissingClaim(ActionKind),

    #[error("a call must not carry a card or claim")]
    UnexpectedPayload,

    #[error("it is {expected}'s turn, not {actual}'s")]
    OutOfTurn { expected: PlayerId, actual: PlayerId },
}

/// Top-level engine error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheatError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid action: {0}")]
    InvalidAction(#[from] InvalidAction),

    #[error("illegal call: nothing to challenge")]
    IllegalCall,

    #[error("game is over, {winner} already won")]
    GameOver { winner: PlayerId },

    #[error("{player}'s strategy produced no action")]
    NoAction { player: PlayerId },

    #[error("game exceeded {limit} actions")]
    ActionLimit { limit: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Suit;

    #[test]
    fn test_messages() {
        let err = CheatError::from(InvalidAction::CardNotInHand(Card::new(7, Suit::Clubs)));
        assert_eq!(
            err.to_string(),
            "invalid action: (7 ♣) is not in the active player's hand"
        );

        let err = CheatError::from(ConfigError::OddDeck { size: 51 });
        assert_eq!(
            err.to_string(),
            "configuration error: deck of 51 cards cannot be split evenly between two players"
        );

        assert_eq!(
            CheatError::IllegalCall.to_string(),
            "illegal call: nothing to challenge"
        );
    }

    #[test]
    fn test_out_of_turn_message() {
        let err = InvalidAction::OutOfTurn {
            expected: PlayerId::ONE,
            actual: PlayerId::TWO,
        };
        assert_eq!(err.to_string(), "it is Player 1's turn, not Player 2's");
    }
}
