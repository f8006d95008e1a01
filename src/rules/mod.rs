//! Game rules: dealing, challenge resolution, and the engine that enforces
//! them.
//!
//! The engine is the only code that mutates a `GameState`. Strategies only
//! ever receive `PlayerView` projections of it.

pub mod challenge;
pub mod deal;
pub mod engine;

pub use challenge::{resolve_challenge, ChallengeOutcome};
pub use deal::{deal, validate_hands};
pub use engine::{CheatGame, CheatGameBuilder, GameStatus, GameSummary, Transition};
