//! # cheat-engine
//!
//! A two-player "Cheat" game engine with pluggable strategies.
//!
//! Players alternate placing one card face-down while claiming what it is,
//! truthfully or not. Instead of playing, a player may call the opponent's
//! last claim: whoever was wrong (the liar, or the mistaken caller) takes
//! both piles into their hand. The first player to empty their hand wins.
//!
//! ## Design Principles
//!
//! 1. **Hidden information**: strategies only ever see a `PlayerView`, an
//!    owned snapshot that never contains the opponent's cards.
//!
//! 2. **Legal by construction**: `Action` is a sum type and a bluff cannot
//!    claim the card actually played. Everything else (ownership, turn order,
//!    calling with nothing to call) is checked by the engine, which fails fast.
//!
//! 3. **Reproducible**: all randomness, the deal and every strategy decision,
//!    flows from one seed through `GameRng`.
//!
//! ## Modules
//!
//! - `core`: cards, players, RNG, configuration, errors, actions, state, views
//! - `rules`: dealing, challenge resolution, and the `CheatGame` engine
//! - `strategy`: the `Strategy` trait and reference strategies
//! - `simulation`: parallel batch play, payoff estimation, equilibrium search

pub mod core;
pub mod rules;
pub mod strategy;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{
    full_deck, Action, ActionKind, Bluff, Card, CheatError, ConfigError, GameConfig, GameRng,
    GameState, Hand, HandDistribution, InvalidAction, Pile, PlayerId, PlayerMap, PlayerView,
    RawAction, Result, Suit, DECK_SIZE,
};

pub use crate::rules::{
    ChallengeOutcome, CheatGame, CheatGameBuilder, GameStatus, GameSummary, Transition,
};

pub use crate::strategy::{from_fn, FnStrategy, ParamStrategy, Strategy, UniformRandom};

pub use crate::simulation::{
    estimate_payoff, find_symmetric_equilibrium, tally_wins, EquilibriumConfig, SimulationConfig,
    WinTally,
};
