//! Monte-Carlo simulation on top of the engine.
//!
//! Nothing here touches game rules: every function builds engines, drives
//! them to completion and reads the winner.
//!
//! - `payoff`: batch play, win tallies, payoff estimates
//! - `equilibrium`: best responses and symmetric-equilibrium search over
//!   `ParamStrategy`
//! - `config`: batch and search settings

pub mod config;
pub mod equilibrium;
pub mod payoff;

pub use config::{EquilibriumConfig, SimulationConfig, DEFAULT_MAX_ACTIONS};
pub use equilibrium::{
    best_response_to, find_symmetric_equilibrium, probability_grid, BestResponse, Equilibrium,
};
pub use payoff::{estimate_payoff, play_game, tally_wins, WinTally};
