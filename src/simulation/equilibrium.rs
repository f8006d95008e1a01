//! Best-response grid search and symmetric-equilibrium iteration over
//! [`ParamStrategy`].
//!
//! Payoffs are noisy Monte-Carlo estimates, so the "equilibrium" found is
//! approximate: the iteration stops when the best response to `(p, q)` lands
//! within `tolerance` of `(p, q)` itself.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::config::{EquilibriumConfig, SimulationConfig};
use super::payoff::estimate_payoff;
use crate::core::{ConfigError, GameRng, Result};
use crate::strategy::ParamStrategy;

/// Best response found on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BestResponse {
    pub bluff_prob: f64,
    pub call_prob: f64,
    /// Estimated payoff of the response against the opponent.
    pub value: f64,
}

/// Result of the equilibrium search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Equilibrium {
    pub bluff_prob: f64,
    pub call_prob: f64,
    /// Whether the best response settled within tolerance.
    pub converged: bool,
    /// Best response computed at each iteration.
    pub history: Vec<BestResponse>,
}

/// Grid points `0, step, 2*step, ...` up to and including 1.
pub fn probability_grid(step: f64) -> Result<Vec<f64>> {
    if !(step > 0.0 && step <= 1.0) {
        return Err(ConfigError::InvalidGridStep(step).into());
    }
    Ok((0u32..)
        .map(|i| f64::from(i) * step)
        .take_while(|v| *v <= 1.0 + 1e-9)
        .map(|v| v.min(1.0))
        .collect())
}

/// Find the grid strategy with the best payoff, as player 1, against
/// `ParamStrategy(p_opp, q_opp)` as player 2.
///
/// Every grid point plays the same seeds, so differences between points are
/// not drowned out by deal luck. Ties go to the first point in grid order.
pub fn best_response_to(
    p_opp: f64,
    q_opp: f64,
    grid_step: f64,
    sim: &SimulationConfig,
) -> Result<BestResponse> {
    let opponent = ParamStrategy::new(p_opp, q_opp)?;
    let grid = probability_grid(grid_step)?;

    let mut best: Option<BestResponse> = None;
    for &p in &grid {
        for &q in &grid {
            let me = ParamStrategy::new(p, q)?;
            let value = estimate_payoff(&me, &opponent, sim)?;
            debug!(p, q, value, "grid point evaluated");

            if best.map_or(true, |b| value > b.value) {
                best = Some(BestResponse {
                    bluff_prob: p,
                    call_prob: q,
                    value,
                });
            }
        }
    }

    // The grid always contains 0, so at least one point was evaluated.
    best.ok_or_else(|| ConfigError::InvalidGridStep(grid_step).into())
}

/// Iterate best responses from `(start_p, start_q)` towards a fixed point.
pub fn find_symmetric_equilibrium(config: &EquilibriumConfig) -> Result<Equilibrium> {
    config.validate()?;

    let mut rng = GameRng::new(config.seed);
    let (mut p, mut q) = (config.start_p, config.start_q);
    let mut history = Vec::new();
    let mut converged = false;

    for iteration in 0..config.iterations {
        let sim = config.simulation(rng.fork().seed());
        let response = best_response_to(p, q, config.grid_step, &sim)?;
        history.push(response);

        info!(
            iteration,
            p,
            q,
            best_p = response.bluff_prob,
            best_q = response.call_prob,
            value = response.value,
            "best response computed"
        );

        if (response.bluff_prob - p).abs() < config.tolerance
            && (response.call_prob - q).abs() < config.tolerance
        {
            converged = true;
            info!(p, q, "approximate symmetric equilibrium found");
            break;
        }
        p = response.bluff_prob;
        q = response.call_prob;
    }

    Ok(Equilibrium {
        bluff_prob: p,
        call_prob: q,
        converged,
        history,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid() {
        assert_eq!(probability_grid(0.5).unwrap(), vec![0.0, 0.5, 1.0]);
        assert_eq!(probability_grid(1.0).unwrap(), vec![0.0, 1.0]);

        let fine = probability_grid(0.1).unwrap();
        assert_eq!(fine.len(), 11);
        assert_eq!(*fine.last().unwrap(), 1.0);

        // Step that does not divide 1 stops below it
        assert_eq!(probability_grid(0.4).unwrap().len(), 3);
    }

    #[test]
    fn test_grid_rejects_bad_step() {
        assert!(probability_grid(0.0).is_err());
        assert!(probability_grid(-0.1).is_err());
        assert!(probability_grid(1.5).is_err());
        assert!(probability_grid(f64::NAN).is_err());
    }
}
