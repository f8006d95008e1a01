//! Cheat simulator CLI - batch play, payoff estimates and equilibrium search.
//!
//! Settings come from an optional JSON config file; command-line flags
//! override whatever the file sets.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

use cheat_engine::simulation::{
    estimate_payoff, find_symmetric_equilibrium, tally_wins, EquilibriumConfig, SimulationConfig,
};
use cheat_engine::strategy::{ParamStrategy, Strategy, UniformRandom};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use tracing::info;

#[derive(Parser)]
#[command(name = "cheat-sim")]
#[command(about = "Simulate two-player Cheat between strategies")]
struct Args {
    /// JSON file with simulation settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Base seed
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Abandon games after this many actions
    #[arg(long, global = true)]
    max_actions: Option<u32>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Count wins between two strategies
    Tally {
        /// Strategy for player 1: random, honest or param:P,Q
        #[arg(long, default_value = "random")]
        one: StrategyArg,

        /// Strategy for player 2
        #[arg(long, default_value = "random")]
        two: StrategyArg,

        /// Number of games
        #[arg(short, long)]
        games: Option<u32>,
    },
    /// Estimate player 1's expected payoff against player 2
    Payoff {
        #[arg(long, default_value = "random")]
        one: StrategyArg,

        #[arg(long, default_value = "random")]
        two: StrategyArg,

        #[arg(short, long)]
        games: Option<u32>,
    },
    /// Search for a symmetric equilibrium of the (p, q) strategy family
    Equilibrium {
        /// Grid spacing for best responses
        #[arg(long)]
        grid_step: Option<f64>,

        /// Games per grid point
        #[arg(long)]
        games_per_point: Option<u32>,

        /// Maximum best-response iterations
        #[arg(long)]
        iterations: Option<u32>,
    },
}

/// Strategy selected on the command line.
#[derive(Clone, Copy, Debug, PartialEq)]
enum StrategyArg {
    Random,
    Honest,
    Param { bluff: f64, call: f64 },
}

impl StrategyArg {
    fn build(self) -> Result<Box<dyn Strategy>, Box<dyn std::error::Error>> {
        Ok(match self {
            StrategyArg::Random => Box::new(UniformRandom),
            StrategyArg::Honest => Box::new(ParamStrategy::honest()),
            StrategyArg::Param { bluff, call } => Box::new(ParamStrategy::new(bluff, call)?),
        })
    }
}

impl FromStr for StrategyArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => return Ok(StrategyArg::Random),
            "honest" => return Ok(StrategyArg::Honest),
            _ => {}
        }
        let params = s
            .strip_prefix("param:")
            .ok_or_else(|| format!("unknown strategy '{s}' (expected random, honest or param:P,Q)"))?;
        let (p, q) = params
            .split_once(',')
            .ok_or_else(|| format!("expected param:P,Q, got '{s}'"))?;
        let bluff = p.trim().parse::<f64>().map_err(|e| format!("bad P '{p}': {e}"))?;
        let call = q.trim().parse::<f64>().map_err(|e| format!("bad Q '{q}': {e}"))?;
        Ok(StrategyArg::Param { bluff, call })
    }
}

impl fmt::Display for StrategyArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyArg::Random => write!(f, "random"),
            StrategyArg::Honest => write!(f, "honest"),
            StrategyArg::Param { bluff, call } => write!(f, "param:{bluff},{call}"),
        }
    }
}

fn load_config<T: DeserializeOwned + Default>(
    path: Option<&Path>,
) -> Result<T, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(T::default()),
    }
}

fn simulation_config(
    args: &Args,
    games: Option<u32>,
) -> Result<SimulationConfig, Box<dyn std::error::Error>> {
    let mut config: SimulationConfig = load_config(args.config.as_deref())?;
    if let Some(games) = games {
        config.games = games;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if args.max_actions.is_some() {
        config.max_actions = args.max_actions;
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // RUST_LOG wins when set; otherwise warnings only unless verbose
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(if args.verbose { "debug" } else { "warn" })
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let start = Instant::now();
    match &args.command {
        Command::Tally { one, two, games } => {
            let config = simulation_config(&args, *games)?;
            let (a, b) = (one.build()?, two.build()?);
            info!(one = a.name(), two = b.name(), games = config.games, "tallying wins");

            let tally = tally_wins(a.as_ref(), b.as_ref(), &config)?;
            println!("Player 1 ({}): {} wins", a.name(), tally.player_one);
            println!("Player 2 ({}): {} wins", b.name(), tally.player_two);
            if tally.unfinished > 0 {
                println!("Unfinished (action limit): {}", tally.unfinished);
            }
            println!("Payoff to player 1: {:+.4}", tally.payoff());
        }
        Command::Payoff { one, two, games } => {
            let config = simulation_config(&args, *games)?;
            let (a, b) = (one.build()?, two.build()?);

            let payoff = estimate_payoff(a.as_ref(), b.as_ref(), &config)?;
            println!(
                "{} vs {} over {} games: {:+.4}",
                a.name(),
                b.name(),
                config.games,
                payoff
            );
        }
        Command::Equilibrium {
            grid_step,
            games_per_point,
            iterations,
        } => {
            let mut config: EquilibriumConfig = load_config(args.config.as_deref())?;
            if let Some(step) = grid_step {
                config.grid_step = *step;
            }
            if let Some(games) = games_per_point {
                config.games_per_point = *games;
            }
            if let Some(iterations) = iterations {
                config.iterations = *iterations;
            }
            if let Some(seed) = args.seed {
                config.seed = seed;
            }
            if args.max_actions.is_some() {
                config.max_actions = args.max_actions;
            }

            let eq = find_symmetric_equilibrium(&config)?;
            for (i, response) in eq.history.iter().enumerate() {
                println!(
                    "iteration {}: best response p={:.2} q={:.2} (value {:+.4})",
                    i + 1,
                    response.bluff_prob,
                    response.call_prob,
                    response.value
                );
            }
            let status = if eq.converged { "converged" } else { "not converged" };
            println!(
                "equilibrium estimate: p={:.2} q={:.2} ({status})",
                eq.bluff_prob, eq.call_prob
            );
        }
    }
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "done");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strategy_arg() {
        assert_eq!("random".parse::<StrategyArg>(), Ok(StrategyArg::Random));
        assert_eq!("honest".parse::<StrategyArg>(), Ok(StrategyArg::Honest));
        assert_eq!(
            "param:0.1, 0.5".parse::<StrategyArg>(),
            Ok(StrategyArg::Param {
                bluff: 0.1,
                call: 0.5
            })
        );
        assert!("param:0.1".parse::<StrategyArg>().is_err());
        assert!("greedy".parse::<StrategyArg>().is_err());
    }

    #[test]
    fn test_out_of_range_param_fails_to_build() {
        let arg = StrategyArg::Param {
            bluff: 1.5,
            call: 0.0,
        };
        assert!(arg.build().is_err());
    }

    #[test]
    fn test_cli_parses() {
        let args = Args::try_parse_from([
            "cheat-sim",
            "--seed",
            "7",
            "tally",
            "--one",
            "param:0.2,0.3",
            "--games",
            "50",
        ])
        .unwrap();
        assert_eq!(args.seed, Some(7));
        assert!(matches!(
            args.command,
            Command::Tally {
                games: Some(50),
                ..
            }
        ));
    }
}
