//! Batch simulation and equilibrium search on small, seeded configurations.

use cheat_engine::core::{CheatError, ConfigError, PlayerId};
use cheat_engine::simulation::{
    best_response_to, estimate_payoff, find_symmetric_equilibrium, play_game, probability_grid,
    tally_wins, EquilibriumConfig, SimulationConfig,
};
use cheat_engine::strategy::{ParamStrategy, UniformRandom};

fn small(games: u32, seed: u64) -> SimulationConfig {
    SimulationConfig {
        games,
        seed,
        max_actions: Some(2_000),
    }
}

#[test]
fn test_honest_opener_always_wins() {
    // No bluffs means no calls, so player 1 empties their hand first
    let honest = ParamStrategy::honest();
    let tally = tally_wins(&honest, &honest, &small(40, 3)).unwrap();

    assert_eq!(tally.player_one, 40);
    assert_eq!(tally.wins(PlayerId::TWO), 0);
    assert_eq!(tally.unfinished, 0);
    assert_eq!(estimate_payoff(&honest, &honest, &small(40, 3)).unwrap(), 1.0);
}

#[test]
fn test_tally_is_deterministic() {
    let a = tally_wins(&UniformRandom, &UniformRandom, &small(64, 11)).unwrap();
    let b = tally_wins(&UniformRandom, &UniformRandom, &small(64, 11)).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.games(), 64);
}

#[test]
fn test_tally_matches_sequential_play() {
    use cheat_engine::core::GameRng;

    let config = small(16, 5);
    let tally = tally_wins(&UniformRandom, &UniformRandom, &config).unwrap();

    let game_config = config.game_config();
    let mut ones = 0;
    for i in 0..config.games {
        let seed = GameRng::derive_seed(config.seed, u64::from(i));
        if let Ok(summary) = play_game(&UniformRandom, &UniformRandom, seed, &game_config) {
            if summary.winner == PlayerId::ONE {
                ones += 1;
            }
        }
    }
    assert_eq!(tally.player_one, ones);
}

#[test]
fn test_endless_pair_is_unfinished() {
    // Always bluff, always call: every call exposes a lie and nobody wins
    let stubborn = ParamStrategy::new(1.0, 1.0).unwrap();
    let config = SimulationConfig {
        games: 8,
        seed: 0,
        max_actions: Some(300),
    };

    let tally = tally_wins(&stubborn, &stubborn, &config).unwrap();

    assert_eq!(tally.unfinished, 8);
    assert_eq!(tally.payoff(), 0.0);
    assert_eq!(
        play_game(&stubborn, &stubborn, 1, &config.game_config()),
        Err(CheatError::ActionLimit { limit: 300 })
    );
}

#[test]
fn test_zero_games_rejected() {
    let err = tally_wins(&UniformRandom, &UniformRandom, &small(0, 0)).unwrap_err();
    assert_eq!(err, CheatError::Config(ConfigError::NoGames));
}

#[test]
fn test_best_response_is_on_grid() {
    let response = best_response_to(0.3, 0.3, 0.5, &small(30, 2)).unwrap();
    let grid = probability_grid(0.5).unwrap();

    assert!(grid.contains(&response.bluff_prob));
    assert!(grid.contains(&response.call_prob));
    assert!((-1.0..=1.0).contains(&response.value));
}

#[test]
fn test_best_response_rejects_bad_opponent() {
    let err = best_response_to(1.5, 0.0, 0.5, &small(10, 0)).unwrap_err();
    assert!(matches!(
        err,
        CheatError::Config(ConfigError::InvalidProbability { .. })
    ));
}

#[test]
fn test_equilibrium_search() {
    let config = EquilibriumConfig {
        grid_step: 0.5,
        games_per_point: 20,
        iterations: 2,
        max_actions: Some(2_000),
        seed: 9,
        ..EquilibriumConfig::default()
    };

    let eq = find_symmetric_equilibrium(&config).unwrap();

    assert!(!eq.history.is_empty() && eq.history.len() <= 2);
    let last = eq.history.last().unwrap();
    if eq.converged {
        assert!((last.bluff_prob - eq.bluff_prob).abs() < config.tolerance);
    } else {
        assert_eq!(eq.history.len(), 2);
        assert_eq!((last.bluff_prob, last.call_prob), (eq.bluff_prob, eq.call_prob));
    }

    // Seeded, so repeatable
    assert_eq!(find_symmetric_equilibrium(&config).unwrap(), eq);
}

#[test]
fn test_equilibrium_rejects_bad_config() {
    let config = EquilibriumConfig {
        games_per_point: 0,
        ..EquilibriumConfig::default()
    };
    assert_eq!(
        find_symmetric_equilibrium(&config),
        Err(CheatError::Config(ConfigError::NoGames))
    );
}
