//! Integration test: Monte Carlo engine properties
//!
//! Exercises the public simulator API end to end: trial accounting,
//! determinism, explosion caps, failure faces and report output.

use dice_calculator::simulator::{
    roll_trial, run_simulation, simulate, FailureFaces, Histogram, RandomRoller, ScriptedRoller,
    SimOptions, SimReport, SimulationConfig,
};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn seeded(seed: u64) -> SimOptions {
    SimOptions {
        seed: Some(seed),
        verbosity: 0,
    }
}

/// A spread of configurations covering explosions, caps and failure faces.
fn assorted_configs() -> Vec<SimulationConfig> {
    vec![
        SimulationConfig::default(),
        SimulationConfig::pool(10, 8, 7),
        SimulationConfig::exploding_pool(6, 4, 5, 6),
        SimulationConfig {
            max_explosions: 1,
            ..SimulationConfig::exploding_pool(6, 4, 5, 5)
        },
        SimulationConfig {
            failure_faces: FailureFaces::parse("1"),
            ..SimulationConfig::exploding_pool(10, 6, 8, 10)
        },
        SimulationConfig {
            explode_threshold: 1,
            max_explosions: 3,
            ..SimulationConfig::pool(4, 2, 3)
        },
    ]
}

// =============================================================================
// Trial accounting
// =============================================================================

#[test]
fn test_occurrences_always_sum_to_trial_count() {
    for (i, mut config) in assorted_configs().into_iter().enumerate() {
        config.trial_count = 2_500 + i as u64;
        let histogram = simulate(&config, &seeded(i as u64));

        let sum: u64 = histogram.buckets().map(|b| b.occurrence_count).sum();
        assert_eq!(sum, config.trial_count, "config {:?}", config);
        assert_eq!(histogram.total_trials(), config.trial_count);
    }
}

#[test]
fn test_success_counts_are_unique_keys() {
    let config = SimulationConfig {
        trial_count: 5_000,
        ..SimulationConfig::exploding_pool(6, 5, 4, 6)
    };
    let histogram = simulate(&config, &seeded(3));

    let mut keys: Vec<i64> = histogram.buckets().map(|b| b.success_count).collect();
    let before = keys.len();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), before);
}

#[test]
fn test_plain_pool_stays_within_dice_count() {
    for dice in 1..=6 {
        let config = SimulationConfig {
            trial_count: 3_000,
            ..SimulationConfig::pool(6, dice, 4)
        };
        let histogram = simulate(&config, &seeded(dice as u64));
        for bucket in &histogram {
            assert!(
                (0..=dice as i64).contains(&bucket.success_count),
                "{}d6 produced {} successes",
                dice,
                bucket.success_count
            );
        }
    }
}

#[test]
fn test_failure_faces_can_go_negative() {
    let config = SimulationConfig {
        trial_count: 5_000,
        failure_faces: FailureFaces::parse("1,2"),
        ..SimulationConfig::pool(6, 3, 6)
    };
    let histogram = simulate(&config, &seeded(8));

    assert!(histogram.count(-3) > 0);
    assert!(histogram.buckets().all(|b| (-3..=3).contains(&b.success_count)));
}

// =============================================================================
// Determinism and order independence
// =============================================================================

#[test]
fn test_same_seed_same_histogram() {
    for config in assorted_configs() {
        assert_eq!(simulate(&config, &seeded(77)), simulate(&config, &seeded(77)));
    }
}

#[test]
fn test_same_script_same_histogram() {
    let config = SimulationConfig {
        trial_count: 1_000,
        ..SimulationConfig::exploding_pool(6, 3, 4, 6)
    };
    let script = vec![6, 2, 5, 6, 6, 1, 3, 4];

    let a = run_simulation(&config, &mut ScriptedRoller::new(script.clone()));
    let b = run_simulation(&config, &mut ScriptedRoller::new(script));
    assert_eq!(a, b);
}

#[test]
fn test_reordering_trials_does_not_change_buckets() {
    let config = SimulationConfig {
        trial_count: 4_000,
        failure_faces: FailureFaces::parse("1"),
        ..SimulationConfig::exploding_pool(10, 5, 7, 10)
    };
    let mut roller = RandomRoller::seeded(11);
    let mut trials: Vec<i64> = (0..config.trial_count)
        .map(|_| roll_trial(&config, &mut roller))
        .collect();

    let in_order: Histogram = trials.iter().copied().collect();
    trials.shuffle(&mut ChaCha8Rng::seed_from_u64(12));
    let shuffled: Histogram = trials.iter().copied().collect();

    assert_eq!(in_order, shuffled);
    assert_eq!(in_order, run_simulation(&config, &mut RandomRoller::seeded(11)));
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_cycling_die_gives_one_success_in_six() {
    let config = SimulationConfig {
        side_count: 6,
        dice_count: 1,
        success_threshold: 6,
        explode_threshold: 0,
        trial_count: 6_000,
        ..Default::default()
    };
    let histogram = run_simulation(&config, &mut ScriptedRoller::cycle(6));

    assert_eq!(histogram.count(1), 1_000);
    assert_eq!(histogram.count(0), 5_000);
}

#[test]
fn test_failure_face_beats_success_threshold_of_one() {
    let config = SimulationConfig {
        failure_faces: FailureFaces::parse("1"),
        trial_count: 6,
        ..SimulationConfig::pool(6, 1, 1)
    };
    let histogram = run_simulation(&config, &mut ScriptedRoller::cycle(6));

    // The single 1 counts against the roll, every other face succeeds
    assert_eq!(histogram.count(-1), 1);
    assert_eq!(histogram.count(1), 5);
}

#[test]
fn test_three_explosions_then_a_consuming_roll() {
    let config = SimulationConfig::exploding_pool(6, 1, 3, 6);
    let mut roller = ScriptedRoller::new(vec![6, 6, 6, 3, 1]);

    assert_eq!(roll_trial(&config, &mut roller), 4);
    assert_eq!(roller.draws(), 4);
}

#[test]
fn test_single_explosion_cap_holds_per_trial() {
    let config = SimulationConfig {
        max_explosions: 1,
        trial_count: 3,
        ..SimulationConfig::exploding_pool(6, 1, 6, 6)
    };
    // Nothing but sixes: each trial gets one bonus roll and no more
    let mut roller = ScriptedRoller::new(vec![6]);
    let histogram = run_simulation(&config, &mut roller);

    assert_eq!(histogram.count(2), 3);
    assert_eq!(roller.draws(), 6);
}

#[test]
fn test_out_of_range_thresholds_do_not_crash() {
    let configs = [
        SimulationConfig::exploding_pool(6, 3, 6, 2),
        SimulationConfig::exploding_pool(6, 3, 4, 20),
        SimulationConfig::exploding_pool(6, 3, 20, 20),
        SimulationConfig::pool(6, 3, 0),
    ];
    for mut config in configs {
        config.max_explosions = 5;
        config.trial_count = 1_000;
        let histogram = simulate(&config, &seeded(1));
        assert_eq!(histogram.total_trials(), 1_000);
    }
}

#[test]
fn test_unreachable_explode_threshold_never_explodes() {
    let config = SimulationConfig {
        trial_count: 100,
        ..SimulationConfig::exploding_pool(6, 2, 4, 7)
    };
    let mut roller = ScriptedRoller::cycle(6);
    run_simulation(&config, &mut roller);
    assert_eq!(roller.draws(), 200);
}

// =============================================================================
// Statistical sanity
// =============================================================================

#[test]
fn test_d6_success_rate_close_to_one_sixth() {
    let config = SimulationConfig {
        trial_count: 60_000,
        ..SimulationConfig::pool(6, 1, 6)
    };
    let histogram = simulate(&config, &seeded(2024));
    let rate = histogram.count(1) as f64 / config.trial_count as f64;
    assert!((rate - 1.0 / 6.0).abs() < 0.01, "rate was {}", rate);
}

#[test]
fn test_explosions_raise_the_mean() {
    let plain = SimulationConfig {
        trial_count: 20_000,
        ..SimulationConfig::pool(6, 4, 5)
    };
    let exploding = SimulationConfig {
        explode_threshold: 6,
        ..plain.clone()
    };

    let plain_report = SimReport::from_histogram(&plain, &simulate(&plain, &seeded(5)));
    let exploding_report =
        SimReport::from_histogram(&exploding, &simulate(&exploding, &seeded(5)));

    // Success chance per die is 1/3; exploding sixes lift expected successes per die to 2/5
    assert!((plain_report.mean_successes - 4.0 / 3.0).abs() < 0.05);
    assert!(exploding_report.mean_successes > plain_report.mean_successes + 0.1);
}

#[test]
fn test_report_probabilities_sum_to_one() {
    let config = SimulationConfig {
        trial_count: 10_000,
        failure_faces: FailureFaces::parse("1"),
        ..SimulationConfig::exploding_pool(10, 6, 8, 10)
    };
    let report = SimReport::from_histogram(&config, &simulate(&config, &seeded(9)));

    let total: f64 = report.outcomes.iter().map(|r| r.probability).sum();
    assert!((total - 1.0).abs() < 1e-9);
    assert!((report.outcomes[0].at_least - 1.0).abs() < 1e-9);
    let keys: Vec<i64> = report.outcomes.iter().map(|r| r.success_count).collect();
    assert!(keys.windows(2).all(|w| w[0] < w[1]));
}
