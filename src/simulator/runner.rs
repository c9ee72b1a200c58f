//! Trial loop and aggregation.

use super::config::SimulationConfig;
use super::histogram::Histogram;
use super::roller::{DieRoller, RandomRoller};
use std::time::Instant;

/// How a run is driven, as opposed to what is rolled.
#[derive(Debug, Clone, Copy)]
pub struct SimOptions {
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            seed: None,
            verbosity: 1,
        }
    }
}

impl SimOptions {
    pub fn silent() -> Self {
        Self {
            verbosity: 0,
            ..Default::default()
        }
    }
}

/// Roll one trial and return its net success count.
///
/// The die budget is `dice_count`. A failure face costs a die and a success
/// and is not looked at any further. Any other roll is judged for success
/// first, then either spends a die or, if it reaches the explode threshold
/// while the cap still allows it, becomes a bonus roll that spends nothing.
pub fn roll_trial(config: &SimulationConfig, roller: &mut impl DieRoller) -> i64 {
    let mut success_count: i64 = 0;
    let mut rolled_count: u32 = 0;
    // u64 so a long chain on a huge die cannot overflow the counter
    let mut explosion_count: u64 = 0;

    while rolled_count < config.dice_count {
        let roll = roller.roll(config.side_count);

        if config.failure_faces.contains(roll) {
            success_count -= 1;
            rolled_count += 1;
            continue;
        }

        if roll >= config.success_threshold {
            success_count += 1;
        }

        // Cap reached: even a qualifying roll spends a die
        if explosion_cap_reached(explosion_count, config.max_explosions) {
            rolled_count += 1;
            continue;
        }

        if !config.explosions_enabled() || roll < config.explode_threshold {
            rolled_count += 1;
        } else {
            explosion_count += 1;
        }
    }

    success_count
}

/// True once a trial has used up its bonus rolls. A cap of 0 never triggers.
fn explosion_cap_reached(explosion_count: u64, max_explosions: u32) -> bool {
    max_explosions != 0 && explosion_count >= u64::from(max_explosions)
}

/// Run `config.trial_count` trials and fold them into a histogram.
///
/// Performs no validation; see [`SimulationConfig::validate`].
pub fn run_simulation(config: &SimulationConfig, roller: &mut impl DieRoller) -> Histogram {
    (0..config.trial_count)
        .map(|_| roll_trial(config, roller))
        .collect()
}

/// Run a simulation with a fresh ChaCha8 roller, logging to stderr per `options`.
pub fn simulate(config: &SimulationConfig, options: &SimOptions) -> Histogram {
    let mut roller = match options.seed {
        Some(seed) => RandomRoller::seeded(seed),
        None => RandomRoller::from_entropy(),
    };

    if options.verbosity >= 1 {
        eprintln!(
            "Rolling {}d{} {} times (success >= {}, explode >= {}, max explosions {}, failure faces [{}])",
            config.dice_count,
            config.side_count,
            config.trial_count,
            config.success_threshold,
            config.explode_threshold,
            config.max_explosions,
            config.failure_faces
        );
    }

    let started = Instant::now();
    let histogram = if options.verbosity >= 2 {
        run_with_progress(config, &mut roller)
    } else {
        run_simulation(config, &mut roller)
    };

    if options.verbosity >= 1 {
        eprintln!(
            "Finished {} trials in {:.2?}, {} distinct outcomes",
            histogram.total_trials(),
            started.elapsed(),
            histogram.len()
        );
    }

    histogram
}

fn run_with_progress(config: &SimulationConfig, roller: &mut impl DieRoller) -> Histogram {
    let step = (config.trial_count / 10).max(1);
    let mut histogram = Histogram::new();

    for trial in 0..config.trial_count {
        histogram.record(roll_trial(config, roller));

        if (trial + 1) % step == 0 {
            eprintln!(
                "  {}/{} trials ({:.0}%)",
                trial + 1,
                config.trial_count,
                (trial + 1) as f64 / config.trial_count as f64 * 100.0
            );
        }
    }

    histogram
}
