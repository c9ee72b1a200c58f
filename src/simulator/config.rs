//! Simulation configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Face values that count against the roll instead of being judged for success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FailureFaces(BTreeSet<u32>);

impl FailureFaces {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma separated list such as `"1, 2"`.
    ///
    /// Parsing is best effort: blank entries, entries that are not numbers and
    /// `0` (which no die can roll) are dropped.
    pub fn parse(input: &str) -> Self {
        input
            .split(',')
            .filter_map(|part| part.trim().parse::<u32>().ok())
            .filter(|&face| face > 0)
            .collect()
    }

    pub fn contains(&self, face: u32) -> bool {
        self.0.contains(&face)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    /// True if at least one failure face can actually come up on a die with `sides` faces.
    pub fn any_within(&self, sides: u32) -> bool {
        sides > 0 && self.0.range(1..=sides).next().is_some()
    }
}

impl FromIterator<u32> for FailureFaces {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for FailureFaces {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces: Vec<String> = self.0.iter().map(|face| face.to_string()).collect();
        write!(f, "{}", faces.join(","))
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of faces on each die (faces are numbered 1..=side_count)
    pub side_count: u32,

    /// Dice rolled per trial, not counting explosion bonus rolls
    pub dice_count: u32,

    /// A roll at or above this value is a success
    pub success_threshold: u32,

    /// A roll at or above this value grants a bonus roll (0 = exploding disabled)
    pub explode_threshold: u32,

    /// Cap on bonus rolls per trial (0 = unlimited)
    pub max_explosions: u32,

    /// Number of independent trials to run
    pub trial_count: u64,

    /// Faces that subtract a success when rolled
    #[serde(default)]
    pub failure_faces: FailureFaces,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            side_count: 6,
            dice_count: 1,
            success_threshold: 6,
            explode_threshold: 0,
            max_explosions: 0,
            trial_count: 10_000,
            failure_faces: FailureFaces::new(),
        }
    }
}

impl SimulationConfig {
    /// Plain success-counting pool with no explosions and no failure faces.
    pub fn pool(side_count: u32, dice_count: u32, success_threshold: u32) -> Self {
        Self {
            side_count,
            dice_count,
            success_threshold,
            ..Default::default()
        }
    }

    /// Pool where rolls of `explode_threshold` or higher grant a bonus roll.
    pub fn exploding_pool(
        side_count: u32,
        dice_count: u32,
        success_threshold: u32,
        explode_threshold: u32,
    ) -> Self {
        Self {
            explode_threshold,
            ..Self::pool(side_count, dice_count, success_threshold)
        }
    }

    pub fn explosions_enabled(&self) -> bool {
        self.explode_threshold != 0
    }

    /// Reject configurations the engine cannot run.
    ///
    /// The engine itself never validates, so every front end calls this first.
    pub fn validate(&self) -> Result<(), String> {
        if self.side_count == 0 {
            return Err("Dice need at least one side".to_string());
        }
        if self.dice_count == 0 {
            return Err("Roll at least one die".to_string());
        }
        if self.trial_count == 0 {
            return Err("Do at least one roll for the calculation".to_string());
        }

        // Every face is >= 1, so with no cap and no way to consume the budget
        // a trial would never end.
        if self.explode_threshold == 1
            && self.max_explosions == 0
            && !self.failure_faces.any_within(self.side_count)
        {
            return Err(
                "Every roll explodes: raise the exploding minimum or set a maximum".to_string(),
            );
        }

        Ok(())
    }
}
