//! Outcome histogram: how many trials ended on each net success count.

use serde::{Deserialize, Serialize};
use std::collections::hash_map::{self, HashMap};

/// One histogram entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutcomeBucket {
    /// Net successes (successes minus failure faces) of a trial
    pub success_count: i64,
    /// Trials that ended on exactly `success_count`
    pub occurrence_count: u64,
}

impl OutcomeBucket {
    /// Share of `total_trials` that landed in this bucket.
    pub fn probability(&self, total_trials: u64) -> f64 {
        if total_trials == 0 {
            return 0.0;
        }
        self.occurrence_count as f64 / total_trials as f64
    }
}

/// Trial results folded by success count.
///
/// Iteration order is that of the underlying `HashMap` and must not be relied on.
/// Use [`Histogram::sorted`] when a stable order is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    buckets: HashMap<i64, OutcomeBucket>,
    total_trials: u64,
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one trial result in.
    pub fn record(&mut self, success_count: i64) {
        self.total_trials += 1;
        self.buckets
            .entry(success_count)
            .and_modify(|bucket| bucket.occurrence_count += 1)
            .or_insert(OutcomeBucket {
                success_count,
                occurrence_count: 1,
            });
    }

    /// Buckets in unspecified order. Can be called any number of times.
    pub fn buckets(&self) -> hash_map::Values<'_, i64, OutcomeBucket> {
        self.buckets.values()
    }

    /// Buckets ordered by ascending success count.
    pub fn sorted(&self) -> Vec<OutcomeBucket> {
        let mut sorted: Vec<OutcomeBucket> = self.buckets.values().copied().collect();
        sorted.sort_by_key(|bucket| bucket.success_count);
        sorted
    }

    pub fn get(&self, success_count: i64) -> Option<&OutcomeBucket> {
        self.buckets.get(&success_count)
    }

    /// Occurrences of `success_count`, zero if never observed.
    pub fn count(&self, success_count: i64) -> u64 {
        self.get(success_count)
            .map(|bucket| bucket.occurrence_count)
            .unwrap_or(0)
    }

    pub fn total_trials(&self) -> u64 {
        self.total_trials
    }

    /// Number of distinct success counts observed.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl Extend<i64> for Histogram {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for success_count in iter {
            self.record(success_count);
        }
    }
}

impl FromIterator<i64> for Histogram {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut histogram = Histogram::new();
        histogram.extend(iter);
        histogram
    }
}

impl IntoIterator for Histogram {
    type Item = OutcomeBucket;
    type IntoIter = hash_map::IntoValues<i64, OutcomeBucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_values()
    }
}

impl<'a> IntoIterator for &'a Histogram {
    type Item = &'a OutcomeBucket;
    type IntoIter = hash_map::Values<'a, i64, OutcomeBucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets()
    }
}
