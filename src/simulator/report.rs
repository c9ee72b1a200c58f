//! Simulation report generation.

use super::config::SimulationConfig;
use super::histogram::Histogram;
use serde::Serialize;

/// One row of the report, a histogram bucket with derived probabilities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeRow {
    pub success_count: i64,
    pub occurrence_count: u64,
    /// Share of all trials that ended on exactly `success_count`
    pub probability: f64,
    /// Share of all trials that ended on `success_count` or more
    pub at_least: f64,
}

/// Display-ready summary of one simulation.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub config: SimulationConfig,
    pub total_trials: u64,
    pub mean_successes: f64,
    pub min_successes: Option<i64>,
    pub max_successes: Option<i64>,
    /// Sorted by ascending success count
    pub outcomes: Vec<OutcomeRow>,
}

impl SimReport {
    pub fn from_histogram(config: &SimulationConfig, histogram: &Histogram) -> Self {
        let total_trials = histogram.total_trials();
        let sorted = histogram.sorted();

        let mut remaining = total_trials;
        let outcomes: Vec<OutcomeRow> = sorted
            .iter()
            .map(|bucket| {
                let row = OutcomeRow {
                    success_count: bucket.success_count,
                    occurrence_count: bucket.occurrence_count,
                    probability: bucket.probability(total_trials),
                    at_least: ratio(remaining, total_trials),
                };
                remaining -= bucket.occurrence_count;
                row
            })
            .collect();

        let weighted: f64 = sorted
            .iter()
            .map(|b| b.success_count as f64 * b.occurrence_count as f64)
            .sum();
        let mean_successes = if total_trials > 0 {
            weighted / total_trials as f64
        } else {
            0.0
        };

        Self {
            config: config.clone(),
            total_trials,
            mean_successes,
            min_successes: sorted.first().map(|b| b.success_count),
            max_successes: sorted.last().map(|b| b.success_count),
            outcomes,
        }
    }

    /// The sentence shown for each outcome, in the calculator and in text reports.
    pub fn outcome_line(&self, row: &OutcomeRow) -> String {
        format!(
            "Roll with {} successes was made {} out of {} times with a probability of {:.2}",
            row.success_count, row.occurrence_count, self.total_trials, row.probability
        )
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();
        let config = &self.config;

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                     DICE CALCULATOR REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str("── CONFIGURATION ────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Dice:              {}d{}\n",
            config.dice_count, config.side_count
        ));
        report.push_str(&format!(
            "  Success on:        {}+\n",
            config.success_threshold
        ));
        if config.explosions_enabled() {
            let cap = if config.max_explosions == 0 {
                "unlimited".to_string()
            } else {
                config.max_explosions.to_string()
            };
            report.push_str(&format!(
                "  Explode on:        {}+ ({} bonus rolls)\n",
                config.explode_threshold, cap
            ));
        } else {
            report.push_str("  Explode on:        disabled\n");
        }
        if !config.failure_faces.is_empty() {
            report.push_str(&format!(
                "  Failure faces:     {}\n",
                config.failure_faces
            ));
        }
        report.push_str(&format!("  Trials:            {}\n\n", self.total_trials));

        report.push_str("── OUTCOMES ─────────────────────────────────────────────────────\n");
        for row in &self.outcomes {
            report.push_str(&format!("  {}\n", self.outcome_line(row)));
        }
        report.push('\n');

        report.push_str("── DISTRIBUTION ─────────────────────────────────────────────────\n");
        report.push_str("  Successes   Exactly   At least\n");
        report.push_str("  ─────────   ───────   ────────\n");
        for row in &self.outcomes {
            let bar_len = (row.probability * 100.0 / 5.0) as usize;
            let bar: String = "█".repeat(bar_len);
            report.push_str(&format!(
                "  {:>9}   {:>6.2}%   {:>7.2}%  {}\n",
                row.success_count,
                row.probability * 100.0,
                row.at_least * 100.0,
                bar
            ));
        }
        report.push('\n');

        report.push_str("── SUMMARY ──────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Mean Successes:    {:.2}\n",
            self.mean_successes
        ));
        if let (Some(min), Some(max)) = (self.min_successes, self.max_successes) {
            report.push_str(&format!("  Range:             {} to {}\n", min, max));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn ratio(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}
