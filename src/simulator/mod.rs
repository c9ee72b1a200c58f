//! Monte Carlo dice simulator.
//!
//! Rolls a configurable pool many times and counts how often each net number
//! of successes came up. Probabilities are approximated from those counts;
//! nothing here computes them analytically.

mod config;
mod histogram;
mod report;
mod roller;
mod runner;

pub use config::{FailureFaces, SimulationConfig};
pub use histogram::{Histogram, OutcomeBucket};
pub use report::{OutcomeRow, SimReport};
pub use roller::{DieRoller, RandomRoller, ScriptedRoller};
pub use runner::{roll_trial, run_simulation, simulate, SimOptions};
