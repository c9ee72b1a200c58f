//! Dice Calculator - Monte Carlo estimates of dice pool outcomes.
//!
//! The [`simulator`] module is the engine; [`calculator`] and [`ui`] make up
//! the interactive terminal front end built on top of it.

pub mod calculator;
pub mod simulator;
pub mod ui;
pub mod utils;

pub use simulator::{
    roll_trial, run_simulation, simulate, DieRoller, FailureFaces, Histogram, OutcomeBucket,
    RandomRoller, ScriptedRoller, SimOptions, SimReport, SimulationConfig,
};
