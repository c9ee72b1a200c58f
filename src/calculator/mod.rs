//! Interactive calculator state, independent of the terminal.

pub mod form;
pub mod input;

pub use form::{CalculatorForm, FieldKind, Question};
pub use input::{process_form_input, FormInput, FormResult};

use crate::simulator::{SimReport, SimulationConfig};
use crate::utils::persistence;

/// File the last submitted configuration is kept in.
pub const LAST_CONFIG_FILE: &str = "last_config.json";

/// Where the calculator is between questions and answers.
#[derive(Debug, Clone)]
pub enum Phase {
    /// Answering questions
    Editing,
    /// Simulation started for this config, waiting on the result
    Running(SimulationConfig),
    /// Simulation finished
    Done(SimReport),
}

/// The last submitted configuration, or `None` if there is none or it cannot be read.
pub fn load_saved_config() -> Option<SimulationConfig> {
    persistence::load_json_or_default::<Option<SimulationConfig>>(LAST_CONFIG_FILE)
}

#[derive(Debug, Clone)]
pub struct CalculatorScreen {
    pub form: CalculatorForm,
    pub phase: Phase,
    /// Bumped on every submit and restart so stale results can be told apart
    pub generation: u64,
    /// One-line notice below the form (e.g. a failed save)
    pub status: Option<String>,
}

impl Default for CalculatorScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorScreen {
    pub fn new() -> Self {
        Self {
            form: CalculatorForm::new(),
            phase: Phase::Editing,
            generation: 0,
            status: None,
        }
    }

    /// Screen with answers pre-filled from the last submitted configuration, if any.
    pub fn with_saved_config() -> Self {
        let mut screen = Self::new();
        if let Some(config) = load_saved_config() {
            screen.form = CalculatorForm::from_config(&config);
        }
        screen
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.phase, Phase::Editing)
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running(_))
    }

    /// Clear every answer and any result. Pending results are discarded by generation.
    pub fn restart(&mut self) {
        let generation = self.generation + 1;
        *self = Self::new();
        self.generation = generation;
    }

    /// Lock the form and mark the simulation for `config` as running.
    pub fn start(&mut self, config: SimulationConfig) {
        self.generation += 1;
        self.phase = Phase::Running(config);
    }

    /// Hand in a finished report. Returns false (and drops it) if it belongs to
    /// an earlier submit or the screen was restarted since.
    pub fn finish(&mut self, generation: u64, report: SimReport) -> bool {
        if generation != self.generation || !self.is_running() {
            return false;
        }
        self.phase = Phase::Done(report);
        true
    }

    /// Remember `config` for the next session, noting failures on the status line.
    pub fn remember(&mut self, config: &SimulationConfig) {
        if let Err(e) = persistence::save_json(LAST_CONFIG_FILE, config) {
            self.status = Some(format!("Could not save settings: {}", e));
        }
    }
}
