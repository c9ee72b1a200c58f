//! UI-agnostic input handling for the calculator screen.

use super::{CalculatorScreen, Phase};
use crate::simulator::SimulationConfig;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input events for the calculator screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormInput {
    /// Character typed into the focused field
    Char(char),
    /// Backspace pressed
    Backspace,
    /// Enter pressed: next question, or run on the last one
    Enter,
    /// Tab or Down
    Next,
    /// Shift+Tab or Up
    Previous,
    /// Clear everything and start over
    Restart,
    /// Leave the calculator
    Quit,
    /// Any other key
    Other,
}

impl FormInput {
    pub fn from_key_event(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => FormInput::Quit,
            KeyCode::Char('q') | KeyCode::Char('Q') => FormInput::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => FormInput::Restart,
            KeyCode::Char(c) => FormInput::Char(c),
            KeyCode::Backspace => FormInput::Backspace,
            KeyCode::Enter => FormInput::Enter,
            KeyCode::Tab | KeyCode::Down => FormInput::Next,
            KeyCode::BackTab | KeyCode::Up => FormInput::Previous,
            _ => FormInput::Other,
        }
    }
}

/// Result of processing calculator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormResult {
    /// Stay on the screen
    Continue,
    /// Answers are valid; run this simulation (the screen is now `Running`)
    Submitted(SimulationConfig),
    /// Answers and results were cleared
    Restarted,
    /// Exit the program
    Quit,
}

/// Process input for the calculator screen.
///
/// Once a simulation has been submitted the form is locked: only restart and
/// quit do anything until the user restarts.
pub fn process_form_input(screen: &mut CalculatorScreen, input: FormInput) -> FormResult {
    match input {
        FormInput::Quit => return FormResult::Quit,
        FormInput::Restart => {
            screen.restart();
            return FormResult::Restarted;
        }
        _ => {}
    }

    if !matches!(screen.phase, Phase::Editing) {
        return FormResult::Continue;
    }

    match input {
        FormInput::Char(c) => screen.form.handle_char_input(c),
        FormInput::Backspace => screen.form.handle_backspace(),
        FormInput::Next => screen.form.focus_next(),
        FormInput::Previous => screen.form.focus_previous(),
        FormInput::Enter if screen.form.on_last_question() => {
            if let Some(config) = screen.form.submit() {
                screen.start(config.clone());
                return FormResult::Submitted(config);
            }
        }
        FormInput::Enter => screen.form.focus_next(),
        FormInput::Quit | FormInput::Restart | FormInput::Other => {}
    }

    FormResult::Continue
}
