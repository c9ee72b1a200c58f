//! Question form that collects a [`SimulationConfig`].

use crate::simulator::{FailureFaces, SimulationConfig};

/// What a question's text field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Digits only
    Number,
    /// Digits, commas and spaces
    FaceList,
}

impl FieldKind {
    pub fn accepts(self, c: char) -> bool {
        match self {
            FieldKind::Number => c.is_ascii_digit(),
            FieldKind::FaceList => c.is_ascii_digit() || c == ',' || c == ' ',
        }
    }
}

pub const SIDES: usize = 0;
pub const DICE: usize = 1;
pub const SUCCESS: usize = 2;
pub const EXPLODE: usize = 3;
pub const MAX_EXPLOSIONS: usize = 4;
pub const TRIALS: usize = 5;
pub const FAILURE_FACES: usize = 6;

/// Prompts in the order they are asked.
pub const QUESTIONS: [(&str, FieldKind); 7] = [
    ("Amount of dice sides", FieldKind::Number),
    ("Amount of dice", FieldKind::Number),
    ("Minimum roll for a success", FieldKind::Number),
    ("Minimum roll for exploding (0 to disable)", FieldKind::Number),
    ("Maximum exploding rolls (0 for unlimited)", FieldKind::Number),
    ("Amount of rolls to do for the calculation", FieldKind::Number),
    (
        "Dice sides that count as a failure (comma separated, optional)",
        FieldKind::FaceList,
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: &'static str,
    pub kind: FieldKind,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorForm {
    pub questions: Vec<Question>,
    pub focus_index: usize,
    pub validation_error: Option<String>,
}

impl Default for CalculatorForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorForm {
    pub fn new() -> Self {
        Self {
            questions: QUESTIONS
                .iter()
                .map(|&(text, kind)| Question {
                    text,
                    kind,
                    value: String::new(),
                })
                .collect(),
            focus_index: 0,
            validation_error: None,
        }
    }

    /// Form pre-filled with the values of an earlier configuration.
    pub fn from_config(config: &SimulationConfig) -> Self {
        let mut form = Self::new();
        form.questions[SIDES].value = config.side_count.to_string();
        form.questions[DICE].value = config.dice_count.to_string();
        form.questions[SUCCESS].value = config.success_threshold.to_string();
        form.questions[EXPLODE].value = config.explode_threshold.to_string();
        form.questions[MAX_EXPLOSIONS].value = config.max_explosions.to_string();
        form.questions[TRIALS].value = config.trial_count.to_string();
        form.questions[FAILURE_FACES].value = config.failure_faces.to_string();
        form
    }

    pub fn focused(&self) -> &Question {
        &self.questions[self.focus_index]
    }

    pub fn on_last_question(&self) -> bool {
        self.focus_index + 1 == self.questions.len()
    }

    /// Append a character to the focused field if the field accepts it.
    pub fn handle_char_input(&mut self, c: char) {
        let question = &mut self.questions[self.focus_index];
        if question.kind.accepts(c) {
            question.value.push(c);
            self.validation_error = None;
        }
    }

    pub fn handle_backspace(&mut self) {
        if self.questions[self.focus_index].value.pop().is_some() {
            self.validation_error = None;
        }
    }

    pub fn focus_next(&mut self) {
        self.focus_index = (self.focus_index + 1) % self.questions.len();
    }

    pub fn focus_previous(&mut self) {
        self.focus_index = self
            .focus_index
            .checked_sub(1)
            .unwrap_or(self.questions.len() - 1);
    }

    /// Build a config from the current answers. Anything that is not a number counts as 0.
    pub fn to_config(&self) -> SimulationConfig {
        SimulationConfig {
            side_count: parse_number(&self.questions[SIDES].value),
            dice_count: parse_number(&self.questions[DICE].value),
            success_threshold: parse_number(&self.questions[SUCCESS].value),
            explode_threshold: parse_number(&self.questions[EXPLODE].value),
            max_explosions: parse_number(&self.questions[MAX_EXPLOSIONS].value),
            trial_count: parse_number(&self.questions[TRIALS].value),
            failure_faces: FailureFaces::parse(&self.questions[FAILURE_FACES].value),
        }
    }

    /// First numeric answer that is all digits but too large for its field.
    pub fn out_of_range_question(&self) -> Option<&Question> {
        self.questions.iter().enumerate().find_map(|(index, question)| {
            let value = question.value.trim();
            if question.kind != FieldKind::Number
                || value.is_empty()
                || !value.chars().all(|c| c.is_ascii_digit())
            {
                return None;
            }
            let fits = if index == TRIALS {
                value.parse::<u64>().is_ok()
            } else {
                value.parse::<u32>().is_ok()
            };
            (!fits).then_some(question)
        })
    }

    /// Parse and validate the answers, recording the error on the form if invalid.
    pub fn submit(&mut self) -> Option<SimulationConfig> {
        if let Some(question) = self.out_of_range_question() {
            let message = format!("{} is out of range", question.text);
            self.validation_error = Some(message);
            return None;
        }

        let config = self.to_config();
        match config.validate() {
            Ok(()) => {
                self.validation_error = None;
                Some(config)
            }
            Err(e) => {
                self.validation_error = Some(e);
                None
            }
        }
    }
}

/// Best-effort integer parse: empty or malformed input is 0.
pub fn parse_number<T: std::str::FromStr + Default>(input: &str) -> T {
    input.trim().parse().unwrap_or_default()
}
