//! Spinner shown while a simulation runs.

use std::time::{SystemTime, UNIX_EPOCH};

/// Braille spinner characters for animated loading indicators.
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

const ROLLING_MESSAGES: [&str; 6] = [
    "Rolling the bones...",
    "Shaking the cup...",
    "Counting pips...",
    "Chasing exploding dice...",
    "Tallying successes...",
    "Consulting the odds...",
];

/// Returns the current time in milliseconds since UNIX epoch.
fn current_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// Returns the current spinner character based on system time.
/// The spinner cycles every 100ms, completing a full rotation every second.
pub fn spinner_char() -> char {
    let millis = current_millis();
    SPINNER[((millis / 100) % 10) as usize]
}

/// Message that stays put for a given seed.
pub fn rolling_message(seed: u64) -> &'static str {
    ROLLING_MESSAGES[(seed.wrapping_mul(7) as usize) % ROLLING_MESSAGES.len()]
}
