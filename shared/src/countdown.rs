use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_COUNTDOWN_PERIOD_SECONDS;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct CountdownState {
    pub remaining_seconds: i64,
    // Value `remaining_seconds` jumps back to once it drops below zero
    pub period_seconds: i64,
}

/// What a single tick rendered, and whether the counter wrapped afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub clock: String,
    pub wrapped: bool,
}

impl Default for CountdownState {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTDOWN_PERIOD_SECONDS)
    }
}

impl CountdownState {
    pub fn new(duration_seconds: i64) -> Self {
        Self {
            remaining_seconds: duration_seconds,
            period_seconds: duration_seconds,
        }
    }

    pub fn starting_at(remaining_seconds: i64, period_seconds: i64) -> Self {
        Self {
            remaining_seconds: remaining_seconds.clamp(0, period_seconds.max(0)),
            period_seconds,
        }
    }

    /// Renders the current value, then counts down by one second.
    pub fn tick(&mut self) -> Tick {
        let clock = format_clock(self.remaining_seconds);
        self.remaining_seconds -= 1;
        let wrapped = self.remaining_seconds < 0;
        if wrapped {
            self.remaining_seconds = self.period_seconds;
        }
        Tick { clock, wrapped }
    }

    /// Replaces the wrap-time reset, e.g. with a freshly computed time to midnight.
    pub fn rewind_to(&mut self, remaining_seconds: i64) {
        self.remaining_seconds = remaining_seconds.max(0);
    }
}

/// `HH:MM:SS`, each field zero-padded to two digits.
pub fn format_clock(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}
