//! Remarks printed after rolls and at the end of a game.

use crate::core::{ALL_PINS, PERFECT_SCORE};

/// Remark for knocking down `pins` with `pins_before` standing.
#[must_use]
pub fn roll_remark(pins: u8, pins_before: u8) -> Option<&'static str> {
    if pins == ALL_PINS {
        return Some("Perfect shot!");
    }
    match pins_before.saturating_sub(pins) {
        0 => Some("You got all of them!"),
        1 => Some("Good job!"),
        2 => Some("Not bad!"),
        _ => None,
    }
}

/// Remark for a finished game.
#[must_use]
pub fn final_remark(score: u32) -> Option<&'static str> {
    match score {
        PERFECT_SCORE => Some("Wow! A perfect game!"),
        s if s > 250 => Some("Very impressive!"),
        s if s > 200 => Some("Way to go!"),
        s if s > 150 => Some("Not bad!"),
        _ => None,
    }
}
