//! Read-only text projection of a game.
//!
//! `Game` implements `Display` here; the engine itself has no formatting.

pub mod scoreboard;

pub use scoreboard::{roll_marks, FrameScoreLabel, RollMark};
