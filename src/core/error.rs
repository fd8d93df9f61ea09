//! Engine errors.
//!
//! Both kinds are recoverable: the game is left untouched and the caller
//! may prompt again or start a new game.

use thiserror::Error;

/// Failure of a fallible engine operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BowlingError {
    /// The pin count is outside `0..=ALL_PINS`, or exceeds the pins standing
    /// in the frame about to receive it.
    #[error("invalid roll: {pins} pins with at most {max} standing")]
    InvalidRoll {
        /// The attempted pin count, as supplied by the caller.
        pins: i64,
        /// Pins that could legally have been knocked down.
        max: u8,
    },

    /// A roll was added after the tenth frame completed.
    #[error("game is already finished")]
    GameFinished,
}

/// Engine result alias.
pub type Result<T> = std::result::Result<T, BowlingError>;
