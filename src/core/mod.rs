//! Scoring engine: rolls, the roll chain, frames, and the game.
//!
//! This module is pure computation with no I/O. Everything else in the
//! crate is a consumer of [`Game`].

pub mod chain;
pub mod error;
pub mod frame;
pub mod game;
pub mod roll;

pub use chain::{RollChain, RollId, RollIterator};
pub use error::{BowlingError, Result};
pub use frame::{Frame, FrameState};
pub use game::Game;
pub use roll::{
    PossibleRolls, Roll, ALL_PINS, MAX_ROLLS, MIN_ROLLS, NUMBER_OF_FRAMES, PERFECT_SCORE,
};
