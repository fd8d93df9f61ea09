//! Random game generation for fuzz-style testing and demos.
//!
//! Randomness is always seeded by the caller; nothing here reads global
//! state.

pub mod generator;

pub use generator::{random_game, GeneratorState, RollGenerator, MAX_ERROR_ALLOWANCE};
