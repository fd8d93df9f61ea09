//! # rust-bowling
//!
//! Incremental ten-pin bowling scoring: enter rolls one at a time, read the
//! score at any point, and ask which pin counts are legal next.
//!
//! ## Design Principles
//!
//! 1. **One roll array**: The game owns every roll in a single growable
//!    array. Frames hold index spans into it, so strike and spare bonuses
//!    read forward across frame boundaries without frames referencing each
//!    other.
//!
//! 2. **Errors are values**: `InvalidRoll` and `GameFinished` come back as
//!    `Result`s and never leave the game half-updated.
//!
//! 3. **Seeded randomness only**: The random roll generator takes its seed
//!    from the caller.
//!
//! ## Modules
//!
//! - `core`: Rolls, the roll chain, frames, the game, errors
//! - `render`: Score board text
//! - `sim`: Seeded random roll generation
//! - `session`: Interactive read-roll-print loop used by the `bowl` binary
//!
//! ```
//! use rust_bowling::Game;
//!
//! let mut game = Game::new();
//! for _ in 0..12 {
//!     game.add_pins(10).unwrap();
//! }
//! assert!(game.is_finished());
//! assert_eq!(game.total_score(), 300);
//! ```

pub mod core;
pub mod render;
pub mod session;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    BowlingError, Frame, FrameState, Game, PossibleRolls, Roll, RollChain, RollId,
    RollIterator, ALL_PINS, NUMBER_OF_FRAMES,
};

pub use crate::render::{FrameScoreLabel, RollMark};

pub use crate::session::{Command, Session, SessionConfig, SessionOutcome};

pub use crate::sim::{random_game, RollGenerator};
