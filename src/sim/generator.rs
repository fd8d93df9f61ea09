//! Seeded random roll generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same game
//! - **Legal by construction**: Picks only from [`Game::possible_rolls`]
//! - **Skill knob**: The error allowance bounds how far below the best legal
//!   roll a pick may land
//!
//! ```
//! use rust_bowling::core::{Game, MAX_ROLLS};
//! use rust_bowling::sim::RollGenerator;
//!
//! let mut generator = RollGenerator::new(42);
//! let mut game = Game::new();
//! generator.play(&mut game, MAX_ROLLS);
//! assert!(game.is_finished());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Game, Roll, ALL_PINS};

/// Error allowance that makes every legal roll possible.
pub const MAX_ERROR_ALLOWANCE: u8 = ALL_PINS;

/// Random legal rolls for a game.
///
/// Uses ChaCha8 so a seed reproduces the same rolls on every platform.
#[derive(Clone, Debug)]
pub struct RollGenerator {
    inner: ChaCha8Rng,
    seed: u64,
    error_allowance: u8,
}

impl RollGenerator {
    /// Create a generator where any legal roll is possible.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            error_allowance: MAX_ERROR_ALLOWANCE,
        }
    }

    /// Restrict picks to at most `allowance` pins below the best legal roll.
    ///
    /// An allowance of 0 always knocks down every standing pin.
    #[must_use]
    pub fn with_error_allowance(mut self, allowance: u8) -> Self {
        self.error_allowance = allowance.min(MAX_ERROR_ALLOWANCE);
        self
    }

    /// Seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Current error allowance.
    #[must_use]
    pub fn error_allowance(&self) -> u8 {
        self.error_allowance
    }

    /// Pick a legal next roll, `None` once the game is finished.
    pub fn next_roll(&mut self, game: &Game) -> Option<Roll> {
        let possible = game.possible_rolls();
        if possible.is_empty() {
            return None;
        }

        let lowest = possible
            .len()
            .saturating_sub(1 + usize::from(self.error_allowance));
        let index = self.inner.gen_range(lowest..possible.len());
        possible.get(index).copied()
    }

    /// Add up to `rolls_limit` random rolls, stopping early if the game ends.
    ///
    /// Returns the number of rolls added.
    pub fn play(&mut self, game: &mut Game, rolls_limit: usize) -> usize {
        let mut added = 0;
        while added < rolls_limit {
            let Some(roll) = self.next_roll(game) else {
                break;
            };
            let result = game.add_roll(roll);
            debug_assert!(result.is_ok(), "generated roll rejected: {result:?}");
            if let Err(err) = result {
                warn!(seed = self.seed, pins = roll.pins(), %err, "generated roll rejected");
                break;
            }
            added += 1;
        }
        debug!(seed = self.seed, added, finished = game.is_finished(), "random rolls played");
        added
    }

    /// Capture the state for later replay.
    #[must_use]
    pub fn state(&self) -> GeneratorState {
        GeneratorState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            error_allowance: self.error_allowance,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GeneratorState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            error_allowance: state.error_allowance.min(MAX_ERROR_ALLOWANCE),
        }
    }
}

/// Serializable generator state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
    /// Error allowance in effect
    pub error_allowance: u8,
}

/// Build a game from up to `rolls_limit` random rolls.
///
/// A `rolls_limit` of `MAX_ROLLS` always yields a finished game.
#[must_use]
pub fn random_game(seed: u64, rolls_limit: usize, error_allowance: u8) -> Game {
    let mut game = Game::new();
    RollGenerator::new(seed)
        .with_error_allowance(error_allowance)
        .play(&mut game, rolls_limit);
    game
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BowlingError, MAX_ROLLS, MIN_ROLLS, PERFECT_SCORE};

    #[test]
    fn test_determinism() {
        let a = random_game(7, MAX_ROLLS, MAX_ERROR_ALLOWANCE);
        let b = random_game(7, MAX_ROLLS, MAX_ERROR_ALLOWANCE);
        assert_eq!(a, b);
    }

    #[test]
    fn test_max_rolls_finishes_game() {
        for seed in 0..50 {
            let game = random_game(seed, MAX_ROLLS, MAX_ERROR_ALLOWANCE);
            assert!(game.is_finished(), "seed {seed} left the game unfinished");
            let rolls = game.rolls().count();
            assert!((MIN_ROLLS..=MAX_ROLLS).contains(&rolls));
        }
    }

    #[test]
    fn test_rolls_limit_respected() {
        let game = random_game(3, 10, MAX_ERROR_ALLOWANCE);
        assert_eq!(game.rolls().count(), 10);
        assert!(!game.is_finished());
    }

    #[test]
    fn test_finished_game_rejects_zero() {
        let mut game = random_game(11, MAX_ROLLS, MAX_ERROR_ALLOWANCE);
        let score = game.total_score();
        assert_eq!(game.add_pins(0), Err(BowlingError::GameFinished));
        assert_eq!(game.total_score(), score);
    }

    #[test]
    fn test_play_counts_every_roll() {
        for seed in 0..50 {
            let mut game = Game::new();
            let mut generator = RollGenerator::new(seed);
            let added = generator.play(&mut game, MAX_ROLLS);
            assert_eq!(added, game.rolls().count(), "seed {seed}");
            assert!(game.is_finished(), "seed {seed} stopped early");

            // Nothing left to add
            assert_eq!(generator.play(&mut game, MAX_ROLLS), 0);
        }
    }

    #[test]
    fn test_zero_allowance_is_perfect() {
        let game = random_game(99, MAX_ROLLS, 0);
        assert!(game.is_finished());
        assert_eq!(game.total_score(), PERFECT_SCORE);
    }

    #[test]
    fn test_allowance_bounds_picks() {
        let mut generator = RollGenerator::new(5).with_error_allowance(2);
        let game = Game::new();
        for _ in 0..100 {
            let roll = generator.next_roll(&game).unwrap();
            assert!(roll.pins() >= 8);
        }
    }

    #[test]
    fn test_next_roll_none_when_finished() {
        let game = random_game(1, MAX_ROLLS, MAX_ERROR_ALLOWANCE);
        assert!(RollGenerator::new(1).next_roll(&game).is_none());
    }

    #[test]
    fn test_state_roundtrip() {
        let mut generator = RollGenerator::new(42).with_error_allowance(4);
        let mut game = Game::new();
        generator.play(&mut game, 5);

        let state = generator.state();
        let mut expected = game.clone();
        generator.play(&mut expected, MAX_ROLLS);

        let mut restored = RollGenerator::from_state(&state);
        let mut actual = game;
        restored.play(&mut actual, MAX_ROLLS);

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GeneratorState {
            seed: 42,
            word_pos: 12345,
            error_allowance: 3,
        };
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GeneratorState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
