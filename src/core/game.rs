//! A ten-frame game: roll insertion, turn advancement, and scoring.
//!
//! ## Usage
//!
//! ```
//! use rust_bowling::core::{BowlingError, Game, Roll};
//!
//! let mut game = Game::new();
//! game.add_roll(Roll::new(10).unwrap()).unwrap();
//! game.add_pins(3).unwrap();
//! game.add_pins(7).unwrap();
//! game.add_pins(4).unwrap();
//!
//! // strike (10+3+7) + spare (3+7+4) + open frame so far (4)
//! assert_eq!(game.total_score(), 38);
//!
//! // Only 6 pins are standing
//! assert!(matches!(game.add_pins(7), Err(BowlingError::InvalidRoll { .. })));
//! ```
//!
//! A `Game` is a plain owned value. Mutation goes through `&mut self`, so
//! the borrow checker already serializes writers against readers; share it
//! across threads behind a single `Mutex` if needed.

use tracing::{debug, trace};

use super::chain::{RollChain, RollIterator};
use super::error::{BowlingError, Result};
use super::frame::Frame;
use super::roll::{PossibleRolls, Roll, NUMBER_OF_FRAMES};

/// One bowler's game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    /// Every roll made, in order. Frames index into this.
    chain: RollChain,
    frames: [Frame; NUMBER_OF_FRAMES],
    /// Frame that received the last roll, or 0 before any roll.
    current_frame_index: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create an empty game.
    #[must_use]
    pub fn new() -> Self {
        Self {
            chain: RollChain::new(),
            frames: Self::fresh_frames(),
            current_frame_index: 0,
        }
    }

    fn fresh_frames() -> [Frame; NUMBER_OF_FRAMES] {
        std::array::from_fn(|i| {
            if i == NUMBER_OF_FRAMES - 1 {
                Frame::last()
            } else {
                Frame::new()
            }
        })
    }

    /// Discard all history and start over.
    pub fn reset(&mut self) {
        debug!(rolls = self.chain.len(), "game reset");
        self.chain.clear();
        self.frames = Self::fresh_frames();
        self.current_frame_index = 0;
    }

    /// The ten frames, in order.
    #[must_use]
    pub fn frames(&self) -> &[Frame; NUMBER_OF_FRAMES] {
        &self.frames
    }

    /// A frame by 0-based index.
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// The roll chain every frame reads from.
    #[must_use]
    pub fn chain(&self) -> &RollChain {
        &self.chain
    }

    /// Index of the frame that received the last roll, 0 before any roll.
    #[must_use]
    pub fn current_frame_index(&self) -> usize {
        self.current_frame_index
    }

    /// Index of the frame the next roll goes in, `None` once finished.
    #[must_use]
    pub fn next_roll_frame_index(&self) -> Option<usize> {
        if !self.frames[self.current_frame_index].has_all_rolls(&self.chain) {
            Some(self.current_frame_index)
        } else if self.current_frame_index + 1 < NUMBER_OF_FRAMES {
            Some(self.current_frame_index + 1)
        } else {
            None
        }
    }

    /// The frame the next roll goes in, `None` once finished.
    #[must_use]
    pub fn next_roll_frame(&self) -> Option<&Frame> {
        self.next_roll_frame_index().map(|i| &self.frames[i])
    }

    /// Whether the tenth frame has all its rolls.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.frames[NUMBER_OF_FRAMES - 1].has_all_rolls(&self.chain)
    }

    /// Pins standing for the next roll, `None` once finished.
    #[must_use]
    pub fn pins_up(&self) -> Option<u8> {
        self.next_roll_frame().map(|f| f.pins_up(&self.chain))
    }

    /// Add a roll to the game.
    ///
    /// Fails with `GameFinished` after the tenth frame completes, or with
    /// `InvalidRoll` if more pins fall than are standing. Neither failure
    /// changes the game.
    pub fn add_roll(&mut self, roll: Roll) -> Result<()> {
        let Some(target) = self.next_roll_frame_index() else {
            debug!(pins = roll.pins(), "roll rejected: game finished");
            return Err(BowlingError::GameFinished);
        };

        let pins_up = self.frames[target].pins_up(&self.chain);
        if roll.pins() > pins_up {
            debug!(pins = roll.pins(), pins_up, frame = target, "roll rejected: too many pins");
            return Err(BowlingError::InvalidRoll {
                pins: i64::from(roll.pins()),
                max: pins_up,
            });
        }

        if target != self.current_frame_index {
            trace!(from = self.current_frame_index, to = target, "advancing frame");
            self.current_frame_index = target;
        }

        let id = self.chain.push(roll);
        self.frames[target].add_roll(id);
        debug!(pins = roll.pins(), frame = target, total = self.total_score(), "roll accepted");
        Ok(())
    }

    /// Validate a caller-supplied pin count and add it.
    pub fn add_pins(&mut self, pins: i64) -> Result<()> {
        let roll = Roll::try_from(pins)?;
        self.add_roll(roll)
    }

    /// Score so far, including partial scores of incomplete frames.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.frames[..=self.current_frame_index]
            .iter()
            .map(|frame| frame.score(&self.chain))
            .sum()
    }

    /// The legal next rolls; empty once finished.
    #[must_use]
    pub fn possible_rolls(&self) -> PossibleRolls {
        self.next_roll_frame()
            .map(|frame| frame.possible_rolls(&self.chain))
            .unwrap_or_default()
    }

    /// Whether `candidate` would be a legal next roll.
    #[must_use]
    pub fn can_roll(&self, candidate: Roll) -> bool {
        self.next_roll_frame()
            .is_some_and(|frame| frame.can_roll(&self.chain, candidate))
    }

    /// Iterate every roll made so far.
    #[must_use]
    pub fn rolls(&self) -> RollIterator<'_> {
        self.chain.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::roll::{ALL_PINS, MAX_ROLLS, PERFECT_SCORE};

    fn play(game: &mut Game, pins: &[i64]) {
        for &p in pins {
            game.add_pins(p).unwrap();
        }
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.total_score(), 0);
        assert_eq!(game.current_frame_index(), 0);
        assert!(!game.is_finished());
        assert!(game.frames()[NUMBER_OF_FRAMES - 1].is_last());
        assert!(game.frames()[..NUMBER_OF_FRAMES - 1].iter().all(|f| !f.is_last()));
        assert_eq!(game.pins_up(), Some(ALL_PINS));
    }

    #[test]
    fn test_total_score() {
        let mut game = Game::new();
        play(&mut game, &[10, 3, 7, 4, 3]);
        assert_eq!(game.total_score(), 20 + 14 + 4 + 3);

        let mut game = Game::new();
        for _ in 0..12 {
            game.add_pins(10).unwrap();
        }
        assert_eq!(game.total_score(), PERFECT_SCORE);
        assert!(game.is_finished());
    }

    #[test]
    fn test_partial_score_counts_current_frame() {
        let mut game = Game::new();
        play(&mut game, &[10, 3, 7, 4]);
        assert_eq!(game.total_score(), 38);
        assert_eq!(game.current_frame_index(), 2);
    }

    #[test]
    fn test_next_roll_frame() {
        let mut game = Game::new();
        assert_eq!(game.next_roll_frame_index(), Some(0));

        game.add_pins(10).unwrap();
        assert_eq!(game.next_roll_frame_index(), Some(1));

        game.add_pins(3).unwrap();
        assert_eq!(game.next_roll_frame_index(), Some(1));

        game.add_pins(4).unwrap();
        assert_eq!(game.next_roll_frame_index(), Some(2));
        assert_eq!(game.next_roll_frame(), game.frame(2));
    }

    #[test]
    fn test_cursor_stays_until_next_roll() {
        let mut game = Game::new();
        game.add_pins(10).unwrap();
        // Frame 0 is complete but the cursor only moves when a roll lands
        assert_eq!(game.current_frame_index(), 0);
        game.add_pins(2).unwrap();
        assert_eq!(game.current_frame_index(), 1);
    }

    #[test]
    fn test_add_roll_too_many_pins() {
        let mut game = Game::new();
        game.add_pins(6).unwrap();
        assert_eq!(
            game.add_pins(5),
            Err(BowlingError::InvalidRoll { pins: 5, max: 4 })
        );
        assert_eq!(game.chain().len(), 1);
        assert_eq!(game.total_score(), 6);
    }

    #[test]
    fn test_add_pins_out_of_range() {
        let mut game = Game::new();
        assert!(matches!(game.add_pins(11), Err(BowlingError::InvalidRoll { .. })));
        assert!(matches!(game.add_pins(-3), Err(BowlingError::InvalidRoll { .. })));
        assert!(game.chain().is_empty());
    }

    #[test]
    fn test_add_roll_after_finish() {
        let mut game = Game::new();
        for _ in 0..10 {
            play(&mut game, &[0, 0]);
        }
        assert!(game.is_finished());
        assert_eq!(game.add_pins(0), Err(BowlingError::GameFinished));
        assert_eq!(game.total_score(), 0);
        assert_eq!(game.pins_up(), None);
        assert!(game.possible_rolls().is_empty());
        assert!(!game.can_roll(Roll::new(0).unwrap()));
    }

    #[test]
    fn test_tenth_frame_bonus() {
        let mut game = Game::new();
        for _ in 0..9 {
            play(&mut game, &[0, 0]);
        }
        play(&mut game, &[10, 10]);
        assert!(!game.is_finished());
        assert_eq!(game.pins_up(), Some(10));

        game.add_pins(10).unwrap();
        assert!(game.is_finished());
        assert_eq!(game.total_score(), 30);
    }

    #[test]
    fn test_tenth_frame_spare_bonus() {
        let mut game = Game::new();
        for _ in 0..9 {
            play(&mut game, &[1, 1]);
        }
        play(&mut game, &[4, 6]);
        assert_eq!(game.possible_rolls().len(), 11);
        game.add_pins(7).unwrap();
        assert!(game.is_finished());
        assert_eq!(game.total_score(), 18 + 17);
    }

    #[test]
    fn test_tenth_frame_strike_then_partial_rack() {
        let mut game = Game::new();
        for _ in 0..9 {
            play(&mut game, &[0, 0]);
        }
        play(&mut game, &[10, 6]);
        assert_eq!(game.pins_up(), Some(4));
        assert!(game.add_pins(5).is_err());
        game.add_pins(4).unwrap();
        assert!(game.is_finished());
        assert_eq!(game.total_score(), 20);
    }

    #[test]
    fn test_max_rolls() {
        let mut game = Game::new();
        for _ in 0..10 {
            play(&mut game, &[5, 5]);
        }
        game.add_pins(5).unwrap();
        assert_eq!(game.rolls().count(), MAX_ROLLS);
        assert!(game.is_finished());
        assert_eq!(game.total_score(), 150);
    }

    #[test]
    fn test_strike_in_ninth_frame_reads_tenth() {
        let mut game = Game::new();
        for _ in 0..8 {
            play(&mut game, &[0, 0]);
        }
        play(&mut game, &[10, 3, 4]);
        assert!(game.frames()[8].score_is_complete(game.chain()));
        assert_eq!(game.frames()[8].score(game.chain()), 17);
        assert_eq!(game.total_score(), 24);
    }

    #[test]
    fn test_possible_rolls_and_can_roll() {
        let mut game = Game::new();
        game.add_pins(3).unwrap();

        let possible = game.possible_rolls();
        assert_eq!(possible.len(), 8);
        for pins in 0..=ALL_PINS {
            let roll = Roll::new(pins).unwrap();
            assert_eq!(game.can_roll(roll), pins <= 7);
        }
    }

    #[test]
    fn test_reset() {
        let mut game = Game::new();
        play(&mut game, &[10, 10, 4]);
        game.reset();
        assert_eq!(game, Game::new());
        game.add_pins(7).unwrap();
        assert_eq!(game.total_score(), 7);
    }
}
