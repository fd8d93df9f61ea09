//! Frames: one scoring unit over a span of the roll chain.
//!
//! A `Frame` owns no rolls. It records the first and last [`RollId`] of its
//! span and asks the [`RollChain`] for everything else, including the rolls
//! of later frames that strike and spare bonuses need.
//!
//! ## Completion
//!
//! - Frames 1-9: a strike completes the frame; otherwise two rolls do.
//! - Frame 10: a strike or spare earns a third roll; otherwise two rolls.
//!
//! ## Scoring
//!
//! A strike or spare scores the three rolls starting at the frame's first
//! roll; an open frame scores its own rolls. Both are walks along the chain,
//! so a bonus roll is counted wherever it administratively lives.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::chain::{RollChain, RollId, RollIterator};
use super::roll::{PossibleRolls, Roll, ALL_PINS};

/// Observable position in the frame's state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameState {
    /// No roll yet.
    Empty,
    /// One roll made, another is required.
    OneRoll,
    /// Tenth frame opened with a strike or spare and awaits a bonus roll.
    BonusPending,
    /// Every roll the frame needs has been made.
    Complete,
}

/// First and last roll of a frame, inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct RollSpan {
    first: RollId,
    last: RollId,
}

/// One of the ten frames of a game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    span: Option<RollSpan>,
    is_last: bool,
}

impl Frame {
    /// Create an empty frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tenth frame.
    #[must_use]
    pub fn last() -> Self {
        Self {
            span: None,
            is_last: true,
        }
    }

    /// Whether this is the tenth frame.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.is_last
    }

    /// First roll of the frame.
    #[must_use]
    pub fn first_roll(&self) -> Option<RollId> {
        self.span.map(|s| s.first)
    }

    /// Last roll of the frame so far.
    #[must_use]
    pub fn last_roll(&self) -> Option<RollId> {
        self.span.map(|s| s.last)
    }

    /// Extend the frame's span with `id`.
    ///
    /// Precondition: `id` is the roll immediately after the frame's current
    /// last roll, and the caller has checked the roll is legal here. No
    /// validation happens beyond the roll's own pin bound.
    pub fn add_roll(&mut self, id: RollId) {
        match &mut self.span {
            Some(span) => {
                debug_assert_eq!(id, span.last.successor(), "frame rolls must be contiguous");
                span.last = id;
            }
            None => {
                self.span = Some(RollSpan { first: id, last: id });
            }
        }
        trace!(roll = %id, is_last = self.is_last, "roll added to frame");
    }

    /// Iterate the frame's own rolls.
    #[must_use]
    pub fn rolls<'a>(&self, chain: &'a RollChain) -> RollIterator<'a> {
        chain.between(self.first_roll(), self.last_roll())
    }

    /// Number of rolls in this frame: 0, 1, 2, or 3 for the tenth frame.
    #[must_use]
    pub fn roll_count(&self) -> usize {
        self.span
            .map_or(0, |s| s.last.index() - s.first.index() + 1)
    }

    /// Whether the first roll knocked down all the pins.
    #[must_use]
    pub fn is_strike(&self, chain: &RollChain) -> bool {
        self.first_roll()
            .and_then(|id| chain.get(id))
            .is_some_and(Roll::is_strike)
    }

    /// Whether the first two rolls, without a strike, knocked down all the pins.
    #[must_use]
    pub fn is_spare(&self, chain: &RollChain) -> bool {
        !self.is_strike(chain)
            && self.roll_count() >= 2
            && chain.pins_from(self.first_roll(), 2) == u32::from(ALL_PINS)
    }

    /// Whether the frame has every roll it needs.
    #[must_use]
    pub fn has_all_rolls(&self, chain: &RollChain) -> bool {
        let count = self.roll_count();
        if self.is_last {
            if self.is_strike(chain) || self.is_spare(chain) {
                count == 3
            } else {
                count == 2
            }
        } else {
            self.is_strike(chain) || count == 2
        }
    }

    /// Where the frame sits in its completion state machine.
    #[must_use]
    pub fn state(&self, chain: &RollChain) -> FrameState {
        if self.has_all_rolls(chain) {
            FrameState::Complete
        } else {
            match self.roll_count() {
                0 => FrameState::Empty,
                1 => FrameState::OneRoll,
                _ => FrameState::BonusPending,
            }
        }
    }

    /// Frame score so far, including whatever look-ahead rolls exist.
    ///
    /// Partial until [`score_is_complete`](Self::score_is_complete).
    #[must_use]
    pub fn score(&self, chain: &RollChain) -> u32 {
        if self.is_strike(chain) || self.is_spare(chain) {
            chain.pins_from(self.first_roll(), 3)
        } else {
            chain.pins_from(self.first_roll(), self.roll_count())
        }
    }

    /// Whether every roll the frame's score depends on has been made.
    #[must_use]
    pub fn score_is_complete(&self, chain: &RollChain) -> bool {
        if self.is_strike(chain) || self.is_spare(chain) {
            chain.has_sequence(self.first_roll(), 3)
        } else {
            chain.has_sequence(self.first_roll(), 2)
        }
    }

    /// Pins standing for the next roll of this frame.
    ///
    /// Starts at a full rack. In the tenth frame a cleared rack is reset
    /// whenever another roll follows, so bonus rolls always face pins.
    #[must_use]
    pub fn pins_up(&self, chain: &RollChain) -> u8 {
        let complete = self.has_all_rolls(chain);
        let mut pins_up = ALL_PINS;

        let mut rolls = self.rolls(chain).peekable();
        while let Some((_, roll)) = rolls.next() {
            pins_up = pins_up.saturating_sub(roll.pins());
            if self.is_last && pins_up == 0 && (rolls.peek().is_some() || !complete) {
                pins_up = ALL_PINS;
            }
        }

        pins_up
    }

    /// The legal next rolls for this frame; empty once it has all its rolls.
    #[must_use]
    pub fn possible_rolls(&self, chain: &RollChain) -> PossibleRolls {
        if self.has_all_rolls(chain) {
            PossibleRolls::new()
        } else {
            Roll::range(self.pins_up(chain))
        }
    }

    /// Whether `candidate` could be the next roll of this frame.
    #[must_use]
    pub fn can_roll(&self, chain: &RollChain, candidate: Roll) -> bool {
        self.possible_rolls(chain)
            .iter()
            .any(|roll| roll.same_pins(candidate))
    }
}
