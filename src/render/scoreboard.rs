//! Text score board for a [`Game`].
//!
//! Layout, one cell per frame:
//!
//! ```text
//! |(20) X | . |(14) 3 | / |(4+?) 4 | @ |( ? )   |   | ... || Total: 38
//! ```
//!
//! The label in parentheses is the frame's own score: the number once
//! complete, `N+?` while bonus rolls are outstanding, ` ? ` if nothing has
//! been scored. Rendering never touches game state.

use std::fmt;

use crate::core::{Frame, Game, RollChain, ALL_PINS};

/// Symbol shown in one roll box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RollMark {
    /// A full rack knocked down with one ball.
    Strike,
    /// The remaining pins of a rack knocked down.
    Spare,
    /// Zero pins on a roll after the first of the frame.
    Miss,
    /// Any other pin count.
    Pins(u8),
    /// A box the frame finished without using.
    Skip,
    /// The box waiting for the next roll.
    Next,
    /// Not reached yet.
    Empty,
}

impl fmt::Display for RollMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RollMark::Strike => f.write_str("X"),
            RollMark::Spare => f.write_str("/"),
            RollMark::Miss => f.write_str("-"),
            RollMark::Pins(pins) => write!(f, "{pins}"),
            RollMark::Skip => f.write_str("."),
            RollMark::Next => f.write_str("@"),
            RollMark::Empty => f.write_str(" "),
        }
    }
}

/// Score label of one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameScoreLabel {
    /// Every roll the score depends on has been made.
    Complete(u32),
    /// Some pins counted, bonus or second roll still outstanding.
    Partial(u32),
    /// Nothing scored yet.
    Unknown,
}

impl FrameScoreLabel {
    /// Label for `frame`.
    #[must_use]
    pub fn of(frame: &Frame, chain: &RollChain) -> Self {
        let score = frame.score(chain);
        if frame.score_is_complete(chain) {
            FrameScoreLabel::Complete(score)
        } else if score == 0 {
            FrameScoreLabel::Unknown
        } else {
            FrameScoreLabel::Partial(score)
        }
    }
}

impl fmt::Display for FrameScoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameScoreLabel::Complete(score) => write!(f, "{score}"),
            FrameScoreLabel::Partial(score) => write!(f, "{score}+?"),
            FrameScoreLabel::Unknown => f.write_str(" ? "),
        }
    }
}

/// Roll boxes of the frame at `index`: two, or three for the tenth frame.
#[must_use]
pub fn roll_marks(game: &Game, index: usize) -> Vec<RollMark> {
    let Some(frame) = game.frame(index) else {
        return Vec::new();
    };
    let chain = game.chain();
    let box_count = if frame.is_last() { 3 } else { 2 };

    let mut marks = Vec::with_capacity(box_count);
    let mut standing = ALL_PINS;
    let mut fresh_rack = true;
    for (position, (_, roll)) in frame.rolls(chain).enumerate() {
        let pins = roll.pins();
        let mark = if fresh_rack && pins == ALL_PINS {
            RollMark::Strike
        } else if !fresh_rack && pins == standing {
            RollMark::Spare
        } else if pins == 0 && position > 0 {
            RollMark::Miss
        } else {
            RollMark::Pins(pins)
        };
        marks.push(mark);

        standing = standing.saturating_sub(pins);
        fresh_rack = standing == 0;
        if fresh_rack {
            standing = ALL_PINS;
        }
    }

    if marks.len() < box_count {
        if game.next_roll_frame_index() == Some(index) {
            marks.push(RollMark::Next);
        } else if frame.has_all_rolls(chain) {
            marks.push(RollMark::Skip);
        }
    }
    marks.resize(box_count, RollMark::Empty);
    marks
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("|")?;
        for (index, frame) in self.frames().iter().enumerate() {
            write!(f, "({}) ", FrameScoreLabel::of(frame, self.chain()))?;
            for (position, mark) in roll_marks(self, index).iter().enumerate() {
                if position > 0 {
                    f.write_str(" | ")?;
                }
                write!(f, "{mark}")?;
            }
            f.write_str(" |")?;
        }
        write!(f, "| Total: {}", self.total_score())
    }
}
