//! The whole-game roll sequence.
//!
//! Every roll of a game lives in one growable array owned by the game. The
//! roll after `RollId(i)` is always `RollId(i + 1)`, across frame
//! boundaries, so strike and spare look-ahead is a forward walk from a
//! frame's first roll. Frames store `RollId`s, never references.
//!
//! The chain only grows; the only way to shrink it is [`RollChain::clear`],
//! which the game uses for a full reset.

use serde::{Deserialize, Serialize};

use super::roll::Roll;

/// Index of a roll in its [`RollChain`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RollId(pub u32);

impl RollId {
    /// Create a roll ID.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Position of the roll in the game, 0-based.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The ID the following roll gets (or already has).
    #[must_use]
    pub const fn successor(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RollId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Roll({})", self.0)
    }
}

/// Ordered storage for every roll in a game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RollChain {
    rolls: Vec<Roll>,
}

impl RollChain {
    /// Create an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a roll, linking it after the current tail.
    pub fn push(&mut self, roll: Roll) -> RollId {
        let id = RollId::new(self.rolls.len() as u32);
        self.rolls.push(roll);
        id
    }

    /// Look up a roll.
    #[must_use]
    pub fn get(&self, id: RollId) -> Option<Roll> {
        self.rolls.get(id.index()).copied()
    }

    /// The roll following `id`, if one has been made.
    #[must_use]
    pub fn next(&self, id: RollId) -> Option<RollId> {
        let next = id.successor();
        (next.index() < self.rolls.len()).then_some(next)
    }

    /// Whether a roll has been linked after `id`.
    #[must_use]
    pub fn has_next(&self, id: RollId) -> bool {
        self.next(id).is_some()
    }

    /// Most recent roll.
    #[must_use]
    pub fn last_id(&self) -> Option<RollId> {
        self.rolls.len().checked_sub(1).map(|i| RollId::new(i as u32))
    }

    /// Number of rolls made.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    /// True if no roll has been made.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// Drop every roll.
    pub fn clear(&mut self) {
        self.rolls.clear();
    }

    /// Sum the pins of up to `count` rolls walking forward from `start`.
    ///
    /// Rolls not made yet contribute nothing, so this yields a partial sum
    /// for look-ahead that cannot be completed yet.
    #[must_use]
    pub fn pins_from(&self, start: Option<RollId>, count: usize) -> u32 {
        let Some(start) = start else {
            return 0;
        };
        self.rolls
            .iter()
            .skip(start.index())
            .take(count)
            .map(|roll| u32::from(roll.pins()))
            .sum()
    }

    /// Whether at least `count` rolls exist starting at `start` (inclusive).
    #[must_use]
    pub fn has_sequence(&self, start: Option<RollId>, count: usize) -> bool {
        match start {
            Some(start) => start.index() < self.rolls.len() && self.rolls.len() - start.index() >= count,
            None => count == 0,
        }
    }

    /// Iterate the rolls from `first` to `last`, both inclusive.
    ///
    /// Either endpoint being `None` yields an empty iterator.
    #[must_use]
    pub fn between(&self, first: Option<RollId>, last: Option<RollId>) -> RollIterator<'_> {
        RollIterator::new(self, first, last)
    }

    /// Iterate every roll in the game.
    #[must_use]
    pub fn iter(&self) -> RollIterator<'_> {
        let first = (!self.rolls.is_empty()).then_some(RollId::new(0));
        RollIterator::new(self, first, self.last_id())
    }
}

/// Bounded traversal over a [`RollChain`] between two endpoints.
///
/// Yields `(RollId, Roll)` pairs so callers can tell where in the game each
/// roll sits without touching the chain's storage.
#[derive(Clone, Debug)]
pub struct RollIterator<'a> {
    chain: &'a RollChain,
    current: Option<RollId>,
    end: Option<RollId>,
}

impl<'a> RollIterator<'a> {
    /// Precondition: `first <= last`, both in `chain`.
    #[must_use]
    pub fn new(chain: &'a RollChain, first: Option<RollId>, last: Option<RollId>) -> Self {
        let current = match (first, last) {
            (Some(first), Some(last)) if first <= last => Some(first),
            _ => None,
        };
        Self {
            chain,
            current,
            end: last,
        }
    }
}

impl Iterator for RollIterator<'_> {
    type Item = (RollId, Roll);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let roll = self.chain.get(id)?;
        self.current = match self.end {
            Some(end) if id < end => self.chain.next(id),
            _ => None,
        };
        Some((id, roll))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.current, self.end) {
            (Some(current), Some(end)) => {
                let available = self.chain.len().saturating_sub(current.index());
                let remaining = (end.index() - current.index() + 1).min(available);
                (remaining, Some(remaining))
            }
            _ => (0, Some(0)),
        }
    }
}

impl std::iter::FusedIterator for RollIterator<'_> {}
