//! A single throw and the rules constants every other module shares.
//!
//! A `Roll` is an immutable fact: once constructed its pin count is known to
//! be in `0..=ALL_PINS`. Rolls never carry links themselves; the game-owned
//! [`RollChain`](super::chain::RollChain) orders them and hands out
//! [`RollId`]s.
//!
//! ```
//! use rust_bowling::core::{Roll, ALL_PINS};
//!
//! let strike = Roll::new(ALL_PINS).unwrap();
//! assert!(strike.is_strike());
//!
//! assert!(Roll::new(11).is_err());
//! assert!(Roll::try_from(-1i64).is_err());
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{BowlingError, Result};

/// Number of pins at the start of each frame.
pub const ALL_PINS: u8 = 10;

/// Number of frames in a bowling game.
pub const NUMBER_OF_FRAMES: usize = 10;

/// Maximum number of rolls possible in any game.
pub const MAX_ROLLS: usize = 21;

/// Minimum number of rolls possible for a complete game.
pub const MIN_ROLLS: usize = 11;

/// Score of twelve consecutive strikes.
pub const PERFECT_SCORE: u32 = 300;

/// The legal next rolls, in ascending pin order.
///
/// At most `ALL_PINS + 1` entries, so it never spills to the heap.
pub type PossibleRolls = SmallVec<[Roll; 11]>;

/// The pins knocked down by one throw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Roll {
    pins: u8,
}

impl Roll {
    /// Create a roll, failing with `InvalidRoll` if `pins > ALL_PINS`.
    pub fn new(pins: u8) -> Result<Self> {
        if pins > ALL_PINS {
            return Err(BowlingError::InvalidRoll {
                pins: i64::from(pins),
                max: ALL_PINS,
            });
        }
        Ok(Self { pins })
    }

    /// The number of pins knocked down by this roll.
    #[must_use]
    pub const fn pins(self) -> u8 {
        self.pins
    }

    /// Whether this roll knocked down a full rack.
    #[must_use]
    pub const fn is_strike(self) -> bool {
        self.pins == ALL_PINS
    }

    /// Compare pin counts only.
    ///
    /// Rolls are plain values, so this is the same as `==`; it exists for
    /// membership tests against [`PossibleRolls`].
    #[must_use]
    pub const fn same_pins(self, other: Roll) -> bool {
        self.pins == other.pins
    }

    /// Every roll from a gutter ball up to `max` pins, ascending.
    ///
    /// `max` is clamped to `ALL_PINS`.
    #[must_use]
    pub fn range(max: u8) -> PossibleRolls {
        (0..=max.min(ALL_PINS)).map(|pins| Roll { pins }).collect()
    }
}

impl TryFrom<u8> for Roll {
    type Error = BowlingError;

    fn try_from(pins: u8) -> Result<Self> {
        Roll::new(pins)
    }
}

impl TryFrom<i64> for Roll {
    type Error = BowlingError;

    fn try_from(pins: i64) -> Result<Self> {
        u8::try_from(pins)
            .ok()
            .filter(|&p| p <= ALL_PINS)
            .map(|pins| Roll { pins })
            .ok_or(BowlingError::InvalidRoll {
                pins,
                max: ALL_PINS,
            })
    }
}

impl From<Roll> for u8 {
    fn from(roll: Roll) -> u8 {
        roll.pins
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_full_range() {
        for pins in 0..=ALL_PINS {
            let roll = Roll::new(pins).unwrap();
            assert_eq!(roll.pins(), pins);
        }
    }

    #[test]
    fn test_new_rejects_too_many_pins() {
        assert_eq!(
            Roll::new(11),
            Err(BowlingError::InvalidRoll { pins: 11, max: 10 })
        );
        assert!(Roll::new(u8::MAX).is_err());
    }

    #[test]
    fn test_try_from_i64() {
        assert_eq!(Roll::try_from(7i64).unwrap().pins(), 7);
        assert_eq!(
            Roll::try_from(-1i64),
            Err(BowlingError::InvalidRoll { pins: -1, max: 10 })
        );
        assert!(Roll::try_from(300i64).is_err());
    }

    #[test]
    fn test_is_strike() {
        assert!(Roll::new(10).unwrap().is_strike());
        assert!(!Roll::new(9).unwrap().is_strike());
        assert!(!Roll::new(0).unwrap().is_strike());
    }

    #[test]
    fn test_same_pins() {
        let a = Roll::new(4).unwrap();
        let b = Roll::new(4).unwrap();
        let c = Roll::new(5).unwrap();
        assert!(a.same_pins(b));
        assert!(!a.same_pins(c));
    }

    #[test]
    fn test_range() {
        for max in 0..=ALL_PINS {
            let rolls = Roll::range(max);
            assert_eq!(rolls.len(), usize::from(max) + 1);
            assert!(!rolls.spilled());
            for (expected, roll) in rolls.iter().enumerate() {
                assert_eq!(usize::from(roll.pins()), expected);
            }
        }

        // Clamped to a full rack
        assert_eq!(Roll::range(42).len(), 11);
    }

    #[test]
    fn test_serde_validates_range() {
        let roll = Roll::new(8).unwrap();
        let json = serde_json::to_string(&roll).unwrap();
        assert_eq!(json, "8");
        assert_eq!(serde_json::from_str::<Roll>(&json).unwrap(), roll);

        assert!(serde_json::from_str::<Roll>("11").is_err());
    }
}
