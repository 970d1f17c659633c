//! Reduced numerology number.
//!
//! # Invariants
//! - A `NumerologyNumber` only ever holds 1..=9, 11, 22 or 33.
//! - Deserialization rejects any other integer.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Master numbers are exempt from further reduction.
pub const MASTER_NUMBERS: [u8; 3] = [11, 22, 33];

/// Value produced by the digit-sum reducer.
///
/// Serialized as a plain integer to match the chart wire shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct NumerologyNumber(u8);

impl NumerologyNumber {
    /// Value returned when an empty sum (0) is reduced.
    pub(crate) const ZERO_FALLBACK: Self = Self(9);

    /// Wraps `value` when it is already a single digit or a master number.
    ///
    /// Returns `None` for 0 and for non-master two-digit values; use
    /// [`crate::engine::reduce`] to bring arbitrary sums into range.
    pub fn new(value: u32) -> Option<Self> {
        match value {
            1..=9 | 11 | 22 | 33 => u8::try_from(value).ok().map(Self),
            _ => None,
        }
    }

    /// Raw value.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Raw value widened for arithmetic with other sums.
    pub fn get(self) -> u32 {
        u32::from(self.0)
    }

    pub fn is_master(self) -> bool {
        MASTER_NUMBERS.contains(&self.0)
    }

    /// Single-digit root: 11 -> 2, 22 -> 4, 33 -> 6; other values unchanged.
    pub fn root(self) -> u8 {
        if self.is_master() {
            self.0 / 10 + self.0 % 10
        } else {
            self.0
        }
    }
}

impl TryFrom<u8> for NumerologyNumber {
    type Error = InvalidNumerologyNumber;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(u32::from(value)).ok_or(InvalidNumerologyNumber(value))
    }
}

impl From<NumerologyNumber> for u8 {
    fn from(value: NumerologyNumber) -> Self {
        value.0
    }
}

impl Display for NumerologyNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integer outside {1..9, 11, 22, 33}.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidNumerologyNumber(pub u8);

impl Display for InvalidNumerologyNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "`{}` is not a reduced numerology number; expected 1-9, 11, 22 or 33",
            self.0
        )
    }
}

impl Error for InvalidNumerologyNumber {}
