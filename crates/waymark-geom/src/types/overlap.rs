// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{BitAnd, BitOr};

/// Relationship between two bounding regions.
///
/// Values are bit flags: `Intersected = 0b01`, `Contained = 0b10`, and
/// `All = 0b11` is a query filter meaning "any overlap", never a single
/// physical outcome. `Disjoint` is the empty set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum OverlappingType {
    /// No shared point.
    #[default]
    Disjoint = 0,
    /// Shared points, but the other region is not fully inside.
    Intersected = 1,
    /// The other region lies entirely inside.
    Contained = 2,
    /// Filter value: either `Intersected` or `Contained`.
    All = 3,
}

impl OverlappingType {
    /// Raw bit pattern.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Rebuilds a value from its bit pattern; bits above `0b11` are dropped.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::Disjoint,
            1 => Self::Intersected,
            2 => Self::Contained,
            _ => Self::All,
        }
    }

    /// Whether this outcome satisfies `filter`.
    ///
    /// `All` accepts every non-disjoint outcome. Any other filter accepts
    /// the outcome when `(self & filter) == filter`, so a single flag
    /// accepts exactly that flag and `Disjoint` accepts everything.
    pub const fn matches(self, filter: Self) -> bool {
        match filter {
            Self::All => self.bits() != 0,
            _ => self.bits() & filter.bits() == filter.bits(),
        }
    }
}

impl BitOr for OverlappingType {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::from_bits(self.bits() | rhs.bits())
    }
}

impl BitAnd for OverlappingType {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self::from_bits(self.bits() & rhs.bits())
    }
}

impl fmt::Display for OverlappingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Disjoint => "disjoint",
            Self::Intersected => "intersected",
            Self::Contained => "contained",
            Self::All => "all",
        })
    }
}
