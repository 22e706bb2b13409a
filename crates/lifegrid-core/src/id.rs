//! Strongly-typed identifiers.

use std::fmt;

/// Monotonically increasing generation counter.
///
/// Generation 0 is the seeded board. Each completed step advances the
/// counter by exactly one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The seeded, not-yet-stepped generation.
    pub const ZERO: Self = Self(0);

    /// The generation after this one.
    ///
    /// Saturates at `u64::MAX`; no realistic run gets there.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
