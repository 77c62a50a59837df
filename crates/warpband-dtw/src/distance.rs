//! Elastic distance newtype wrapper.

use std::cmp::Ordering;
use std::fmt;

/// A non-negative elastic distance, or `+infinity` when the band admits no
/// alignment between the two sequences.
///
/// An unreachable distance is a valid result meaning "maximally dissimilar";
/// it orders after every finite distance.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ElasticDistance(f64);

impl ElasticDistance {
    /// Distance reported when no admissible alignment exists under the band.
    pub const UNREACHABLE: Self = Self(f64::INFINITY);

    /// Distance between a sequence and itself.
    pub const ZERO: Self = Self(0.0);

    /// Create a new distance from a raw value.
    pub(crate) fn new(value: f64) -> Self {
        debug_assert!(value >= 0.0, "distance must be non-negative, got {value}");
        Self(value)
    }

    /// Return the raw distance value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Return true if the terminal cell was reachable (the value is finite).
    #[must_use]
    pub fn is_reachable(self) -> bool {
        self.0.is_finite()
    }

    /// Return the value if reachable, `None` otherwise.
    #[must_use]
    pub fn finite(self) -> Option<f64> {
        self.is_reachable().then_some(self.0)
    }

    /// Total ordering comparison using [`f64::total_cmp`].
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for ElasticDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_reachable() {
            write!(f, "{:.6}", self.0)
        } else {
            f.write_str("inf")
        }
    }
}
