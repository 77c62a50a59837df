//! Sakoe-Chiba band expressed as a fraction of the reference length.

use std::ops::Range;

use crate::error::DistanceError;

/// Immutable band configuration: the maximum deviation from the diagonal as
/// a fraction of the reference (second) sequence's length.
///
/// The fraction is resolved per call into an integer half-width
/// `w = ceil(m * fraction)`, where `m` is the length of the second sequence.
/// Swapping the arguments of a distance call therefore changes the band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandConfig {
    fraction: f64,
}

impl BandConfig {
    /// Default band fraction used by [`BandConfig::default`].
    pub const DEFAULT_FRACTION: f64 = 0.1;

    /// Create a band configuration from a fraction in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DistanceError::InvalidConfiguration`] | `fraction` is NaN, infinite, or outside `[0, 1]` |
    pub fn new(fraction: f64) -> Result<Self, DistanceError> {
        if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
            return Err(DistanceError::InvalidConfiguration { fraction });
        }
        Ok(Self { fraction })
    }

    /// A band spanning the full reference length.
    #[must_use]
    pub fn full() -> Self {
        Self { fraction: 1.0 }
    }

    /// Return the configured fraction.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Resolve the half-width `w = ceil(reference_len * fraction)`.
    #[must_use]
    pub fn half_width(&self, reference_len: usize) -> usize {
        (reference_len as f64 * self.fraction).ceil() as usize
    }

    /// Return the columns visited for `row`: `[row - w - 1, row + w + 1]`
    /// clipped to `[0, reference_len)`.
    ///
    /// The window is one column wider than the band on each side; those edge
    /// columns are written as unreachable so the next cell to the right and
    /// the next row never read a stale value. The range is empty when the
    /// row lies entirely past the band.
    #[must_use]
    pub fn scan_range(row: usize, half_width: usize, reference_len: usize) -> Range<usize> {
        let start = row.saturating_sub(half_width + 1);
        let end = (row + half_width + 2).min(reference_len);
        start..end.max(start)
    }

    /// Return true if cell `(row, col)` lies inside a band of `half_width`.
    #[must_use]
    pub fn admits(row: usize, col: usize, half_width: usize) -> bool {
        row.abs_diff(col) <= half_width
    }

    /// Return true if the terminal cell `(n - 1, m - 1)` lies inside the band
    /// resolved for a reference of length `m`.
    ///
    /// Every in-band cell is reachable from `(0, 0)`, so this is exactly the
    /// condition for a finite distance.
    #[must_use]
    pub fn reaches_terminal(&self, n: usize, m: usize) -> bool {
        n > 0 && m > 0 && Self::admits(n - 1, m - 1, self.half_width(m))
    }
}

impl Default for BandConfig {
    fn default() -> Self {
        Self {
            fraction: Self::DEFAULT_FRACTION,
        }
    }
}
