//! Error types for band configuration and sequence validation.

/// Errors from band configuration and sequence validation.
///
/// Once both inputs are validated the DP recurrence is total, so no variant
/// is ever raised from inside a distance computation. An unreachable terminal
/// cell is a result ([`ElasticDistance::UNREACHABLE`][crate::ElasticDistance::UNREACHABLE]),
/// not an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DistanceError {
    /// Returned when a band fraction is NaN, infinite, or outside `[0, 1]`.
    #[error("band fraction must be a finite value in [0, 1], got {fraction}")]
    InvalidConfiguration {
        /// The rejected fraction.
        fraction: f64,
    },

    /// Returned when an empty slice is provided as a sequence.
    #[error("sequence must be non-empty")]
    EmptySequence,

    /// Returned when a sequence contains NaN, infinity, or negative infinity.
    #[error("sequence contains non-finite value at index {index}")]
    NonFiniteValue {
        /// Position of the first non-finite value found.
        index: usize,
    },
}
