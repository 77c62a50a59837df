//! Banded elastic sequence distances.
//!
//! Pure math library with no I/O. Computes Dynamic Time Warping between two
//! numeric sequences of possibly unequal length over a Sakoe-Chiba band sized
//! as a fraction of the reference (second) sequence, using a rolling pair of
//! DP rows. The per-cell rule is pluggable through [`DistanceVariant`].
//!
//! ```
//! use warpband_dtw::{configure, distance};
//!
//! let band = configure(1.0).unwrap();
//! let d = distance(&[0.0, 0.0, 0.0], &[1.0, 1.0, 1.0], &band).unwrap();
//! assert!((d.value() - 3.0_f64.sqrt()).abs() < 1e-12);
//! ```

mod band;
mod buffer;
mod distance;
mod engine;
mod error;
mod matrix;
mod metric;
mod series;
mod variant;

pub use band::BandConfig;
pub use buffer::RowBuffers;
pub use distance::ElasticDistance;
pub use engine::BandedDistanceEngine;
pub use error::DistanceError;
pub use matrix::DistanceMatrix;
pub use metric::PairwiseDistance;
pub use series::{Sequence, SequenceView};
pub use variant::{Cell, ClassicDtw, DistanceVariant, Dtw, Predecessors};

/// Build a band configuration from a fraction in `[0, 1]`.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`DistanceError::InvalidConfiguration`] | `fraction` is NaN, infinite, or outside `[0, 1]` |
pub fn configure(fraction: f64) -> Result<BandConfig, DistanceError> {
    BandConfig::new(fraction)
}

/// Compute the DTW distance from `a` to the reference `b` under `config`.
///
/// Returns [`ElasticDistance::UNREACHABLE`] (not an error) when the band
/// excludes every path to the terminal cell.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`DistanceError::EmptySequence`] | `a` or `b` is empty |
/// | [`DistanceError::NonFiniteValue`] | `a` or `b` contains NaN or infinity |
pub fn distance(a: &[f64], b: &[f64], config: &BandConfig) -> Result<ElasticDistance, DistanceError> {
    let a = SequenceView::new(a)?;
    let b = SequenceView::new(b)?;
    Ok(BandedDistanceEngine::dtw(*config).distance(a, b))
}
