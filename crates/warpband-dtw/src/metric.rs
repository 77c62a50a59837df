//! Pairwise distance interface consumed by clustering and indexing callers.

use rayon::prelude::*;

use crate::distance::ElasticDistance;
use crate::matrix::DistanceMatrix;
use crate::series::{Sequence, SequenceView};

/// A distance between two stored sequences.
///
/// Implementations may be asymmetric: `distance(a, b)` need not equal
/// `distance(b, a)`. An [`ElasticDistance::UNREACHABLE`] result means
/// "maximally dissimilar" and must not be treated as a failure.
pub trait PairwiseDistance: Sync {
    /// Short identifier used in logs and serialized results.
    fn name(&self) -> &'static str;

    /// Distance from `a` to the reference `b`.
    fn distance(&self, a: SequenceView<'_>, b: SequenceView<'_>) -> ElasticDistance;

    /// Compute the dense `n x n` matrix of distances for `series`, in parallel.
    ///
    /// Entry `(i, j)` is `distance(series[i], series[j])`; the diagonal is
    /// zero.
    fn pairwise(&self, series: &[Sequence]) -> DistanceMatrix {
        let n = series.len();
        let distances: Vec<ElasticDistance> = (0..n * n)
            .into_par_iter()
            .map(|flat_idx| {
                let (i, j) = (flat_idx / n, flat_idx % n);
                if i == j {
                    ElasticDistance::ZERO
                } else {
                    self.distance(series[i].as_view(), series[j].as_view())
                }
            })
            .collect();
        DistanceMatrix::from_raw(n, distances)
    }
}
