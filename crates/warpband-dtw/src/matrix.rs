//! Dense pairwise distance matrix.

use std::ops::Index;

use crate::distance::ElasticDistance;

/// Dense `n x n` distance matrix stored row-major.
///
/// Elastic distances with a band resolved from the reference length are not
/// symmetric, so both triangles are stored. Entry `(i, j)` is the distance
/// from series `i` to reference series `j`.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<ElasticDistance>,
}

impl DistanceMatrix {
    /// Create a matrix from row-major data of exactly `n * n` entries.
    pub(crate) fn from_raw(n: usize, data: Vec<ElasticDistance>) -> Self {
        debug_assert_eq!(data.len(), n * n);
        Self { n, data }
    }

    /// Return the number of series in the matrix.
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Return true if the matrix is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Return the distance from series `i` to series `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n` or `j >= n`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> ElasticDistance {
        self[(i, j)]
    }

    /// Return the distances from series `i` to every series.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n`.
    #[must_use]
    pub fn row(&self, i: usize) -> &[ElasticDistance] {
        assert!(i < self.n, "row index {i} out of bounds for matrix of size {}", self.n);
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Iterate over all entries as `(i, j, distance)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, ElasticDistance)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(move |(flat, &d)| (flat / self.n, flat % self.n, d))
    }

    /// Return the closest other series to `i` and its distance.
    ///
    /// Unreachable entries count as maximally dissimilar; if every other
    /// series is unreachable the first of them is returned with
    /// [`ElasticDistance::UNREACHABLE`]. Returns `None` when `i` is the only
    /// series.
    #[must_use]
    pub fn nearest(&self, i: usize) -> Option<(usize, ElasticDistance)> {
        self.row(i)
            .iter()
            .copied()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
    }

    /// Return the number of ordered pairs whose distance is unreachable.
    #[must_use]
    pub fn unreachable_count(&self) -> usize {
        self.data.iter().filter(|d| !d.is_reachable()).count()
    }

    /// Return the largest `|d(i, j) - d(j, i)|` over all finite pairs.
    ///
    /// Pairs where exactly one direction is unreachable are reported as
    /// `+infinity`.
    #[must_use]
    pub fn max_asymmetry(&self) -> f64 {
        let mut worst = 0.0_f64;
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                let (ij, ji) = (self.get(i, j), self.get(j, i));
                let gap = match (ij.is_reachable(), ji.is_reachable()) {
                    (true, true) => (ij.value() - ji.value()).abs(),
                    (false, false) => 0.0,
                    _ => f64::INFINITY,
                };
                worst = worst.max(gap);
            }
        }
        worst
    }
}

impl Index<(usize, usize)> for DistanceMatrix {
    type Output = ElasticDistance;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(i < self.n, "row index {i} out of bounds for matrix of size {}", self.n);
        assert!(j < self.n, "column index {j} out of bounds for matrix of size {}", self.n);
        &self.data[i * self.n + j]
    }
}
