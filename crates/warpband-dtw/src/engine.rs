//! Banded dynamic-programming distance engine.

use rayon::prelude::*;
use tracing::{debug, instrument, trace};

use crate::band::BandConfig;
use crate::buffer::RowBuffers;
use crate::distance::ElasticDistance;
use crate::matrix::DistanceMatrix;
use crate::metric::PairwiseDistance;
use crate::series::{Sequence, SequenceView};
use crate::variant::{Cell, DistanceVariant, Dtw, Predecessors};

/// Banded elastic distance calculator. Immutable, thread-safe and cheap to copy
/// when the variant is.
///
/// Runs in O(n * w) time and O(m) auxiliary space for a first sequence of
/// length `n`, a reference of length `m` and a resolved half-width `w`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandedDistanceEngine<V = Dtw> {
    band: BandConfig,
    variant: V,
}

impl BandedDistanceEngine<Dtw> {
    /// Create a DTW engine with the given band.
    #[must_use]
    pub fn dtw(band: BandConfig) -> Self {
        Self { band, variant: Dtw }
    }
}

impl<V: DistanceVariant> BandedDistanceEngine<V> {
    /// Create an engine from a band and a distance variant.
    #[must_use]
    pub fn new(band: BandConfig, variant: V) -> Self {
        Self { band, variant }
    }

    /// Return the band configuration.
    #[must_use]
    pub fn band(&self) -> BandConfig {
        self.band
    }

    /// Return the distance variant.
    #[must_use]
    pub fn variant(&self) -> &V {
        &self.variant
    }

    /// Compute the distance from `a` to the reference `b`.
    ///
    /// The band half-width is resolved from `b.len()`. Returns
    /// [`ElasticDistance::UNREACHABLE`] when the band excludes the terminal
    /// cell. Allocates one pair of rows for the duration of the call.
    #[must_use]
    #[instrument(level = "trace", skip_all, fields(n = a.len(), m = b.len()))]
    pub fn distance(&self, a: SequenceView<'_>, b: SequenceView<'_>) -> ElasticDistance {
        let mut buffers = RowBuffers::with_len(b.len());
        self.distance_with_buffers(a, b, &mut buffers)
    }

    /// Compute the distance reusing caller-owned row buffers.
    ///
    /// The buffers are resized to `b.len()`; give each thread its own pair.
    #[must_use]
    pub fn distance_with_buffers(
        &self,
        a: SequenceView<'_>,
        b: SequenceView<'_>,
        buffers: &mut RowBuffers,
    ) -> ElasticDistance {
        let a = a.as_slice();
        let b = b.as_slice();
        buffers.reset(b.len());
        if !self.band.reaches_terminal(a.len(), b.len()) {
            trace!(
                n = a.len(),
                m = b.len(),
                half_width = self.band.half_width(b.len()),
                "terminal cell outside band"
            );
            return ElasticDistance::UNREACHABLE;
        }
        let accumulated = self.accumulate_rows(a, b, buffers);
        ElasticDistance::new(self.variant.finish(accumulated))
    }

    /// Run the banded recurrence and return the terminal accumulated cost.
    ///
    /// Visits `[i - w - 1, i + w + 1]` per row. In-band cells only read
    /// `current[j - 1]`, `previous[j]` and `previous[j - 1]`, all of which
    /// were written during this row or the previous one, so the rows never
    /// need clearing. The caller has sized the rows to `m` and checked that
    /// the terminal cell is in the band, which makes `current[m - 1]` a value
    /// written on the last row.
    fn accumulate_rows(&self, a: &[f64], b: &[f64], buffers: &mut RowBuffers) -> f64 {
        let n = a.len();
        let m = b.len();
        let w = self.band.half_width(m);

        for i in 0..n {
            buffers.swap();
            let (previous, current) = buffers.rows_mut();

            for j in BandConfig::scan_range(i, w, m) {
                if !BandConfig::admits(i, j, w) {
                    current[j] = f64::INFINITY;
                    continue;
                }

                let cost = self.variant.cell_cost(a[i], b[j]);
                if i == 0 && j == 0 {
                    current[j] = cost;
                    continue;
                }

                let pred = Predecessors {
                    deletion: if j > 0 { current[j - 1] } else { f64::INFINITY },
                    insertion: if i > 0 { previous[j] } else { f64::INFINITY },
                    diagonal: if i > 0 && j > 0 {
                        previous[j - 1]
                    } else {
                        f64::INFINITY
                    },
                };
                current[j] = self
                    .variant
                    .accumulate(Cell { row: i, col: j }, cost, pred);
            }
        }

        buffers.current()[m - 1]
    }
}

impl<V: DistanceVariant + Sync> PairwiseDistance for BandedDistanceEngine<V> {
    fn name(&self) -> &'static str {
        self.variant.name()
    }

    fn distance(&self, a: SequenceView<'_>, b: SequenceView<'_>) -> ElasticDistance {
        BandedDistanceEngine::distance(self, a, b)
    }

    /// Dense pairwise matrix, one pair of row buffers per rayon worker.
    #[instrument(skip(self, series), fields(n = series.len(), variant = self.variant.name()))]
    fn pairwise(&self, series: &[Sequence]) -> DistanceMatrix {
        let n = series.len();
        let views: Vec<SequenceView<'_>> = series.iter().map(Sequence::as_view).collect();

        let distances: Vec<ElasticDistance> = (0..n * n)
            .into_par_iter()
            .map_init(RowBuffers::default, |buffers, flat_idx| {
                let (i, j) = (flat_idx / n, flat_idx % n);
                // identical lengths always admit the diagonal path of zero cost
                if i == j {
                    return ElasticDistance::ZERO;
                }
                self.distance_with_buffers(views[i], views[j], buffers)
            })
            .collect();

        let matrix = DistanceMatrix::from_raw(n, distances);
        debug!(
            unreachable = matrix.unreachable_count(),
            "pairwise distances computed"
        );
        matrix
    }
}
