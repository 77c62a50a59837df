//! Rolling pair of DP rows.

/// The two most recent rows of the conceptual cost matrix.
///
/// Both rows always have the reference length `m`. Rows are exchanged with
/// [`RowBuffers::swap`] at the start of every outer iteration; nothing is
/// copied and the full matrix is never materialized.
///
/// A `RowBuffers` can be reused across distance calls on the same thread to
/// avoid reallocating; leftover contents from an earlier call are never read.
#[derive(Debug, Clone, Default)]
pub struct RowBuffers {
    previous: Vec<f64>,
    current: Vec<f64>,
}

impl RowBuffers {
    /// Allocate a pair of rows for a reference of length `m`.
    #[must_use]
    pub fn with_len(m: usize) -> Self {
        Self {
            previous: vec![f64::INFINITY; m],
            current: vec![f64::INFINITY; m],
        }
    }

    /// Return the row length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Return true if the rows have zero length.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Resize both rows to `m`, keeping the allocation where possible.
    pub(crate) fn reset(&mut self, m: usize) {
        self.previous.resize(m, f64::INFINITY);
        self.current.resize(m, f64::INFINITY);
    }

    /// Exchange the rows: the last completed row becomes `previous`.
    #[inline]
    pub(crate) fn swap(&mut self) {
        std::mem::swap(&mut self.previous, &mut self.current);
    }

    /// Borrow `(previous, current)`, the latter mutably.
    #[inline]
    pub(crate) fn rows_mut(&mut self) -> (&[f64], &mut [f64]) {
        (&self.previous, &mut self.current)
    }

    /// Borrow the row completed last.
    #[inline]
    pub(crate) fn current(&self) -> &[f64] {
        &self.current
    }
}
