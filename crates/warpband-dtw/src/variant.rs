//! Per-cell cost and recurrence rules plugged into the banded engine.

/// Position of a cell in the conceptual `n x m` cost matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Row index into the first sequence.
    pub row: usize,
    /// Column index into the second (reference) sequence.
    pub col: usize,
}

/// Accumulated costs of the three predecessors of a cell.
///
/// Predecessors outside the matrix (`col == 0` for `deletion` and
/// `diagonal`, `row == 0` for `insertion` and `diagonal`) are `+infinity`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Predecessors {
    /// `C[row][col - 1]`, the cell to the left in the current row.
    pub deletion: f64,
    /// `C[row - 1][col]`, the cell above in the previous row.
    pub insertion: f64,
    /// `C[row - 1][col - 1]`, the diagonal cell in the previous row.
    pub diagonal: f64,
}

/// A member of the elastic distance family.
///
/// The engine owns banding and the rolling row buffers; a variant only fixes
/// the base cost of a cell, how a cell's cost is combined with its
/// predecessors, and the transform applied to the terminal cell. The origin
/// cell `(0, 0)` never reaches [`accumulate`][DistanceVariant::accumulate]:
/// it holds its base cost.
pub trait DistanceVariant {
    /// Short identifier used in logs and serialized results.
    fn name(&self) -> &'static str;

    /// Base cost of aligning `a` with `b`.
    fn cell_cost(&self, a: f64, b: f64) -> f64;

    /// Combine a cell's base cost with its predecessors.
    fn accumulate(&self, cell: Cell, cost: f64, pred: Predecessors) -> f64;

    /// Map the terminal accumulated cost to the reported distance.
    fn finish(&self, accumulated: f64) -> f64;
}

/// Dynamic Time Warping with squared-difference costs and an ordered
/// predecessor choice.
///
/// The predecessor is picked by evaluating, in order:
///
/// 1. deletion, if on the first row, or if it is strictly below both the
///    diagonal and the insertion;
/// 2. insertion, if in the first column, or if it is strictly below both the
///    diagonal and the deletion;
/// 3. the diagonal otherwise.
///
/// On ties between deletion and insertion this takes the diagonal even when
/// it is larger, so the result can exceed the classical DTW value (compare
/// [`ClassicDtw`]). Published distance values depend on this rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dtw;

impl DistanceVariant for Dtw {
    fn name(&self) -> &'static str {
        "dtw"
    }

    #[inline]
    fn cell_cost(&self, a: f64, b: f64) -> f64 {
        let diff = a - b;
        diff * diff
    }

    #[inline]
    fn accumulate(&self, cell: Cell, cost: f64, pred: Predecessors) -> f64 {
        let Predecessors {
            deletion,
            insertion,
            diagonal,
        } = pred;
        if cell.row == 0 || (cell.col != 0 && diagonal > deletion && deletion < insertion) {
            cost + deletion
        } else if cell.col == 0
            || (cell.row != 0 && diagonal > insertion && insertion < deletion)
        {
            cost + insertion
        } else {
            cost + diagonal
        }
    }

    #[inline]
    fn finish(&self, accumulated: f64) -> f64 {
        accumulated.sqrt()
    }
}

/// Dynamic Time Warping with squared-difference costs and a true three-way
/// minimum over the predecessors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassicDtw;

impl DistanceVariant for ClassicDtw {
    fn name(&self) -> &'static str {
        "classic-dtw"
    }

    #[inline]
    fn cell_cost(&self, a: f64, b: f64) -> f64 {
        let diff = a - b;
        diff * diff
    }

    #[inline]
    fn accumulate(&self, _cell: Cell, cost: f64, pred: Predecessors) -> f64 {
        cost + pred.deletion.min(pred.insertion).min(pred.diagonal)
    }

    #[inline]
    fn finish(&self, accumulated: f64) -> f64 {
        accumulated.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: f64 = f64::INFINITY;

    fn pred(deletion: f64, insertion: f64, diagonal: f64) -> Predecessors {
        Predecessors {
            deletion,
            insertion,
            diagonal,
        }
    }

    #[test]
    fn squared_difference_cost() {
        assert_eq!(Dtw.cell_cost(1.0, 4.0), 9.0);
        assert_eq!(ClassicDtw.cell_cost(-2.0, 1.0), 9.0);
    }

    #[test]
    fn first_row_always_takes_deletion() {
        let cell = Cell { row: 0, col: 3 };
        // insertion and diagonal would be garbage on row 0; deletion wins regardless
        assert_eq!(Dtw.accumulate(cell, 1.0, pred(5.0, 0.0, 0.0)), 6.0);
    }

    #[test]
    fn first_column_takes_insertion() {
        let cell = Cell { row: 2, col: 0 };
        assert_eq!(Dtw.accumulate(cell, 1.0, pred(INF, 4.0, INF)), 5.0);
    }

    #[test]
    fn strict_minimum_deletion() {
        let cell = Cell { row: 1, col: 1 };
        assert_eq!(Dtw.accumulate(cell, 0.0, pred(1.0, 2.0, 3.0)), 1.0);
    }

    #[test]
    fn strict_minimum_insertion() {
        let cell = Cell { row: 1, col: 1 };
        assert_eq!(Dtw.accumulate(cell, 0.0, pred(2.0, 1.0, 3.0)), 1.0);
    }

    #[test]
    fn tie_between_deletion_and_insertion_takes_diagonal() {
        let cell = Cell { row: 2, col: 2 };
        assert_eq!(Dtw.accumulate(cell, 0.0, pred(1.0, 1.0, 7.0)), 7.0);
        assert_eq!(ClassicDtw.accumulate(cell, 0.0, pred(1.0, 1.0, 7.0)), 1.0);
    }

    #[test]
    fn tie_with_diagonal_takes_diagonal() {
        let cell = Cell { row: 2, col: 2 };
        assert_eq!(Dtw.accumulate(cell, 0.0, pred(1.0, 2.0, 1.0)), 1.0);
        assert_eq!(Dtw.accumulate(cell, 0.0, pred(2.0, 1.0, 1.0)), 1.0);
    }

    #[test]
    fn finish_is_square_root() {
        assert_eq!(Dtw.finish(9.0), 3.0);
        assert_eq!(ClassicDtw.finish(INF), INF);
    }

    #[test]
    fn names() {
        assert_eq!(Dtw.name(), "dtw");
        assert_eq!(ClassicDtw.name(), "classic-dtw");
    }
}
