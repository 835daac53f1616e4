//! Consistency check for the grid's cached aggregates
//!
//! Recomputes row fill counts, column heights and the max height straight
//! from the cells and compares them with what the grid has cached.

use crate::error::InvariantViolation;
use crate::grid::Grid;

impl Grid {
    /// Compare every cached aggregate against the raw cells
    pub fn verify(&self) -> Result<(), InvariantViolation> {
        let (width, height) = (self.width(), self.height());
        let state = &self.state;

        if state.cells.len() != width * height {
            return Err(InvariantViolation::CellCount {
                expected: width * height,
                actual: state.cells.len(),
            });
        }
        if state.row_fill.len() != height {
            return Err(InvariantViolation::RowCountLength {
                expected: height,
                actual: state.row_fill.len(),
            });
        }
        if state.column_heights.len() != width {
            return Err(InvariantViolation::ColumnHeightLength {
                expected: width,
                actual: state.column_heights.len(),
            });
        }

        let mut heights = vec![0usize; width];
        for (row, cells) in state.cells.chunks_exact(width).enumerate() {
            let mut filled = 0;
            for (column, &cell) in cells.iter().enumerate() {
                if cell {
                    filled += 1;
                    heights[column] = row + 1;
                }
            }
            if filled != state.row_fill[row] {
                return Err(InvariantViolation::RowFillCount {
                    row,
                    cached: state.row_fill[row],
                    actual: filled,
                });
            }
        }

        for (column, (&cached, &actual)) in state.column_heights.iter().zip(&heights).enumerate()
        {
            if cached != actual {
                return Err(InvariantViolation::ColumnHeight {
                    column,
                    cached,
                    actual,
                });
            }
        }

        let max_height = heights.iter().copied().max().unwrap_or(0);
        if max_height != state.max_height {
            return Err(InvariantViolation::MaxHeight {
                cached: state.max_height,
                actual: max_height,
            });
        }

        Ok(())
    }

    /// Panic if any cached aggregate disagrees with the cells
    ///
    /// Runs automatically after every successful mutation in debug builds.
    pub fn check_invariants(&self) {
        if let Err(violation) = self.verify() {
            panic!("grid invariant violated: {violation}");
        }
    }
}
