//! Grid module - the playing field with cached aggregates and one-level undo
//!
//! The grid is a `width x height` field of filled/empty cells stored as a
//! flat row-major array (`y * width + x`). Row 0 is the floor.
//!
//! Alongside the cells the grid caches, for O(1) queries:
//! - the number of filled cells in each row,
//! - the height of each column (one past its topmost filled cell),
//! - the maximum column height.
//!
//! # Transactions
//!
//! Every mutating call (`place`, `clear_rows`) starting from the committed
//! state first copies the whole state into a shadow buffer. `undo()` restores
//! that copy, `commit()` discards the right to do so. A `place` followed by a
//! `clear_rows` forms one transaction; there is exactly one level of undo.
//!
//! In debug builds every successful mutation re-verifies the cached
//! aggregates against the cells (see [`Grid::check_invariants`]).

use std::fmt;

use tracing::{debug, trace};

use crate::shape::Shape;
use crate::types::PlaceResult;

/// Cells plus every aggregate derived from them
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GridState {
    /// Row-major, `y * width + x`
    pub(crate) cells: Vec<bool>,
    pub(crate) row_fill: Vec<usize>,
    pub(crate) column_heights: Vec<usize>,
    pub(crate) max_height: usize,
}

impl GridState {
    fn empty(width: usize, height: usize) -> Self {
        Self {
            cells: vec![false; width * height],
            row_fill: vec![0; height],
            column_heights: vec![0; width],
            max_height: 0,
        }
    }

    /// Overwrite with `other` without reallocating; both have the grid's dimensions
    fn copy_from(&mut self, other: &GridState) {
        self.cells.copy_from_slice(&other.cells);
        self.row_fill.copy_from_slice(&other.row_fill);
        self.column_heights.copy_from_slice(&other.column_heights);
        self.max_height = other.max_height;
    }
}

/// A transactional playing field
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    pub(crate) state: GridState,
    /// Copy of `state` taken when the current transaction started
    shadow: GridState,
    committed: bool,
    has_snapshot: bool,
}

impl Grid {
    /// Create an empty, committed grid
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or the cell count overflows `usize`.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be positive, got {width}x{height}"
        );
        assert!(
            width.checked_mul(height).is_some(),
            "grid dimensions overflow, got {width}x{height}"
        );
        Self {
            width,
            height,
            state: GridState::empty(width, height),
            shadow: GridState::empty(width, height),
            committed: true,
            has_snapshot: false,
        }
    }

    /// Build a committed grid from text rows, top row first (`#` filled, anything else empty)
    ///
    /// Intended for fixtures. No snapshot is taken, so `undo()` stays a no-op
    /// until the first mutation.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty or the rows differ in length.
    pub fn from_rows(rows: &[&str]) -> Self {
        assert!(!rows.is_empty(), "from_rows needs at least one row");
        let width = rows[0].chars().count();
        assert!(
            rows.iter().all(|row| row.chars().count() == width),
            "all rows must have the same width"
        );

        let height = rows.len();
        let mut grid = Self::new(width, height);
        for (i, row) in rows.iter().enumerate() {
            let y = height - 1 - i;
            for (x, c) in row.chars().enumerate() {
                if c == '#' {
                    grid.state.cells[y * width + x] = true;
                    grid.state.row_fill[y] += 1;
                }
            }
        }
        grid.recompute_heights();
        grid.debug_check();
        grid
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Highest column height; 0 for an empty grid
    pub fn max_height(&self) -> usize {
        self.state.max_height
    }

    /// One past the topmost filled cell of column `x`, or 0 if it is empty
    ///
    /// # Panics
    ///
    /// Panics if `x >= width`.
    pub fn column_height(&self, x: usize) -> usize {
        self.state.column_heights[x]
    }

    /// Number of filled cells in row `y`
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_fill_count(&self, y: usize) -> usize {
        self.state.row_fill[y]
    }

    pub fn column_heights(&self) -> &[usize] {
        &self.state.column_heights
    }

    pub fn row_fill_counts(&self) -> &[usize] {
        &self.state.row_fill
    }

    /// Whether (x, y) is filled; anything outside the grid reads as filled
    pub fn is_filled(&self, x: i32, y: i32) -> bool {
        match self.index(x, y) {
            Some(idx) => self.state.cells[idx],
            None => true,
        }
    }

    /// True when no transaction is pending
    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// False until the first mutating call
    pub fn has_snapshot(&self) -> bool {
        self.has_snapshot
    }

    /// Row a shape would come to rest on if dropped straight down at column `x`
    ///
    /// Uses the column heights and the shape's skirt, O(shape width).
    /// Columns outside the grid count as completely full.
    pub fn drop_height(&self, shape: &Shape, x: i32) -> usize {
        shape
            .skirt()
            .iter()
            .enumerate()
            .map(|(i, &skirt)| {
                let column = x.saturating_add(i as i32);
                let height = if column >= 0 && (column as usize) < self.width {
                    self.state.column_heights[column as usize]
                } else {
                    self.height
                };
                height.saturating_sub(skirt)
            })
            .max()
            .unwrap_or(0)
    }

    /// Add a shape's cells with its origin at (x, y)
    ///
    /// Cells are written in body order. The first cell that lands outside
    /// the grid or on a filled cell stops the placement and the cells already
    /// written stay written: on `OutOfBounds` or `Bad` the caller must call
    /// `undo()` before anything else.
    ///
    /// # Panics
    ///
    /// Panics if a transaction is pending: the previous `place` or
    /// `clear_rows` was neither committed nor undone.
    pub fn place(&mut self, shape: &Shape, x: i32, y: i32) -> PlaceResult {
        assert!(
            self.committed,
            "place called with a pending transaction; call commit() or undo() first"
        );
        self.snapshot();

        let mut result = PlaceResult::Ok;
        for offset in shape.body() {
            let px = x.saturating_add(offset.x);
            let py = y.saturating_add(offset.y);
            let Some(idx) = self.index(px, py) else {
                trace!(x = px, y = py, "placement left the grid");
                return PlaceResult::OutOfBounds;
            };
            if self.state.cells[idx] {
                trace!(x = px, y = py, "placement collided");
                return PlaceResult::Bad;
            }

            let (column, row) = (px as usize, py as usize);
            self.state.cells[idx] = true;
            self.state.row_fill[row] += 1;
            self.raise_column(column, row + 1);
            if self.state.row_fill[row] == self.width {
                result = PlaceResult::RowFilled;
            }
        }

        self.debug_check();
        result
    }

    /// Remove every full row, moving the rows above down; returns the number removed
    ///
    /// Starts a transaction if none is pending, so a lone `clear_rows` can be
    /// undone. Always leaves the grid pending.
    pub fn clear_rows(&mut self) -> usize {
        if self.committed {
            self.snapshot();
        }

        let width = self.width;
        let top = self.state.max_height;
        let mut write_y = 0;
        let mut cleared = 0;

        // Scan bottom to top, sliding each surviving row down onto write_y
        for read_y in 0..top {
            if self.state.row_fill[read_y] == width {
                cleared += 1;
                continue;
            }
            if write_y != read_y {
                let src = read_y * width;
                self.state
                    .cells
                    .copy_within(src..src + width, write_y * width);
                self.state.row_fill[write_y] = self.state.row_fill[read_y];
            }
            write_y += 1;
        }

        for y in write_y..top {
            self.state.cells[y * width..(y + 1) * width].fill(false);
            self.state.row_fill[y] = 0;
        }

        self.recompute_heights();

        if cleared > 0 {
            debug!(
                rows = cleared,
                max_height = self.state.max_height,
                "cleared full rows"
            );
        }

        self.debug_check();
        cleared
    }

    /// Revert the pending transaction
    ///
    /// No-op if nothing was ever snapshotted or nothing is pending, so a
    /// second `undo()` in a row does nothing.
    pub fn undo(&mut self) {
        if !self.has_snapshot || self.committed {
            return;
        }
        self.state.copy_from(&self.shadow);
        self.committed = true;
        trace!("undo restored the transaction snapshot");
        self.debug_check();
    }

    /// Seal the pending transaction; cells are unchanged
    pub fn commit(&mut self) {
        self.committed = true;
    }

    /// Copy the current state into the shadow buffer and enter the pending state
    fn snapshot(&mut self) {
        self.shadow.copy_from(&self.state);
        self.committed = false;
        self.has_snapshot = true;
    }

    fn raise_column(&mut self, column: usize, height: usize) {
        if height > self.state.column_heights[column] {
            self.state.column_heights[column] = height;
        }
        if height > self.state.max_height {
            self.state.max_height = height;
        }
    }

    /// Rebuild column heights and max height from the cells
    fn recompute_heights(&mut self) {
        self.state.column_heights.fill(0);
        self.state.max_height = 0;
        for y in 0..self.height {
            let row = &self.state.cells[y * self.width..(y + 1) * self.width];
            for (x, &filled) in row.iter().enumerate() {
                if filled {
                    self.state.column_heights[x] = y + 1;
                }
            }
        }
        self.state.max_height = self
            .state
            .column_heights
            .iter()
            .copied()
            .max()
            .unwrap_or(0);
    }

    #[inline]
    fn debug_check(&self) {
        if cfg!(debug_assertions) {
            self.check_invariants();
        }
    }
}

/// Top row first, `+` for filled cells, framed by `|` with a `-` footer
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            f.write_str("|")?;
            for x in 0..self.width {
                let filled = self.state.cells[y * self.width + x];
                f.write_str(if filled { "+" } else { " " })?;
            }
            f.write_str("|\n")?;
        }
        for _ in 0..self.width + 2 {
            f.write_str("-")?;
        }
        Ok(())
    }
}
