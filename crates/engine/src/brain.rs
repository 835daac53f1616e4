//! Move search over the grid's place → score → undo cycle
//!
//! The brain never keeps a private copy of the grid. It tries every
//! orientation at every column directly on the caller's grid, scores the
//! result, and undoes the placement before the next candidate, so the grid
//! comes back exactly as it was handed in.

use tracing::trace;

use crate::core::{Grid, Piece};
use crate::types::PlaceResult;

/// A scored placement: put `piece` with its origin at (`x`, `y`)
#[derive(Debug, Clone, Copy)]
pub struct Move<'a> {
    pub piece: Piece<'a>,
    pub x: i32,
    pub y: i32,
    /// Lower is better
    pub score: f64,
}

/// A placement strategy
pub trait Brain {
    /// Best resting placement for `piece`, or `None` if no orientation fits below `limit_height`
    ///
    /// `grid` must be committed on entry and is left exactly as it was.
    fn best_move<'a>(
        &mut self,
        grid: &mut Grid,
        piece: Piece<'a>,
        limit_height: usize,
    ) -> Option<Move<'a>>;
}

/// Weights of the board evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub max_height: f64,
    pub avg_height: f64,
    pub holes: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            max_height: 8.0,
            avg_height: 40.0,
            holes: 1.25,
        }
    }
}

/// Height-and-holes heuristic brain
#[derive(Debug, Clone, Default)]
pub struct DefaultBrain {
    weights: Weights,
}

impl DefaultBrain {
    pub fn new(weights: Weights) -> Self {
        Self { weights }
    }

    /// Score a grid; lower is better
    pub fn rate_grid(&self, grid: &Grid) -> f64 {
        let sum_height: usize = grid.column_heights().iter().sum();
        let avg_height = sum_height as f64 / grid.width() as f64;

        self.weights.max_height * grid.max_height() as f64
            + self.weights.avg_height * avg_height
            + self.weights.holes * count_holes(grid) as f64
    }
}

/// Empty cells lying below the top of their column
pub fn count_holes(grid: &Grid) -> usize {
    (0..grid.width())
        .map(|x| {
            let height = grid.column_height(x);
            (0..height.saturating_sub(1))
                .filter(|&y| !grid.is_filled(x as i32, y as i32))
                .count()
        })
        .sum()
}

impl Brain for DefaultBrain {
    fn best_move<'a>(
        &mut self,
        grid: &mut Grid,
        piece: Piece<'a>,
        limit_height: usize,
    ) -> Option<Move<'a>> {
        let mut best: Option<Move<'a>> = None;

        for candidate in piece.rotations() {
            let shape = candidate.shape();
            if shape.width() > grid.width() {
                continue;
            }

            for x in 0..=(grid.width() - shape.width()) {
                let y = grid.drop_height(shape, x as i32);
                if y + shape.height() > limit_height {
                    continue;
                }

                let result = grid.place(shape, x as i32, y as i32);
                if result.is_success() {
                    if result == PlaceResult::RowFilled {
                        grid.clear_rows();
                    }
                    let score = self.rate_grid(grid);
                    if best.map_or(true, |b| score < b.score) {
                        best = Some(Move {
                            piece: candidate,
                            x: x as i32,
                            y: y as i32,
                            score,
                        });
                    }
                }
                grid.undo();
            }
        }

        if let Some(m) = &best {
            trace!(
                kind = %m.piece.kind(),
                orientation = m.piece.orientation_index(),
                x = m.x,
                y = m.y,
                score = m.score,
                "best move"
            );
        }
        best
    }
}
