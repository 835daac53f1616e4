//! Grid engine core - shape geometry and the transactional playing field
//!
//! This crate holds the parts of a falling-block puzzle that carry real
//! invariants. It has no knowledge of rendering, timing or input:
//!
//! - **Deterministic**: every call runs to completion synchronously
//! - **Transactional**: one level of undo over `place` + `clear_rows`
//! - **Self-checking**: debug builds verify cached aggregates after every mutation
//!
//! # Module Structure
//!
//! - [`shape`]: normalized cell offsets, bounding box, skirt and rotation
//! - [`pieces`]: the standard library with precomputed rotation families
//! - [`grid`]: cells, row/column aggregates, placement, row clearing and undo
//! - [`invariants`]: recomputation-and-compare check of the grid aggregates
//! - [`error`]: shape parsing and invariant violation errors
//!
//! # Example
//!
//! ```
//! use tetris_grid_core::{Grid, ShapeLibrary};
//! use tetris_grid_core::types::{PieceKind, PlaceResult};
//!
//! let library = ShapeLibrary::standard();
//! let pyramid = library.piece(PieceKind::Pyramid);
//!
//! let mut grid = Grid::new(3, 6);
//! let y = grid.drop_height(&pyramid, 0);
//! assert_eq!(grid.place(&pyramid, 0, y as i32), PlaceResult::Ok);
//! assert_eq!(grid.column_heights(), &[1, 2, 1]);
//!
//! // Try a hypothetical move, then revert it
//! grid.commit();
//! grid.place(&pyramid.fast_rotation().fast_rotation(), 0, 2);
//! assert_eq!(grid.clear_rows(), 2);
//! grid.undo();
//! assert_eq!(grid.max_height(), 2);
//! ```

pub mod error;
pub mod grid;
pub mod invariants;
pub mod pieces;
pub mod shape;

pub use tetris_grid_types as types;

// Re-export commonly used types for convenience
pub use error::{InvariantViolation, ShapeError};
pub use grid::Grid;
pub use pieces::{spawn_shape, Piece, ShapeFamily, ShapeLibrary};
pub use shape::{Shape, MAX_SHAPE_SPAN};
