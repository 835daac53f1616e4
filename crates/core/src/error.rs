//! Error types for shape parsing and grid consistency checks

use thiserror::Error;

/// Failure to build a [`Shape`](crate::Shape) from a coordinate literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("shape has no cells")]
    Empty,
    #[error("coordinate list has an odd number of values ({0})")]
    OddCoordinateCount(usize),
    #[error("invalid coordinate {token:?} at position {position}")]
    InvalidCoordinate { token: String, position: usize },
    #[error("shape spans {width}x{height} cells, at most {max} per side allowed")]
    TooLarge { width: u64, height: u64, max: usize },
}

/// A mismatch between the grid's cached aggregates and its raw cells.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("cell storage holds {actual} cells, expected {expected}")]
    CellCount { expected: usize, actual: usize },
    #[error("row fill counts have length {actual}, expected {expected}")]
    RowCountLength { expected: usize, actual: usize },
    #[error("column heights have length {actual}, expected {expected}")]
    ColumnHeightLength { expected: usize, actual: usize },
    #[error("row {row} fill count is {cached}, cells say {actual}")]
    RowFillCount {
        row: usize,
        cached: usize,
        actual: usize,
    },
    #[error("column {column} height is {cached}, cells say {actual}")]
    ColumnHeight {
        column: usize,
        cached: usize,
        actual: usize,
    },
    #[error("max height is {cached}, cells say {actual}")]
    MaxHeight { cached: usize, actual: usize },
}
