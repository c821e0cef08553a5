//! Puzzle definition errors.

use thiserror::Error;

/// A single defect in a puzzle definition
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PuzzleViolation {
    #[error("Code matrix has no rows")]
    EmptyMatrix,

    #[error("Row {row} has {len} codes, expected {span}")]
    RaggedRow { row: usize, len: usize, span: usize },

    #[error("Cell ({row}, {col}) has an empty code")]
    EmptyCode { row: usize, col: usize },

    #[error("Buffer capacity must be at least 1")]
    ZeroCapacity,

    #[error("Buffer capacity {capacity} exceeds the {cells} cells of the matrix")]
    CapacityExceedsMatrix { capacity: usize, cells: usize },

    #[error("Puzzle defines no daemons")]
    NoDaemons,

    #[error("Daemon {index} has no codes")]
    EmptyDaemon { index: usize },

    #[error("Time limit must be at least 1")]
    ZeroTimeLimit,
}

/// Errors that can occur when loading a puzzle
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// The JSON source could not be decoded
    #[error("Invalid puzzle JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The definition decoded but is not playable
    #[error("Puzzle failed validation with {} violation(s)", .0.len())]
    Invalid(Vec<PuzzleViolation>),
}

/// Errors that can occur when building a puzzle
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Code matrix not specified. Call .matrix(rows) before .build()")]
    MissingMatrix,

    #[error("Buffer capacity not specified. Call .buffer_capacity(n)")]
    MissingBufferCapacity,

    #[error("Time limit not specified. Call .time_limit(seconds)")]
    MissingTimeLimit,
}
