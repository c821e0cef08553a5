//! Row/column identity of a matrix cell.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Zero-indexed position of a cell in the code matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True when both coordinates fall inside a matrix of the given span.
    pub const fn within(self, span: usize) -> bool {
        self.row < span && self.col < span
    }

    /// True when `other` lies on the same row or the same column.
    pub const fn shares_line_with(self, other: Coordinate) -> bool {
        self.row == other.row || self.col == other.col
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
