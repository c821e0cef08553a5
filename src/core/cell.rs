//! Single token of the code matrix.

use super::coordinate::Coordinate;
use serde::{Deserialize, Serialize};

/// One cell of the code matrix.
///
/// Cells are only ever changed by [`CodeMatrix::pick`](super::CodeMatrix::pick),
/// which produces a fresh matrix; a snapshot's cells never change afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixCell {
    coordinate: Coordinate,
    code: String,
    selected: bool,
    available: bool,
}

impl MatrixCell {
    /// A fresh, unselected and available cell.
    pub fn new(coordinate: Coordinate, code: impl Into<String>) -> Self {
        Self {
            coordinate,
            code: code.into(),
            selected: false,
            available: true,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Whether a player may pick this cell right now.
    pub fn is_pickable(&self) -> bool {
        self.available && !self.selected
    }

    pub(crate) fn mark_selected(&mut self) {
        self.selected = true;
    }

    pub(crate) fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}
