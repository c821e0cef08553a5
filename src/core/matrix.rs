//! The code matrix and its row/column availability rule.

use super::cell::MatrixCell;
use super::coordinate::Coordinate;
use crate::error::{GameError, PickRejection, Result};
use serde::{Deserialize, Serialize};

/// Square grid of code cells.
///
/// Picking is pure: [`CodeMatrix::pick`] returns a new matrix and leaves the
/// receiver untouched, so older snapshots stay valid for undo.
///
/// # Example
///
/// ```rust
/// use breach::core::{CodeMatrix, Coordinate};
///
/// let matrix = CodeMatrix::from_rows(vec![
///     vec!["1C", "BD"],
///     vec!["55", "E9"],
/// ])
/// .unwrap();
///
/// let picked = matrix.pick(Coordinate::new(0, 1)).unwrap();
/// assert!(picked.cell(1, 1).unwrap().is_available());
/// assert!(!picked.cell(1, 0).unwrap().is_available());
/// assert!(matrix.cell(1, 0).unwrap().is_available()); // original unchanged
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeMatrix {
    span: usize,
    cells: Vec<MatrixCell>,
    last_picked: Option<Coordinate>,
}

impl CodeMatrix {
    /// Build a matrix from rows of codes.
    ///
    /// Returns `None` unless the rows form a non-empty square.
    pub fn from_rows<R, C, S>(rows: R) -> Option<Self>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        let span = rows.len();
        if span == 0 || rows.iter().any(|row| row.len() != span) {
            return None;
        }

        let cells = rows
            .into_iter()
            .enumerate()
            .flat_map(|(row, codes)| {
                codes
                    .into_iter()
                    .enumerate()
                    .map(move |(col, code)| MatrixCell::new(Coordinate::new(row, col), code))
            })
            .collect();

        Some(Self {
            span,
            cells,
            last_picked: None,
        })
    }

    pub fn span(&self) -> usize {
        self.span
    }

    pub fn last_picked(&self) -> Option<Coordinate> {
        self.last_picked
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&MatrixCell> {
        self.get(Coordinate::new(row, col))
    }

    pub fn get(&self, coordinate: Coordinate) -> Option<&MatrixCell> {
        if !coordinate.within(self.span) {
            return None;
        }
        self.index_of(coordinate)
            .and_then(|index| self.cells.get(index))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[MatrixCell] {
        &self.cells
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[MatrixCell]> + '_ {
        self.cells.chunks(self.span.max(1))
    }

    /// Coordinates a player may pick next, in row-major order.
    pub fn available_coordinates(&self) -> Vec<Coordinate> {
        self.cells
            .iter()
            .filter(|cell| cell.is_pickable())
            .map(MatrixCell::coordinate)
            .collect()
    }

    /// Whether at least one cell can still be picked.
    pub fn has_moves(&self) -> bool {
        self.cells.iter().any(MatrixCell::is_pickable)
    }

    /// Pick a cell, returning the resulting matrix.
    ///
    /// The picked cell becomes selected and availability is recomputed from
    /// scratch: a cell is available iff it is unselected and shares the
    /// picked cell's row or column.
    pub fn pick(&self, coordinate: Coordinate) -> Result<Self> {
        let reject = |reason| GameError::InvalidPick { coordinate, reason };

        let target = self
            .get(coordinate)
            .ok_or_else(|| reject(PickRejection::OutOfBounds))?;
        if target.is_selected() {
            return Err(reject(PickRejection::AlreadySelected));
        }
        if !target.is_available() {
            return Err(reject(PickRejection::Unavailable));
        }

        let mut cells = self.cells.clone();
        for cell in &mut cells {
            if cell.coordinate() == coordinate {
                cell.mark_selected();
            }
            let open = !cell.is_selected() && cell.coordinate().shares_line_with(coordinate);
            cell.set_available(open);
        }

        Ok(Self {
            span: self.span,
            cells,
            last_picked: Some(coordinate),
        })
    }

    fn index_of(&self, coordinate: Coordinate) -> Option<usize> {
        coordinate
            .row
            .checked_mul(self.span)?
            .checked_add(coordinate.col)
    }
}
