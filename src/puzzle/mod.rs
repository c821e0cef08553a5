//! Puzzle definitions: the externally supplied content of a round.
//!
//! A [`Puzzle`] carries the matrix codes, buffer capacity, daemon sequences
//! and time budget. Definitions are checked with `Validation`, so a broken
//! puzzle reports every defect at once instead of the first one found.
//!
//! # Example
//!
//! ```rust
//! use breach::puzzle::Puzzle;
//!
//! let puzzle = Puzzle::from_json(
//!     r#"{
//!         "matrix": [["1C", "BD"], ["55", "E9"]],
//!         "buffer_capacity": 3,
//!         "daemons": [["1C", "55"]],
//!         "time_limit": 60
//!     }"#,
//! )
//! .unwrap();
//!
//! let status = puzzle.status().unwrap();
//! assert_eq!(status.matrix().span(), 2);
//! assert_eq!(status.time_remaining(), 60);
//! ```

pub mod builder;
pub mod error;

pub use builder::PuzzleBuilder;
pub use error::{BuildError, PuzzleError, PuzzleViolation};

use crate::core::{Buffer, CodeMatrix, Daemon, Status};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<PuzzleViolation>>;

/// Content of one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// Square grid of codes, row by row
    pub matrix: Vec<Vec<String>>,
    /// Maximum number of codes the buffer holds
    pub buffer_capacity: usize,
    /// Target sequences, in display order
    pub daemons: Vec<Vec<String>>,
    /// Countdown budget in ticks
    pub time_limit: u32,
}

impl Puzzle {
    /// Decode a puzzle from JSON. The result is not validated yet.
    pub fn from_json(source: &str) -> Result<Self, PuzzleError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Check the definition, accumulating ALL violations.
    ///
    /// Every pick consumes a cell for the rest of the round, so a buffer
    /// larger than the matrix could never fill.
    pub fn validate(&self) -> Check {
        let cells = self.matrix.len().saturating_mul(self.matrix.len());
        let mut checks = vec![
            self.check_matrix(),
            check(self.buffer_capacity > 0, PuzzleViolation::ZeroCapacity),
            check(
                cells == 0 || self.buffer_capacity <= cells,
                PuzzleViolation::CapacityExceedsMatrix {
                    capacity: self.buffer_capacity,
                    cells,
                },
            ),
            check(!self.daemons.is_empty(), PuzzleViolation::NoDaemons),
            check(self.time_limit > 0, PuzzleViolation::ZeroTimeLimit),
        ];

        checks.extend(
            self.daemons
                .iter()
                .enumerate()
                .map(|(index, daemon)| {
                    check(!daemon.is_empty(), PuzzleViolation::EmptyDaemon { index })
                }),
        );

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate and build the opening snapshot of a round.
    pub fn status(&self) -> Result<Status, PuzzleError> {
        if let Validation::Failure(errors) = self.validate() {
            return Err(PuzzleError::Invalid(errors.iter().cloned().collect()));
        }

        let matrix = CodeMatrix::from_rows(self.matrix.iter().map(|row| row.iter().cloned()))
            .ok_or_else(|| PuzzleError::Invalid(vec![PuzzleViolation::EmptyMatrix]))?;
        let daemons = self
            .daemons
            .iter()
            .map(|codes| Daemon::new(codes.iter().cloned()))
            .collect();

        Ok(Status::new(
            matrix,
            Buffer::new(self.buffer_capacity),
            daemons,
            self.time_limit,
        ))
    }

    fn check_matrix(&self) -> Check {
        let span = self.matrix.len();
        if span == 0 {
            return Validation::fail(PuzzleViolation::EmptyMatrix);
        }

        let mut checks: Vec<Check> = Vec::new();
        for (row, codes) in self.matrix.iter().enumerate() {
            checks.push(check(
                codes.len() == span,
                PuzzleViolation::RaggedRow {
                    row,
                    len: codes.len(),
                    span,
                },
            ));
            for (col, code) in codes.iter().enumerate() {
                checks.push(check(
                    !code.trim().is_empty(),
                    PuzzleViolation::EmptyCode { row, col },
                ));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

fn check(passed: bool, violation: PuzzleViolation) -> Check {
    if passed {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}
