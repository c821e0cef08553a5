//! Builder for constructing puzzles.

use crate::puzzle::error::BuildError;
use crate::puzzle::Puzzle;

/// Builder for constructing puzzles with a fluent API.
///
/// # Example
///
/// ```rust
/// use breach::puzzle::PuzzleBuilder;
///
/// let puzzle = PuzzleBuilder::new()
///     .matrix(vec![vec!["1C", "BD"], vec!["55", "E9"]])
///     .buffer_capacity(4)
///     .daemon(["BD", "E9"])
///     .time_limit(45)
///     .build()
///     .unwrap();
///
/// assert_eq!(puzzle.daemons.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct PuzzleBuilder {
    matrix: Option<Vec<Vec<String>>>,
    buffer_capacity: Option<usize>,
    daemons: Vec<Vec<String>>,
    time_limit: Option<u32>,
}

impl PuzzleBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the code matrix, row by row (required).
    pub fn matrix<R, C, S>(mut self, rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.matrix = Some(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        );
        self
    }

    /// Set the buffer capacity (required).
    pub fn buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = Some(capacity);
        self
    }

    /// Add a daemon sequence.
    pub fn daemon<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.daemons
            .push(codes.into_iter().map(Into::into).collect());
        self
    }

    /// Set the countdown budget in ticks (required).
    pub fn time_limit(mut self, ticks: u32) -> Self {
        self.time_limit = Some(ticks);
        self
    }

    /// Build the puzzle.
    /// Returns an error if required fields are missing; content is checked
    /// later by [`Puzzle::validate`].
    pub fn build(self) -> Result<Puzzle, BuildError> {
        Ok(Puzzle {
            matrix: self.matrix.ok_or(BuildError::MissingMatrix)?,
            buffer_capacity: self
                .buffer_capacity
                .ok_or(BuildError::MissingBufferCapacity)?,
            daemons: self.daemons,
            time_limit: self.time_limit.ok_or(BuildError::MissingTimeLimit)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_validates_required_fields() {
        assert_eq!(
            PuzzleBuilder::new().build().unwrap_err(),
            BuildError::MissingMatrix
        );
        assert_eq!(
            PuzzleBuilder::new()
                .matrix(vec![vec!["1C"]])
                .build()
                .unwrap_err(),
            BuildError::MissingBufferCapacity
        );
        assert_eq!(
            PuzzleBuilder::new()
                .matrix(vec![vec!["1C"]])
                .buffer_capacity(1)
                .build()
                .unwrap_err(),
            BuildError::MissingTimeLimit
        );
    }

    #[test]
    fn builder_collects_daemons_in_order() {
        let puzzle = PuzzleBuilder::new()
            .matrix(vec![vec!["1C"]])
            .buffer_capacity(1)
            .daemon(["1C"])
            .daemon(vec!["BD".to_string(), "55".to_string()])
            .time_limit(10)
            .build()
            .unwrap();

        assert_eq!(puzzle.daemons[0], vec!["1C"]);
        assert_eq!(puzzle.daemons[1], vec!["BD", "55"]);
        assert!(puzzle.validate().is_success());
    }

    #[test]
    fn builder_leaves_content_checks_to_validation() {
        let puzzle = PuzzleBuilder::new()
            .matrix(vec![vec!["1C"]])
            .buffer_capacity(1)
            .time_limit(10)
            .build()
            .unwrap();

        assert!(puzzle.validate().is_failure());
    }
}
