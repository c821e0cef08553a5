//! Errors raised by round transitions.
//!
//! None of these are fatal: every error means "the command was rejected and
//! the round is exactly as it was before".

use crate::core::Coordinate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a pick was refused by the code matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickRejection {
    /// The coordinate lies outside the matrix span.
    OutOfBounds,
    /// The cell does not share a row or column with the last pick.
    Unavailable,
    /// The cell was already picked this round.
    AlreadySelected,
}

impl std::fmt::Display for PickRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::OutOfBounds => "out of bounds",
            Self::Unavailable => "not available",
            Self::AlreadySelected => "already selected",
        };
        f.write_str(text)
    }
}

/// Errors that can occur while applying a command to a round
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot pick cell {coordinate}: {reason}")]
    InvalidPick {
        coordinate: Coordinate,
        reason: PickRejection,
    },

    #[error("Buffer is full ({capacity} codes)")]
    BufferFull { capacity: usize },

    #[error("Nothing to undo")]
    UndoUnavailable,

    #[error("Round already ended, no new moves are accepted")]
    RoundOver,
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_pick_message_names_cell_and_reason() {
        let err = GameError::InvalidPick {
            coordinate: Coordinate::new(1, 2),
            reason: PickRejection::Unavailable,
        };
        assert_eq!(err.to_string(), "Cannot pick cell (1, 2): not available");
    }

    #[test]
    fn buffer_full_message_includes_capacity() {
        let err = GameError::BufferFull { capacity: 4 };
        assert_eq!(err.to_string(), "Buffer is full (4 codes)");
    }
}
