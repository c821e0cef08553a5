//! Undo history of round snapshots.
//!
//! The history is a stack of [`Status`] values seeded with the opening
//! snapshot. It is immutable: every operation returns a new history.

use super::action::Action;
use super::status::Status;
use crate::error::{GameError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One snapshot on the history stack.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The snapshot itself
    pub status: Status,
    /// The action that produced it (`None` for the opening snapshot)
    pub cause: Option<Action>,
    /// When the snapshot was recorded
    pub recorded_at: DateTime<Utc>,
}

/// Stack of snapshots; the top is the current round status.
///
/// The opening snapshot can never be popped, so the history is never empty.
///
/// # Example
///
/// ```rust
/// use breach::core::{Action, Buffer, CodeMatrix, Coordinate, History, Status};
///
/// let matrix = CodeMatrix::from_rows(vec![vec!["1C", "BD"], vec!["55", "E9"]]).unwrap();
/// let opening = Status::new(matrix, Buffer::new(2), Vec::new(), 30);
/// let history = History::new(opening.clone());
///
/// let next = opening.clone();
/// let history = history.record(Action::Pick(Coordinate::new(0, 0)), next);
/// assert_eq!(history.len(), 2);
///
/// let history = history.undo().unwrap();
/// assert_eq!(history.current(), &opening);
/// assert!(history.undo().is_err());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct History {
    root: HistoryEntry,
    stack: Vec<HistoryEntry>,
}

impl History {
    /// Create a history holding only the opening snapshot.
    pub fn new(initial: Status) -> Self {
        Self {
            root: HistoryEntry {
                status: initial,
                cause: None,
                recorded_at: Utc::now(),
            },
            stack: Vec::new(),
        }
    }

    /// The snapshot on top of the stack.
    pub fn current(&self) -> &Status {
        &self.top().status
    }

    /// Number of snapshots, including the opening one. Always at least 1.
    pub fn len(&self) -> usize {
        self.stack.len() + 1
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn can_undo(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Push a snapshot, returning a new history.
    pub fn record(&self, action: Action, status: Status) -> Self {
        let mut stack = self.stack.clone();
        stack.push(HistoryEntry {
            status,
            cause: Some(action),
            recorded_at: Utc::now(),
        });
        Self {
            root: self.root.clone(),
            stack,
        }
    }

    /// Swap the top snapshot for `status` without growing the stack.
    ///
    /// Used for clock-driven transitions, which are not undoable.
    pub fn replace_current(&self, status: Status) -> Self {
        let mut next = self.clone();
        let top = next.stack.last_mut().unwrap_or(&mut next.root);
        top.status = status;
        next
    }

    /// Pop the top snapshot, returning the shorter history.
    pub fn undo(&self) -> Result<Self> {
        if !self.can_undo() {
            return Err(GameError::UndoUnavailable);
        }
        let mut stack = self.stack.clone();
        stack.pop();
        Ok(Self {
            root: self.root.clone(),
            stack,
        })
    }

    /// All entries from the opening snapshot to the current one.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> + '_ {
        std::iter::once(&self.root).chain(self.stack.iter())
    }

    /// Time between the opening snapshot and the current one.
    pub fn duration(&self) -> Duration {
        self.top()
            .recorded_at
            .signed_duration_since(self.root.recorded_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    fn top(&self) -> &HistoryEntry {
        self.stack.last().unwrap_or(&self.root)
    }
}
