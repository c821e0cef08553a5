//! Result of applying an action to a snapshot.

use crate::core::Status;

/// Whether a transition produced a new snapshot.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The action was a no-op; the current snapshot stands.
    Unchanged,
    /// The action produced this new snapshot.
    Changed(Status),
}

impl Outcome {
    pub fn has_update(&self) -> bool {
        matches!(self, Self::Changed(_))
    }

    /// The resulting snapshot, falling back to `current` for no-ops.
    pub fn resolve(self, current: &Status) -> Status {
        match self {
            Self::Changed(status) => status,
            Self::Unchanged => current.clone(),
        }
    }
}
