//! Commands submitted to a round.

use crate::core::{Action, Coordinate};
use serde::{Deserialize, Serialize};

/// A request to change the round.
///
/// Every input source (cell clicks, the undo and end buttons, the
/// countdown) is expressed as a command, so they can share one queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Run an action through the status handler.
    Apply(Action),
    /// Restore the snapshot before the last pick.
    Undo,
}

impl Command {
    pub const fn pick(coordinate: Coordinate) -> Self {
        Self::Apply(Action::Pick(coordinate))
    }

    pub const fn undo() -> Self {
        Self::Undo
    }

    pub const fn tick() -> Self {
        Self::Apply(Action::Tick)
    }

    pub const fn force_end() -> Self {
        Self::Apply(Action::ForceEnd)
    }
}

impl From<Action> for Command {
    fn from(action: Action) -> Self {
        Self::Apply(action)
    }
}
