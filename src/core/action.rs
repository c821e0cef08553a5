//! Actions understood by the status handler.

use super::coordinate::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single input to the round's transition function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// The player clicked a matrix cell.
    Pick(Coordinate),
    /// One unit of the countdown elapsed.
    Tick,
    /// The player asked to end the round now.
    ForceEnd,
}

impl Action {
    /// Player actions are recorded as undoable history entries.
    pub const fn is_player_action(self) -> bool {
        matches!(self, Self::Pick(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pick(coordinate) => write!(f, "pick {coordinate}"),
            Self::Tick => f.write_str("tick"),
            Self::ForceEnd => f.write_str("force end"),
        }
    }
}
