//! Best score across rounds played in one process.

use crate::core::{State, Status};
use serde::{Deserialize, Serialize};

/// Tracks finished rounds and the best score among them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    best: Option<i64>,
    rounds: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished round. Returns true if it set a new best.
    ///
    /// Snapshots of rounds still in progress are ignored.
    pub fn record(&mut self, status: &Status) -> bool {
        if !status.is_final() {
            return false;
        }
        self.rounds += 1;
        let score = status.score();
        match self.best {
            Some(best) if best >= score => false,
            _ => {
                log::debug!("new best score {}", score);
                self.best = Some(score);
                true
            }
        }
    }

    pub fn best(&self) -> Option<i64> {
        self.best
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds
    }
}
