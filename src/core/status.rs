//! The immutable round snapshot.

use super::buffer::Buffer;
use super::daemon::Daemon;
use super::matrix::CodeMatrix;
use super::state::State;
use serde::{Deserialize, Serialize};

/// Complete description of a round at one instant.
///
/// A `Status` is never changed in place. Transitions build a new value, so
/// any snapshot handed to a presentation layer stays valid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub(crate) matrix: CodeMatrix,
    pub(crate) buffer: Buffer,
    pub(crate) daemons: Vec<Daemon>,
    pub(crate) score: i64,
    pub(crate) time_remaining: u32,
    pub(crate) game_over: bool,
}

impl Status {
    /// Opening snapshot of a round: nothing picked, no score.
    pub fn new(matrix: CodeMatrix, buffer: Buffer, daemons: Vec<Daemon>, time_limit: u32) -> Self {
        Self {
            matrix,
            buffer,
            daemons,
            score: 0,
            time_remaining: time_limit,
            game_over: false,
        }
    }

    pub fn matrix(&self) -> &CodeMatrix {
        &self.matrix
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn daemons(&self) -> &[Daemon] {
        &self.daemons
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn pending_daemons(&self) -> impl Iterator<Item = &Daemon> + '_ {
        self.daemons.iter().filter(|daemon| daemon.is_pending())
    }

    pub fn succeeded_count(&self) -> usize {
        self.daemons.iter().filter(|d| d.is_succeeded()).count()
    }

    /// True once no daemon is pending.
    pub fn all_daemons_resolved(&self) -> bool {
        self.pending_daemons().next().is_none()
    }
}

impl State for Status {
    fn name(&self) -> &str {
        if self.game_over {
            "Ended"
        } else {
            "Active"
        }
    }

    fn is_final(&self) -> bool {
        self.game_over
    }
}
