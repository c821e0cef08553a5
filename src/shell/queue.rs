//! Ordered command queue feeding a round.

use crate::core::Coordinate;
use crate::round::{Command, Round};
use thiserror::Error;
use tokio::sync::mpsc;

/// The queue stopped accepting commands (round over or queue dropped).
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Command queue is closed")]
pub struct QueueClosed;

/// Cloneable handle for submitting commands.
#[derive(Clone, Debug)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<Command>,
}

impl CommandSender {
    /// Submit a command, or a bare handler action.
    pub fn send(&self, command: impl Into<Command>) -> Result<(), QueueClosed> {
        self.tx.send(command.into()).map_err(|_| QueueClosed)
    }

    pub fn pick(&self, coordinate: Coordinate) -> Result<(), QueueClosed> {
        self.send(Command::pick(coordinate))
    }

    pub fn undo(&self) -> Result<(), QueueClosed> {
        self.send(Command::undo())
    }

    pub fn force_end(&self) -> Result<(), QueueClosed> {
        self.send(Command::force_end())
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Receiving end: applies commands to a round strictly one at a time.
#[derive(Debug)]
pub struct CommandQueue {
    rx: mpsc::UnboundedReceiver<Command>,
}

/// Create a connected sender/queue pair.
pub fn channel() -> (CommandSender, CommandQueue) {
    let (tx, rx) = mpsc::unbounded_channel();
    (CommandSender { tx }, CommandQueue { rx })
}

impl CommandQueue {
    /// Drain commands into `round` until it ends or every sender is gone.
    ///
    /// Rejected commands are logged and dropped; they never stop the queue.
    /// The queue closes on return, so pending senders (the countdown
    /// included) see [`QueueClosed`] from then on.
    pub async fn run(mut self, mut round: Round) -> Round {
        while let Some(command) = self.rx.recv().await {
            if let Err(err) = round.execute(command) {
                log::warn!("rejected {:?}: {}", command, err);
            }
            if round.is_over() {
                break;
            }
        }
        self.rx.close();
        round
    }
}
