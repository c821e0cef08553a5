//! Round snapshot model.
//!
//! This module contains the pure value types of a round:
//! - The code matrix with its row/column availability rule
//! - The bounded buffer and the daemons matched against it
//! - The `Status` snapshot and the undo `History` of snapshots
//!
//! Nothing in here mutates in place; every change yields a new value.

mod action;
mod buffer;
mod cell;
mod coordinate;
mod daemon;
mod history;
mod macros;
mod matrix;
mod state;
mod status;

pub use action::Action;
pub use buffer::Buffer;
pub use cell::MatrixCell;
pub use coordinate::Coordinate;
pub use daemon::{Daemon, DaemonCell, DaemonState};
pub use history::{History, HistoryEntry};
pub use matrix::CodeMatrix;
pub use state::State;
pub use status::Status;
