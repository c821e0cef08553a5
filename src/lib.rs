//! Breach: a deterministic state engine for timed code-matrix puzzles
//!
//! A player picks codes from a square matrix into a bounded buffer, trying
//! to assemble one or more target sequences ("daemons") before the countdown
//! runs out. Each pick must share a row or column with the previous one.
//!
//! The crate follows a "pure core, imperative shell" split: every round
//! transition is a pure function from one immutable snapshot to the next,
//! and the async shell only decides *when* transitions happen.
//!
//! # Core Concepts
//!
//! - **Status**: Immutable snapshot of a round (matrix, buffer, daemons,
//!   score, time, game-over flag)
//! - **StatusHandler**: The transition function owning every game rule
//! - **History**: Undo stack of snapshots; undo restores, never reverses
//! - **Round**: Executes commands against the history and notifies subscribers
//! - **Shell**: Serializes player commands and countdown ticks in one queue
//!
//! # Example
//!
//! ```rust
//! use breach::core::Coordinate;
//! use breach::puzzle::PuzzleBuilder;
//! use breach::round::{Command, Round};
//! use breach::rules::RoundRules;
//!
//! let puzzle = PuzzleBuilder::new()
//!     .matrix(vec![
//!         vec!["1C", "BD", "55"],
//!         vec!["E9", "1C", "BD"],
//!         vec!["55", "E9", "1C"],
//!     ])
//!     .buffer_capacity(4)
//!     .daemon(["1C", "E9"])
//!     .time_limit(60)
//!     .build()
//!     .unwrap();
//!
//! let mut round = Round::from_puzzle(&puzzle, RoundRules::default()).unwrap();
//! round.subscribe(|status| println!("score: {}", status.score()));
//!
//! round.execute(Command::pick(Coordinate::new(0, 0))).unwrap();
//! round.execute(Command::pick(Coordinate::new(1, 0))).unwrap();
//! assert!(round.status().daemons()[0].is_succeeded());
//!
//! round.execute(Command::force_end()).unwrap();
//! assert!(round.is_over());
//! ```

pub mod core;
pub mod error;
pub mod handler;
pub mod puzzle;
pub mod round;
pub mod rules;
pub mod score;
pub mod shell;

// Re-export commonly used types
pub use crate::core::{Action, Coordinate, State, Status};
pub use error::{GameError, PickRejection, Result};
pub use handler::StatusHandler;
pub use round::{Command, Round};
pub use rules::RoundRules;
