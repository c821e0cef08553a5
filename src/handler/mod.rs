//! Round transition rules.
//!
//! [`StatusHandler`] is the pure transition function of a round: it maps a
//! snapshot and an [`Action`](crate::core::Action) to the next snapshot, or to
//! an error that leaves the round untouched.

mod outcome;
mod status_handler;

pub use outcome::Outcome;
pub use status_handler::StatusHandler;
