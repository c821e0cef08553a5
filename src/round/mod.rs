//! Command execution over the undo history.
//!
//! A [`Round`] is the only owner of a round's [`History`]. Commands run
//! against the current snapshot; accepted picks push a new snapshot, undo
//! pops one, and clock actions replace the current snapshot in place.
//! Rejected commands leave everything untouched.

mod command;

pub use command::Command;

use crate::core::{Action, History, State, Status};
use crate::error::{GameError, Result};
use crate::handler::{Outcome, StatusHandler};
use crate::puzzle::{Puzzle, PuzzleError};
use crate::rules::RoundRules;

/// Callback invoked with the new snapshot after every accepted transition.
pub type Listener = Box<dyn Fn(&Status) + Send + Sync>;

/// One round in progress.
///
/// # Example
///
/// ```rust
/// use breach::core::Coordinate;
/// use breach::puzzle::PuzzleBuilder;
/// use breach::round::{Command, Round};
/// use breach::rules::RoundRules;
///
/// let puzzle = PuzzleBuilder::new()
///     .matrix(vec![vec!["1C", "BD"], vec!["55", "E9"]])
///     .buffer_capacity(3)
///     .daemon(["1C", "BD"])
///     .time_limit(30)
///     .build()
///     .unwrap();
///
/// let mut round = Round::from_puzzle(&puzzle, RoundRules::default()).unwrap();
/// round.execute(Command::pick(Coordinate::new(0, 0))).unwrap();
/// round.execute(Command::pick(Coordinate::new(0, 1))).unwrap();
/// assert_eq!(round.status().succeeded_count(), 1);
///
/// round.execute(Command::undo()).unwrap();
/// assert_eq!(round.status().buffer().len(), 1);
/// ```
pub struct Round {
    handler: StatusHandler,
    history: History,
    clock_running: bool,
    listeners: Vec<Listener>,
}

impl Round {
    pub fn new(opening: Status, rules: RoundRules) -> Self {
        Self {
            handler: StatusHandler::new(rules),
            history: History::new(opening),
            clock_running: !rules.countdown.starts_on_first_pick,
            listeners: Vec::new(),
        }
    }

    /// Validate a puzzle and open a round on it.
    pub fn from_puzzle(
        puzzle: &Puzzle,
        rules: RoundRules,
    ) -> std::result::Result<Self, PuzzleError> {
        Ok(Self::new(puzzle.status()?, rules))
    }

    /// The current snapshot.
    pub fn status(&self) -> &Status {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn rules(&self) -> &RoundRules {
        self.handler.rules()
    }

    /// Whether ticks currently count down.
    pub fn is_clock_running(&self) -> bool {
        self.clock_running
    }

    pub fn is_over(&self) -> bool {
        self.status().is_final()
    }

    /// Register a callback for accepted transitions.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&Status) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Run one command, returning the snapshot that is current afterwards.
    pub fn execute(&mut self, command: Command) -> Result<&Status> {
        match command {
            Command::Apply(action) => self.apply(action),
            Command::Undo => self.undo(),
        }
    }

    /// Step back to the snapshot before the last pick.
    ///
    /// The countdown is not rewound: the restored snapshot keeps the
    /// current time remaining.
    pub fn undo(&mut self) -> Result<&Status> {
        if self.is_over() {
            return Err(GameError::RoundOver);
        }

        let time_remaining = self.status().time_remaining;
        let popped = self.history.undo()?;
        let restored = Status {
            time_remaining,
            ..popped.current().clone()
        };
        self.history = if restored == *popped.current() {
            popped
        } else {
            popped.replace_current(restored)
        };

        log::debug!("undo, {} snapshot(s) left", self.history.len());
        self.notify();
        Ok(self.status())
    }

    fn apply(&mut self, action: Action) -> Result<&Status> {
        if action == Action::Tick && !self.clock_running {
            return Ok(self.status());
        }

        let outcome = self.handler.apply(self.status(), action)?;
        let Outcome::Changed(next) = outcome else {
            return Ok(self.status());
        };

        self.history = if action.is_player_action() {
            self.clock_running = true;
            self.history.record(action, next)
        } else {
            self.history.replace_current(next)
        };

        log::debug!("{} accepted, history depth {}", action, self.history.len());
        self.notify();
        Ok(self.status())
    }

    fn notify(&self) {
        let status = self.status();
        for listener in &self.listeners {
            listener(status);
        }
    }
}

impl std::fmt::Debug for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Round")
            .field("status", self.status())
            .field("history_len", &self.history.len())
            .field("clock_running", &self.clock_running)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
