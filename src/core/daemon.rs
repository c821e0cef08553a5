//! Daemons: target code sequences and their match progress.

use super::buffer::Buffer;
use serde::{Deserialize, Serialize};

crate::state_enum! {
    /// Lifecycle of a daemon within one round.
    pub enum DaemonState {
        Pending,
        Succeeded,
        Failed,
    }
    terminal: [Succeeded, Failed]
}

/// One position of a daemon's required sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaemonCell {
    code: String,
    matched: bool,
    selected: bool,
}

impl DaemonCell {
    fn new(code: String) -> Self {
        Self {
            code,
            matched: false,
            selected: false,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Satisfied by the buffer's current trailing codes.
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// The position the next accepted code has to match.
    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

/// A required code sequence with per-cell progress.
///
/// Progress is the length of the longest buffer suffix that equals the
/// daemon's prefix of the same length. The daemon succeeds once that length
/// reaches the whole sequence. Terminal daemons are never re-evaluated.
///
/// # Example
///
/// ```rust
/// use breach::core::{Buffer, Daemon, DaemonState};
///
/// let daemon = Daemon::new(["1C", "BD"]);
/// let buffer = Buffer::new(4).append("55").unwrap().append("1C").unwrap();
///
/// let tracked = daemon.tracked(&buffer);
/// assert_eq!(tracked.matched_count(), 1);
/// assert!(tracked.cells()[1].is_selected());
///
/// let buffer = buffer.append("BD").unwrap();
/// assert_eq!(tracked.tracked(&buffer).state(), DaemonState::Succeeded);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Daemon {
    cells: Vec<DaemonCell>,
    state: DaemonState,
}

impl Daemon {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells: Vec<DaemonCell> = codes
            .into_iter()
            .map(|code| DaemonCell::new(code.into()))
            .collect();
        if let Some(first) = cells.first_mut() {
            first.selected = true;
        }
        Self {
            cells,
            state: DaemonState::Pending,
        }
    }

    pub fn state(&self) -> DaemonState {
        self.state
    }

    pub fn cells(&self) -> &[DaemonCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.cells.iter().map(DaemonCell::code)
    }

    pub fn is_pending(&self) -> bool {
        self.state == DaemonState::Pending
    }

    pub fn is_succeeded(&self) -> bool {
        self.state == DaemonState::Succeeded
    }

    pub fn is_failed(&self) -> bool {
        self.state == DaemonState::Failed
    }

    pub fn matched_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.matched).count()
    }

    /// Length of the longest buffer suffix equal to this daemon's prefix.
    pub fn progress(&self, buffer: &[String]) -> usize {
        let longest = buffer.len().min(self.cells.len());
        (1..=longest)
            .rev()
            .find(|&k| {
                buffer[buffer.len() - k..]
                    .iter()
                    .zip(&self.cells[..k])
                    .all(|(code, cell)| *code == cell.code)
            })
            .unwrap_or(0)
    }

    /// Re-evaluate against the buffer. Terminal daemons are returned as-is.
    pub fn tracked(&self, buffer: &Buffer) -> Self {
        if !self.is_pending() {
            return self.clone();
        }

        let progress = self.progress(buffer.codes());
        let succeeded = progress == self.cells.len();
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(index, cell)| DaemonCell {
                code: cell.code.clone(),
                matched: index < progress,
                selected: !succeeded && index == progress,
            })
            .collect();

        log::trace!("daemon progress {}/{}", progress, self.cells.len());

        Self {
            cells,
            state: if succeeded {
                DaemonState::Succeeded
            } else {
                DaemonState::Pending
            },
        }
    }

    /// Mark a pending daemon failed, freezing its cells.
    pub fn failed(&self) -> Self {
        if !self.is_pending() {
            return self.clone();
        }
        let cells = self
            .cells
            .iter()
            .map(|cell| DaemonCell {
                selected: false,
                ..cell.clone()
            })
            .collect();
        Self {
            cells,
            state: DaemonState::Failed,
        }
    }
}
