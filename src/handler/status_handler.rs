//! Pure transition function over round snapshots.

use super::outcome::Outcome;
use crate::core::{Action, Buffer, Coordinate, Daemon, State, Status};
use crate::error::{GameError, PickRejection, Result};
use crate::rules::{BufferFullPolicy, RoundRules};

/// Turns `(Status, Action)` into the next `Status`.
///
/// The handler owns every game rule: daemon matching, scoring, the
/// buffer-full policy and timeout resolution. It holds no round state of its
/// own, so the same handler can drive any number of snapshots.
///
/// # Example
///
/// ```rust
/// use breach::core::{Buffer, CodeMatrix, Coordinate, Daemon, Status};
/// use breach::handler::StatusHandler;
/// use breach::rules::RoundRules;
///
/// let matrix = CodeMatrix::from_rows(vec![vec!["1C", "BD"], vec!["55", "E9"]]).unwrap();
/// let status = Status::new(matrix, Buffer::new(3), vec![Daemon::new(["1C", "55"])], 60);
/// let handler = StatusHandler::new(RoundRules::default());
///
/// let status = handler.pick(&status, Coordinate::new(0, 0)).unwrap();
/// let status = handler.pick(&status, Coordinate::new(1, 0)).unwrap();
///
/// assert!(status.daemons()[0].is_succeeded());
/// assert_eq!(status.score(), 100);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StatusHandler {
    rules: RoundRules,
}

impl StatusHandler {
    pub fn new(rules: RoundRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RoundRules {
        &self.rules
    }

    /// Apply any action.
    ///
    /// Clock actions on an ended round are idempotent and report
    /// [`Outcome::Unchanged`]; picks on an ended round are rejected.
    pub fn apply(&self, status: &Status, action: Action) -> Result<Outcome> {
        match action {
            Action::Pick(coordinate) => self.pick(status, coordinate).map(Outcome::Changed),
            Action::Tick => Ok(self.tick(status)),
            Action::ForceEnd => Ok(self.force_end(status)),
        }
    }

    /// Pick a cell: select it, append its code, and re-evaluate daemons.
    pub fn pick(&self, status: &Status, coordinate: Coordinate) -> Result<Status> {
        if status.is_final() {
            return Err(GameError::RoundOver);
        }
        if status.buffer.is_full() {
            return Err(GameError::BufferFull {
                capacity: status.buffer.capacity(),
            });
        }

        let code = status
            .matrix
            .get(coordinate)
            .map(|cell| cell.code().to_owned())
            .ok_or(GameError::InvalidPick {
                coordinate,
                reason: PickRejection::OutOfBounds,
            })?;
        let matrix = status.matrix.pick(coordinate)?;
        let buffer = status.buffer.append(code)?;
        let (daemons, reward) = self.track_daemons(&status.daemons, &buffer);

        log::debug!(
            "picked {} ({}), buffer {}/{}",
            coordinate,
            buffer.codes().last().map(String::as_str).unwrap_or_default(),
            buffer.len(),
            buffer.capacity()
        );

        let mut next = Status {
            matrix,
            buffer,
            daemons,
            score: status.score.saturating_add(reward),
            time_remaining: status.time_remaining,
            game_over: false,
        };

        if next.buffer.is_full() {
            next = self.on_buffer_full(next);
        }
        if self.rules.end_when_resolved && !next.game_over && next.all_daemons_resolved() {
            log::debug!("all daemons resolved, ending round early");
            next = self.resolve(next);
        }

        Ok(next)
    }

    /// Advance the countdown by one unit, resolving the round at zero.
    pub fn tick(&self, status: &Status) -> Outcome {
        if status.is_final() {
            return Outcome::Unchanged;
        }

        let next = Status {
            time_remaining: status.time_remaining.saturating_sub(1),
            ..status.clone()
        };
        if next.time_remaining == 0 {
            log::debug!("countdown expired");
            return Outcome::Changed(self.resolve(next));
        }
        Outcome::Changed(next)
    }

    /// Resolve the round now by running the countdown out.
    pub fn force_end(&self, status: &Status) -> Outcome {
        if status.is_final() {
            return Outcome::Unchanged;
        }
        log::debug!("round ended with {}s left", status.time_remaining);
        Outcome::Changed(self.resolve(Status {
            time_remaining: 0,
            ..status.clone()
        }))
    }

    fn track_daemons(&self, daemons: &[Daemon], buffer: &Buffer) -> (Vec<Daemon>, i64) {
        let mut reward: i64 = 0;
        let tracked = daemons
            .iter()
            .map(|daemon| {
                let next = daemon.tracked(buffer);
                if daemon.is_pending() && next.is_succeeded() {
                    log::debug!("daemon {:?} succeeded", next.codes().collect::<Vec<_>>());
                    reward = reward.saturating_add(self.rules.scoring.daemon_reward);
                }
                next
            })
            .collect();
        (tracked, reward)
    }

    fn on_buffer_full(&self, status: Status) -> Status {
        match self.rules.buffer_full {
            BufferFullPolicy::AwaitTimeout => self.fail_unrewarded(status),
            BufferFullPolicy::EndRound => self.resolve(status),
            BufferFullPolicy::ResetBuffer => {
                let buffer = status.buffer.cleared();
                let daemons = status
                    .daemons
                    .iter()
                    .map(|daemon| daemon.tracked(&buffer))
                    .collect();
                log::debug!("buffer full, starting over");
                Status {
                    buffer,
                    daemons,
                    ..status
                }
            }
        }
    }

    /// Fail every pending daemon, paying partial credit for matched cells.
    fn fail_unrewarded(&self, status: Status) -> Status {
        let mut credit: i64 = 0;
        let daemons = status
            .daemons
            .iter()
            .map(|daemon| {
                if daemon.is_pending() {
                    let matched = i64::try_from(daemon.matched_count()).unwrap_or(i64::MAX);
                    credit = credit
                        .saturating_add(self.rules.scoring.partial_credit.saturating_mul(matched));
                }
                daemon.failed()
            })
            .collect();
        Status {
            daemons,
            score: status.score.saturating_add(credit),
            ..status
        }
    }

    fn resolve(&self, status: Status) -> Status {
        let resolved = self.fail_unrewarded(status);
        log::debug!(
            "round over: {} of {} daemons, score {}",
            resolved.succeeded_count(),
            resolved.daemons.len(),
            resolved.score
        );
        Status {
            game_over: true,
            ..resolved
        }
    }
}
