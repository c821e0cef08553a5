//! Periodic countdown feeding ticks into the command queue.

use super::queue::CommandSender;
use crate::core::Action;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

/// Background task sending one tick per period.
///
/// The task stops on its own once the command queue closes, which happens
/// when the round ends. [`Countdown::cancel`] stops it earlier.
#[derive(Debug)]
pub struct Countdown {
    handle: JoinHandle<()>,
}

impl Countdown {
    /// Spawn the countdown on the current tokio runtime.
    ///
    /// The first tick is sent one full period after spawning. Periods
    /// shorter than a millisecond are rounded up to one.
    pub fn spawn(sender: CommandSender, period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if sender.send(Action::Tick).is_err() {
                    log::debug!("command queue closed, countdown stopped");
                    break;
                }
            }
        });
        Self { handle }
    }

    /// Stop sending ticks.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Wait for the task to stop.
    pub async fn stopped(self) {
        if let Err(err) = self.handle.await {
            if !err.is_cancelled() {
                log::warn!("countdown task failed: {}", err);
            }
        }
    }
}
