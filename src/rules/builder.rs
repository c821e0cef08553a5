//! Builder API for creating round rules.

use crate::rules::error::ConfigError;
use crate::rules::{BufferFullPolicy, RoundRules};
use std::time::Duration;

/// Builder for creating round rules
///
/// # Example
///
/// ```rust
/// use breach::rules::{BufferFullPolicy, RulesBuilder};
/// use std::time::Duration;
///
/// let rules = RulesBuilder::new()
///     .daemon_reward(50)
///     .on_buffer_full(BufferFullPolicy::EndRound)
///     .tick_period(Duration::from_millis(500))
///     .build()
///     .unwrap();
///
/// assert_eq!(rules.scoring.daemon_reward, 50);
/// ```
#[derive(Debug, Default)]
pub struct RulesBuilder {
    rules: RoundRules,
}

impl RulesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the score awarded per succeeded daemon
    pub fn daemon_reward(mut self, reward: i64) -> Self {
        self.rules.scoring.daemon_reward = reward;
        self
    }

    /// Set the score awarded per matched cell of a failed daemon
    pub fn partial_credit(mut self, credit: i64) -> Self {
        self.rules.scoring.partial_credit = credit;
        self
    }

    /// Set buffer-full handling
    pub fn on_buffer_full(mut self, policy: BufferFullPolicy) -> Self {
        self.rules.buffer_full = policy;
        self
    }

    /// End the round once every daemon succeeded or failed
    pub fn end_when_resolved(mut self, enabled: bool) -> Self {
        self.rules.end_when_resolved = enabled;
        self
    }

    /// Set the countdown tick period
    pub fn tick_period(mut self, period: Duration) -> Self {
        self.rules.countdown.period_ms = u64::try_from(period.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Start the countdown immediately instead of on the first pick
    pub fn start_clock_immediately(mut self) -> Self {
        self.rules.countdown.starts_on_first_pick = false;
        self
    }

    /// Build the rules
    pub fn build(self) -> Result<RoundRules, ConfigError> {
        self.rules.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_starts_from_defaults() {
        assert_eq!(RulesBuilder::new().build().unwrap(), RoundRules::default());
    }

    #[test]
    fn builder_sets_every_field() {
        let rules = RulesBuilder::new()
            .daemon_reward(7)
            .partial_credit(2)
            .on_buffer_full(BufferFullPolicy::ResetBuffer)
            .end_when_resolved(true)
            .tick_period(Duration::from_millis(20))
            .start_clock_immediately()
            .build()
            .unwrap();

        assert_eq!(rules.scoring.daemon_reward, 7);
        assert_eq!(rules.scoring.partial_credit, 2);
        assert_eq!(rules.buffer_full, BufferFullPolicy::ResetBuffer);
        assert!(rules.end_when_resolved);
        assert_eq!(rules.countdown.period_ms, 20);
        assert!(!rules.countdown.starts_on_first_pick);
    }

    #[test]
    fn builder_validates_period() {
        let result = RulesBuilder::new().tick_period(Duration::ZERO).build();
        assert!(matches!(result, Err(ConfigError::ZeroPeriod)));
    }
}
