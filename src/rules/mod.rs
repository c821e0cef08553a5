//! Round configuration.
//!
//! Rules decide the points that the puzzle itself leaves open: how much a
//! daemon is worth, what happens when the buffer fills up, and how the
//! countdown behaves. They can be built fluently with [`RulesBuilder`] or
//! read from TOML; every key is optional and falls back to its default.
//!
//! # Example
//!
//! ```rust
//! use breach::rules::{BufferFullPolicy, RoundRules};
//!
//! let rules = RoundRules::from_toml(
//!     r#"
//!     buffer_full = "end_round"
//!
//!     [scoring]
//!     daemon_reward = 250
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(rules.buffer_full, BufferFullPolicy::EndRound);
//! assert_eq!(rules.scoring.daemon_reward, 250);
//! assert_eq!(rules.scoring.partial_credit, 0);
//! ```

pub mod builder;
pub mod error;

pub use builder::RulesBuilder;
pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What happens to the round when a pick fills the buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BufferFullPolicy {
    /// Pending daemons fail; the round runs on until the countdown or a
    /// forced end, but no further picks fit.
    #[default]
    AwaitTimeout,
    /// Pending daemons fail and the round ends immediately.
    EndRound,
    /// The buffer is emptied and pending daemons keep going.
    ResetBuffer,
}

/// Score awarded by the handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scoring {
    /// Added once when a daemon succeeds.
    pub daemon_reward: i64,
    /// Added per matched cell of a daemon at the moment it fails.
    pub partial_credit: i64,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            daemon_reward: 100,
            partial_credit: 0,
        }
    }
}

/// Countdown behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountdownRules {
    /// Milliseconds per tick.
    pub period_ms: u64,
    /// Ignore ticks until the player makes the first pick.
    pub starts_on_first_pick: bool,
}

impl CountdownRules {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }
}

impl Default for CountdownRules {
    fn default() -> Self {
        Self {
            period_ms: 1000,
            starts_on_first_pick: true,
        }
    }
}

/// Complete rule set for one round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundRules {
    pub scoring: Scoring,
    pub buffer_full: BufferFullPolicy,
    /// End the round as soon as no daemon is pending.
    pub end_when_resolved: bool,
    pub countdown: CountdownRules,
}

impl RoundRules {
    /// Parse rules from TOML, filling missing keys with defaults.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let rules: RoundRules = toml::from_str(source)?;
        rules.validate()
    }

    /// Check the rule set for values no round can run with.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.countdown.period_ms == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let rules = RoundRules::default();
        assert_eq!(rules.scoring.daemon_reward, 100);
        assert_eq!(rules.scoring.partial_credit, 0);
        assert_eq!(rules.buffer_full, BufferFullPolicy::AwaitTimeout);
        assert!(!rules.end_when_resolved);
        assert_eq!(rules.countdown.period(), Duration::from_secs(1));
        assert!(rules.countdown.starts_on_first_pick);
    }

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(RoundRules::from_toml("").unwrap(), RoundRules::default());
    }

    #[test]
    fn toml_overrides_selected_keys() {
        let rules = RoundRules::from_toml(
            r#"
            end_when_resolved = true
            buffer_full = "reset_buffer"

            [countdown]
            period_ms = 250
            "#,
        )
        .unwrap();

        assert!(rules.end_when_resolved);
        assert_eq!(rules.buffer_full, BufferFullPolicy::ResetBuffer);
        assert_eq!(rules.countdown.period_ms, 250);
        assert!(rules.countdown.starts_on_first_pick);
        assert_eq!(rules.scoring, Scoring::default());
    }

    #[test]
    fn zero_period_is_rejected() {
        let err = RoundRules::from_toml("[countdown]\nperiod_ms = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroPeriod));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let err = RoundRules::from_toml("buffer_full = \"explode\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
