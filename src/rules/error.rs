//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading round rules
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML source could not be decoded
    #[error("Invalid rules file: {0}")]
    Toml(#[from] toml::de::Error),

    /// A countdown period of zero would tick forever
    #[error("Countdown period must be greater than zero")]
    ZeroPeriod,
}
