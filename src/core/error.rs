//! Error types for configuration and the `Result`-flavoured wait helpers.
//!
//! Timeouts on the core event API are reported as a `bool`, not through these
//! types.

use std::time::Duration;

use thiserror::Error;

/// Errors produced while loading or validating an event configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// The configuration parsed but holds an unusable value.
    #[error("invalid config: {0}")]
    Invalid(String),
    /// An environment variable was present but could not be interpreted.
    #[error("environment variable `{name}` invalid: {reason}")]
    Env {
        /// Variable name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Errors produced by the `Result`-returning wait helpers.
#[derive(Debug, Error)]
pub enum WaitError {
    /// The event was not signaled before the budget ran out.
    #[error("wait timed out after {0:?}")]
    TimedOut(Duration),
    /// The blocking task running the wait failed to complete.
    #[error("blocking wait task failed: {0}")]
    Join(String),
}

/// Result alias for wait helpers.
pub type SyncResult<T> = Result<T, WaitError>;
