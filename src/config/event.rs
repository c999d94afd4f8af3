//! Event configuration structures.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// Environment variable selecting the event kind (`auto_reset` / `manual_reset`).
pub const ENV_KIND: &str = "WAITABLE_EVENT_KIND";
/// Environment variable for the initial signaled state (`true` / `false`).
pub const ENV_INITIALLY_SIGNALED: &str = "WAITABLE_EVENT_INITIALLY_SIGNALED";
/// Environment variable for the default wait timeout in milliseconds.
pub const ENV_DEFAULT_TIMEOUT_MS: &str = "WAITABLE_EVENT_DEFAULT_TIMEOUT_MS";

/// Notification discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Each signal releases one waiter and is consumed.
    AutoReset,
    /// A signal stays set until reset, releasing every waiter.
    ManualReset,
}

impl EventKind {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto_reset" | "auto" => Some(Self::AutoReset),
            "manual_reset" | "manual" => Some(Self::ManualReset),
            _ => None,
        }
    }
}

/// Event configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventConfig {
    /// Notification discipline.
    pub kind: EventKind,
    /// Whether the event starts out signaled.
    #[serde(default)]
    pub initially_signaled: bool,
    /// Budget for waits that do not name their own; `None` waits forever.
    #[serde(default)]
    pub default_timeout_ms: Option<u64>,
}

impl EventConfig {
    /// An unsignaled event of `kind` with no default timeout.
    #[must_use]
    pub const fn new(kind: EventKind) -> Self {
        Self {
            kind,
            initially_signaled: false,
            default_timeout_ms: None,
        }
    }

    /// Sets the initial signaled state.
    #[must_use]
    pub const fn with_initially_signaled(mut self, signaled: bool) -> Self {
        self.initially_signaled = signaled;
        self
    }

    /// Sets the default wait timeout.
    #[must_use]
    pub const fn with_default_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.default_timeout_ms = Some(timeout_ms);
        self
    }

    /// The default wait timeout as a `Duration`.
    #[must_use]
    pub fn default_timeout(&self) -> Option<Duration> {
        self.default_timeout_ms.map(Duration::from_millis)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// A zero default timeout is rejected; polling is requested per call with
    /// `wait_with_timeout(Duration::ZERO)`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_timeout_ms == Some(0) {
            return Err(ConfigError::Invalid(
                "default_timeout_ms must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(input)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build configuration from the process environment.
    ///
    /// A `.env` file in the working directory, if any, is loaded first.
    /// [`ENV_KIND`] is required; the other variables are optional.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Env`] if a variable is missing or malformed and
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let kind_raw = lookup(ENV_KIND).ok_or_else(|| env_error(ENV_KIND, "not set"))?;
        let kind = EventKind::parse(&kind_raw)
            .ok_or_else(|| env_error(ENV_KIND, format!("unknown kind `{kind_raw}`")))?;

        let initially_signaled = match lookup(ENV_INITIALLY_SIGNALED) {
            None => false,
            Some(raw) => raw
                .trim()
                .parse::<bool>()
                .map_err(|e| env_error(ENV_INITIALLY_SIGNALED, e.to_string()))?,
        };

        let default_timeout_ms = match lookup(ENV_DEFAULT_TIMEOUT_MS) {
            None => None,
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| env_error(ENV_DEFAULT_TIMEOUT_MS, e.to_string()))?,
            ),
        };

        let cfg = Self {
            kind,
            initially_signaled,
            default_timeout_ms,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

fn env_error(name: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Env {
        name: name.to_owned(),
        reason: reason.into(),
    }
}
