//! Builder that turns an [`EventConfig`] into a shared event.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{EventConfig, EventKind};
use crate::core::ConfigError;
use crate::event::{AutoResetWaitableEvent, ManualResetWaitableEvent, WaitableEvent};

/// Builds events from configuration.
#[derive(Debug, Clone)]
pub struct EventBuilder {
    config: EventConfig,
}

impl EventBuilder {
    /// Create a builder for `config`.
    #[must_use]
    pub const fn new(config: EventConfig) -> Self {
        Self { config }
    }

    /// Access the configuration.
    #[must_use]
    pub const fn config(&self) -> &EventConfig {
        &self.config
    }

    /// Validate the configuration and build the event.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the configuration fails validation.
    pub fn build(&self) -> Result<ConfiguredEvent, ConfigError> {
        self.config.validate()?;

        let signaled = self.config.initially_signaled;
        let event: Arc<dyn WaitableEvent> = match (self.config.kind, signaled) {
            (EventKind::AutoReset, false) => Arc::new(AutoResetWaitableEvent::new()),
            (EventKind::AutoReset, true) => Arc::new(AutoResetWaitableEvent::new_signaled()),
            (EventKind::ManualReset, false) => Arc::new(ManualResetWaitableEvent::new()),
            (EventKind::ManualReset, true) => Arc::new(ManualResetWaitableEvent::new_signaled()),
        };

        tracing::debug!(kind = ?self.config.kind, signaled, "built waitable event");

        Ok(ConfiguredEvent {
            kind: self.config.kind,
            event,
            default_timeout: self.config.default_timeout(),
        })
    }
}

/// An event built from configuration, together with its default timeout.
#[derive(Clone)]
pub struct ConfiguredEvent {
    kind: EventKind,
    event: Arc<dyn WaitableEvent>,
    default_timeout: Option<Duration>,
}

impl ConfiguredEvent {
    /// The notification discipline.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        self.kind
    }

    /// The shared event.
    #[must_use]
    pub const fn event(&self) -> &Arc<dyn WaitableEvent> {
        &self.event
    }

    /// The configured default timeout, if any.
    #[must_use]
    pub const fn default_timeout(&self) -> Option<Duration> {
        self.default_timeout
    }

    /// Waits using the configured default timeout, or forever if there is
    /// none.
    ///
    /// Returns `true` on timeout, `false` if the event was acquired.
    pub fn wait_default(&self) -> bool {
        match self.default_timeout {
            Some(timeout) => self.event.wait_with_timeout(timeout),
            None => {
                self.event.wait();
                false
            }
        }
    }
}

impl fmt::Debug for ConfiguredEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfiguredEvent")
            .field("kind", &self.kind)
            .field("signaled", &self.event.is_signaled_for_test())
            .field("default_timeout", &self.default_timeout)
            .finish()
    }
}
