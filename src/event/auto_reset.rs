//! Auto-resetting waitable event.

use std::fmt;
use std::mem;
use std::time::Duration;

use crate::core::wait_for_condition;
use crate::monitor::Monitor;

use super::WaitableEvent;

/// An event that releases exactly one waiter per signal.
///
/// The event holds a single token. [`signal`](Self::signal) places the token
/// (a no-op if it is already there) and wakes one waiter; a successful wait
/// takes it. Signals never accumulate: any number of signals with no waiter in
/// between release a single wait.
///
/// Which waiter is released is unspecified.
///
/// # Examples
///
/// ```
/// use waitable_event::AutoResetWaitableEvent;
/// use std::sync::Arc;
/// use std::thread;
///
/// let event = Arc::new(AutoResetWaitableEvent::new());
/// let event2 = Arc::clone(&event);
///
/// let handle = thread::spawn(move || event2.wait());
///
/// event.signal();
/// handle.join().unwrap();
/// assert!(!event.is_signaled_for_test());
/// ```
pub struct AutoResetWaitableEvent {
    monitor: Monitor<bool>,
}

impl AutoResetWaitableEvent {
    /// Creates an unsignaled event.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            monitor: Monitor::new(false),
        }
    }

    /// Creates an event that already holds a token.
    #[must_use]
    pub const fn new_signaled() -> Self {
        Self {
            monitor: Monitor::new(true),
        }
    }

    /// Places the token, if absent, and wakes at most one waiter.
    pub fn signal(&self) {
        let mut locker = self.monitor.enter();
        *locker = true;
        locker.signal();
        tracing::trace!("auto-reset event signaled");
    }

    /// Discards the token, if present.
    pub fn reset(&self) {
        *self.monitor.enter() = false;
        tracing::trace!("auto-reset event reset");
    }

    /// Blocks until a token is available and takes it.
    pub fn wait(&self) {
        let mut locker = self.monitor.enter();
        wait_for_condition(&mut locker, None, mem::take);
    }

    /// Blocks until a token is available and takes it, or until `timeout`
    /// elapses.
    ///
    /// Returns `true` on timeout, `false` if the token was taken. A zero
    /// `timeout` polls without blocking.
    pub fn wait_with_timeout(&self, timeout: Duration) -> bool {
        let mut locker = self.monitor.enter();
        wait_for_condition(&mut locker, Some(timeout), mem::take)
    }

    /// Whether a token is currently present. Diagnostic only.
    pub fn is_signaled_for_test(&self) -> bool {
        *self.monitor.enter()
    }
}

impl Default for AutoResetWaitableEvent {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AutoResetWaitableEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoResetWaitableEvent")
            .field("signaled", &self.is_signaled_for_test())
            .finish()
    }
}

impl WaitableEvent for AutoResetWaitableEvent {
    fn signal(&self) {
        Self::signal(self);
    }

    fn reset(&self) {
        Self::reset(self);
    }

    fn wait(&self) {
        Self::wait(self);
    }

    fn wait_with_timeout(&self, timeout: Duration) -> bool {
        Self::wait_with_timeout(self, timeout)
    }

    fn is_signaled_for_test(&self) -> bool {
        Self::is_signaled_for_test(self)
    }

    fn wait_consumes_signal(&self) -> bool {
        true
    }
}
