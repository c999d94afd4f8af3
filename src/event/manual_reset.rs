//! Manual-resetting waitable event.

use std::fmt;
use std::time::Duration;

use crate::core::wait_for_condition;
use crate::monitor::Monitor;

use super::WaitableEvent;

#[derive(Debug, Default)]
struct SignalState {
    signaled: bool,
    // Bumped on every signal. A waiter that blocked under one generation is
    // released once it changes, even if a reset cleared `signaled` first.
    signal_id: u64,
}

/// A level-triggered event.
///
/// Once [`signal`](Self::signal)ed, every waiter, current or future, is
/// released without further signals until [`reset`](Self::reset) is called.
///
/// A signal releases every thread blocked at that moment, even if another
/// thread resets the event before the woken waiters get to run.
///
/// # Examples
///
/// ```
/// use waitable_event::ManualResetWaitableEvent;
/// use std::sync::Arc;
/// use std::thread;
///
/// let event = Arc::new(ManualResetWaitableEvent::new());
/// let handles: Vec<_> = (0..3)
///     .map(|_| {
///         let event = Arc::clone(&event);
///         thread::spawn(move || event.wait())
///     })
///     .collect();
///
/// event.signal();
/// for handle in handles {
///     handle.join().unwrap();
/// }
/// assert!(event.is_signaled_for_test());
/// ```
pub struct ManualResetWaitableEvent {
    monitor: Monitor<SignalState>,
}

impl ManualResetWaitableEvent {
    /// Creates an unsignaled event.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_state(false)
    }

    /// Creates an event that starts out signaled.
    #[must_use]
    pub const fn new_signaled() -> Self {
        Self::with_state(true)
    }

    const fn with_state(signaled: bool) -> Self {
        Self {
            monitor: Monitor::new(SignalState {
                signaled,
                signal_id: 0,
            }),
        }
    }

    /// Sets the event and wakes every waiter.
    pub fn signal(&self) {
        let mut locker = self.monitor.enter();
        locker.signaled = true;
        locker.signal_id = locker.signal_id.wrapping_add(1);
        locker.broadcast();
        tracing::trace!(signal_id = locker.signal_id, "manual-reset event signaled");
    }

    /// Clears the event.
    ///
    /// Waiters already released by an earlier signal are unaffected.
    pub fn reset(&self) {
        self.monitor.enter().signaled = false;
        tracing::trace!("manual-reset event reset");
    }

    /// Blocks until the event is signaled. Does not clear it.
    pub fn wait(&self) {
        let mut locker = self.monitor.enter();
        let entry_id = locker.signal_id;
        wait_for_condition(&mut locker, None, |state| {
            state.signaled || state.signal_id != entry_id
        });
    }

    /// Blocks until the event is signaled or `timeout` elapses. Does not clear
    /// it.
    ///
    /// Returns `true` on timeout, `false` if the event was signaled. A zero
    /// `timeout` polls without blocking.
    pub fn wait_with_timeout(&self, timeout: Duration) -> bool {
        let mut locker = self.monitor.enter();
        let entry_id = locker.signal_id;
        wait_for_condition(&mut locker, Some(timeout), |state| {
            state.signaled || state.signal_id != entry_id
        })
    }

    /// Whether the event is currently set. Diagnostic only.
    pub fn is_signaled_for_test(&self) -> bool {
        self.monitor.enter().signaled
    }
}

impl Default for ManualResetWaitableEvent {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ManualResetWaitableEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualResetWaitableEvent")
            .field("signaled", &self.is_signaled_for_test())
            .finish()
    }
}

impl WaitableEvent for ManualResetWaitableEvent {
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
}
