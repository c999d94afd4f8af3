//! Waitable events.
//!
//! Two notification disciplines are provided, both built on a
//! [`Monitor`](crate::Monitor):
//!
//! - [`AutoResetWaitableEvent`] - each signal releases exactly one waiter and is
//!   consumed by it. Repeated signals with nobody waiting collapse into one.
//! - [`ManualResetWaitableEvent`] - a signal stays set, releasing every current
//!   and future waiter, until [`reset`](ManualResetWaitableEvent::reset).
//!
//! # Timeout polarity
//!
//! `wait_with_timeout` returns **`true` when the wait timed out** and `false`
//! when the event was acquired. [`WaitableEventExt::wait_timeout`] offers the
//! same operation as a `Result` for call sites that read better that way.
//!
//! # Examples
//!
//! ```
//! use waitable_event::{AutoResetWaitableEvent, ManualResetWaitableEvent};
//! use std::time::Duration;
//!
//! let auto = AutoResetWaitableEvent::new();
//! auto.signal();
//! auto.signal();
//! assert!(!auto.wait_with_timeout(Duration::ZERO));
//! assert!(auto.wait_with_timeout(Duration::ZERO));
//!
//! let manual = ManualResetWaitableEvent::new();
//! manual.signal();
//! assert!(!manual.wait_with_timeout(Duration::ZERO));
//! assert!(!manual.wait_with_timeout(Duration::ZERO));
//! manual.reset();
//! assert!(manual.wait_with_timeout(Duration::ZERO));
//! ```

pub mod auto_reset;
pub mod manual_reset;

use std::time::Duration;

use crate::core::{SyncResult, WaitError};

pub use auto_reset::AutoResetWaitableEvent;
pub use manual_reset::ManualResetWaitableEvent;

/// Operations shared by both event types.
///
/// Object safe, so events can be handled as `Arc<dyn WaitableEvent>`.
pub trait WaitableEvent: Send + Sync {
    /// Signals the event.
    fn signal(&self);

    /// Returns the event to the unsignaled state.
    fn reset(&self);

    /// Blocks until the event is signaled.
    fn wait(&self);

    /// Blocks until the event is signaled or `timeout` elapses.
    ///
    /// Returns `true` on timeout, `false` if the event was acquired.
    fn wait_with_timeout(&self, timeout: Duration) -> bool;

    /// Reads the signaled state.
    ///
    /// The value may change as soon as it is returned; never base
    /// synchronization decisions on it.
    fn is_signaled_for_test(&self) -> bool;

    /// Whether a successful wait consumes the signal.
    ///
    /// Used to hand a signal back when a wait that took it is abandoned.
    fn wait_consumes_signal(&self) -> bool {
        false
    }
}

/// Convenience helpers over [`WaitableEvent`].
pub trait WaitableEventExt: WaitableEvent {
    /// Like [`WaitableEvent::wait_with_timeout`], reported as a `Result`.
    ///
    /// # Errors
    ///
    /// Returns [`WaitError::TimedOut`] if the event was not acquired in time.
    fn wait_timeout(&self, timeout: Duration) -> SyncResult<()> {
        if self.wait_with_timeout(timeout) {
            Err(WaitError::TimedOut(timeout))
        } else {
            Ok(())
        }
    }
}

impl<E: WaitableEvent + ?Sized> WaitableEventExt for E {}
