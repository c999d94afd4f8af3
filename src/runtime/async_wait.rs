//! Async adapters for the blocking event API.
//!
//! The blocking wait runs on tokio's blocking thread pool via
//! `spawn_blocking`, so awaiting an event never stalls a runtime worker.
//!
//! Dropping a wait future (e.g. under `tokio::time::timeout`) abandons the
//! blocking wait: it stops within [`CANCEL_POLL_INTERVAL`], and a token it
//! took from an auto-reset event after the future was dropped is put back
//! with `signal()`, so signals and waits still balance.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::core::{Deadline, SyncResult, WaitError};
use crate::event::WaitableEvent;

/// How often an abandoned blocking wait notices it has been abandoned.
pub const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Awaitable waits on a shared event.
///
/// ```rust,ignore
/// use waitable_event::{ManualResetWaitableEvent, runtime::AsyncWaitableEvent};
/// use std::sync::Arc;
///
/// let event = Arc::new(ManualResetWaitableEvent::new());
/// let waiter = Arc::clone(&event);
/// let task = tokio::spawn(async move { waiter.wait_async().await });
/// event.signal();
/// task.await??;
/// ```
#[async_trait]
pub trait AsyncWaitableEvent {
    /// Waits until the event is signaled.
    ///
    /// Dropping the future abandons the wait without consuming a signal.
    ///
    /// # Errors
    ///
    /// Returns [`WaitError::Join`] if the blocking task panicked or was
    /// cancelled.
    async fn wait_async(&self) -> SyncResult<()>;

    /// Waits until the event is signaled or `timeout` elapses.
    ///
    /// Resolves to `true` on timeout, `false` if the event was acquired.
    /// Dropping the future before it resolves abandons the wait; a token an
    /// auto-reset event hands to the abandoned wait is signaled again.
    ///
    /// # Errors
    ///
    /// Returns [`WaitError::Join`] if the blocking task panicked or was
    /// cancelled.
    async fn wait_with_timeout_async(&self, timeout: Duration) -> SyncResult<bool>;
}

#[async_trait]
impl<E> AsyncWaitableEvent for Arc<E>
where
    E: WaitableEvent + ?Sized + 'static,
{
    async fn wait_async(&self) -> SyncResult<()> {
        wait_with_handoff(self, None).await.map(|_| ())
    }

    async fn wait_with_timeout_async(&self, timeout: Duration) -> SyncResult<bool> {
        let timed_out = wait_with_handoff(self, Some(timeout)).await?;
        if timed_out {
            tracing::debug!(?timeout, "async wait timed out");
        }
        Ok(timed_out)
    }
}

/// Who owns the outcome of a blocking wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Handoff {
    Waiting,
    /// The blocking side acquired the event; the future has not seen it yet.
    Acquired,
    Delivered,
    /// The future was dropped.
    Abandoned,
}

/// Marks the hand-off abandoned when the wait future is dropped.
struct HandoffGuard<E: WaitableEvent + ?Sized> {
    state: Arc<Mutex<Handoff>>,
    event: Arc<E>,
}

impl<E: WaitableEvent + ?Sized> Drop for HandoffGuard<E> {
    fn drop(&mut self) {
        let mut state = self.state.lock();
        match *state {
            Handoff::Acquired => {
                restore_signal(&*self.event);
                *state = Handoff::Abandoned;
            }
            Handoff::Waiting => *state = Handoff::Abandoned,
            Handoff::Delivered | Handoff::Abandoned => {}
        }
    }
}

async fn wait_with_handoff<E>(event: &Arc<E>, timeout: Option<Duration>) -> SyncResult<bool>
where
    E: WaitableEvent + ?Sized + 'static,
{
    let state = Arc::new(Mutex::new(Handoff::Waiting));
    let guard = HandoffGuard {
        state: Arc::clone(&state),
        event: Arc::clone(event),
    };

    let blocking_event = Arc::clone(event);
    let timed_out = tokio::task::spawn_blocking(move || {
        blocking_wait(&*blocking_event, timeout, &state)
    })
    .await
    .map_err(|e| WaitError::Join(e.to_string()))?;

    if !timed_out {
        *guard.state.lock() = Handoff::Delivered;
    }
    Ok(timed_out)
}

/// Waits in slices of at most [`CANCEL_POLL_INTERVAL`] so an abandoned wait
/// stops. Returns `true` on timeout or abandonment.
fn blocking_wait<E>(event: &E, timeout: Option<Duration>, state: &Mutex<Handoff>) -> bool
where
    E: WaitableEvent + ?Sized,
{
    let deadline = timeout.map_or_else(Deadline::never, Deadline::after);

    loop {
        if *state.lock() == Handoff::Abandoned {
            tracing::trace!("blocking wait abandoned");
            return true;
        }

        let slice = deadline
            .remaining()
            .map_or(CANCEL_POLL_INTERVAL, |left| left.min(CANCEL_POLL_INTERVAL));

        if !event.wait_with_timeout(slice) {
            let mut state = state.lock();
            if *state == Handoff::Abandoned {
                restore_signal(event);
                return true;
            }
            *state = Handoff::Acquired;
            return false;
        }

        if deadline.has_passed() {
            return true;
        }
    }
}

fn restore_signal<E: WaitableEvent + ?Sized>(event: &E) {
    if event.wait_consumes_signal() {
        tracing::debug!("returning signal taken by an abandoned wait");
        event.signal();
    }
}
