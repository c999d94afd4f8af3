//! Deadline arithmetic for timeout-bounded waits.
//!
//! A relative budget is turned into an absolute [`Deadline`] once, against the
//! monotonic clock, and the remaining time is recomputed after every wake.

use std::time::{Duration, Instant};

use crate::monitor::MonitorLocker;

/// Slack allowed when checking that a timed wait lasted at least as long as
/// requested. Clock granularity and scheduler latency can make a wait end a
/// hair early as measured by a separate clock read.
pub const TIMEOUT_TOLERANCE: Duration = Duration::from_millis(1);

/// An absolute point on the monotonic clock, or "never".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    /// A deadline `timeout` from now.
    ///
    /// A budget too large to represent as an `Instant` yields a deadline that
    /// never passes.
    #[must_use]
    pub fn after(timeout: Duration) -> Self {
        Self {
            at: Instant::now().checked_add(timeout),
        }
    }

    /// A deadline that never passes.
    #[must_use]
    pub const fn never() -> Self {
        Self { at: None }
    }

    /// The absolute instant, or `None` for an unbounded deadline.
    #[must_use]
    pub const fn instant(&self) -> Option<Instant> {
        self.at
    }

    /// Time left before the deadline; `None` if unbounded.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.at.map(|at| at.saturating_duration_since(Instant::now()))
    }

    /// Whether the deadline has been reached.
    #[must_use]
    pub fn has_passed(&self) -> bool {
        self.at.is_some_and(|at| Instant::now() >= at)
    }
}

/// Waits on the locker's monitor until `ready` returns `true`.
///
/// `ready` runs with the lock held: once on entry and again after every wake,
/// spurious or not. It may mutate the guarded state, e.g. to consume a token.
///
/// With `timeout == None` the wait is unbounded. A zero budget checks `ready`
/// once and never blocks. Any other budget is converted to a deadline before
/// the first wait.
///
/// Returns `true` if the budget ran out before `ready` succeeded, `false`
/// otherwise.
pub fn wait_for_condition<T, F>(
    locker: &mut MonitorLocker<'_, T>,
    timeout: Option<Duration>,
    mut ready: F,
) -> bool
where
    F: FnMut(&mut T) -> bool,
{
    if ready(&mut **locker) {
        return false;
    }

    let deadline = match timeout {
        None => Deadline::never(),
        Some(budget) if budget.is_zero() => {
            tracing::trace!("zero wait budget, not blocking");
            return true;
        }
        Some(budget) => Deadline::after(budget),
    };

    loop {
        match deadline.instant() {
            None => locker.wait(),
            Some(at) => {
                if deadline.has_passed() {
                    tracing::trace!(?timeout, "wait timed out");
                    return true;
                }
                // The condvar's own timed-out verdict is ignored; the
                // predicate and the clock decide.
                let _ = locker.wait_until(at);
            }
        }

        if ready(&mut **locker) {
            return false;
        }
    }
}
