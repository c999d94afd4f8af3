//! Monitor implementation
//!
//! A [`Monitor`] pairs a mutual-exclusion lock with a condition variable bound
//! to that lock. Both come from the `parking_lot` crate, so there is no
//! poisoning and the footprint stays small.
//!
//! The lock is held through a [`MonitorLocker`], a scope-bound guard that
//! enters the monitor when it is created and exits it when dropped. Waiting and
//! signalling both require a locker, so calling them without holding the lock
//! does not compile.
//!
//! # Examples
//!
//! Basic usage:
//!
//! ```
//! use waitable_event::Monitor;
//!
//! let monitor = Monitor::new(0);
//! {
//!     let mut locker = monitor.enter();
//!     *locker = 10;
//! }
//! assert_eq!(*monitor.enter(), 10);
//! ```
//!
//! Waiting for a condition:
//!
//! ```
//! use waitable_event::Monitor;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let monitor = Arc::new(Monitor::new(false));
//! let producer = Arc::clone(&monitor);
//!
//! thread::spawn(move || {
//!     let mut locker = producer.enter();
//!     *locker = true;
//!     locker.signal();
//! });
//!
//! let mut locker = monitor.enter();
//! while !*locker {
//!     locker.wait();
//! }
//! ```

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::time::Instant;

use parking_lot::{Condvar, Mutex, MutexGuard};

/// A mutual-exclusion lock paired with a condition variable.
///
/// The lock guards a value of type `T`; event types keep their signaled state
/// there. The monitor itself knows nothing about what the value means.
pub struct Monitor<T = ()> {
    lock: Mutex<T>,
    cv: Condvar,
}

impl<T> Monitor<T> {
    /// Creates a new, unlocked monitor guarding `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            lock: Mutex::new(value),
            cv: Condvar::new(),
        }
    }

    /// Blocks until the calling thread holds the lock.
    ///
    /// The lock is released when the returned locker goes out of scope.
    /// Entering a monitor the thread already holds deadlocks.
    #[inline]
    pub fn enter(&self) -> MonitorLocker<'_, T> {
        MonitorLocker::new(self)
    }

    /// Releases the lock held by `locker`.
    ///
    /// Equivalent to dropping the locker.
    ///
    /// # Panics
    ///
    /// Panics if `locker` was obtained from a different monitor.
    pub fn exit(&self, locker: MonitorLocker<'_, T>) {
        self.check_owner(&locker, "exit");
        locker.exit();
    }

    /// Atomically releases the lock and blocks until [`signal`](Self::signal)
    /// or [`broadcast`](Self::broadcast) is called, then reacquires the lock.
    ///
    /// May return without a matching signal; callers re-check their condition
    /// in a loop.
    ///
    /// # Panics
    ///
    /// Panics if `locker` was obtained from a different monitor.
    pub fn wait(&self, locker: &mut MonitorLocker<'_, T>) {
        self.check_owner(locker, "wait");
        locker.wait();
    }

    /// Like [`wait`](Self::wait), but gives up once `deadline` is reached.
    ///
    /// Returns `true` if the wait timed out. The verdict is advisory; callers
    /// re-check their condition either way.
    ///
    /// # Panics
    ///
    /// Panics if `locker` was obtained from a different monitor.
    pub fn wait_until(&self, locker: &mut MonitorLocker<'_, T>, deadline: Instant) -> bool {
        self.check_owner(locker, "wait_until");
        locker.wait_until(deadline)
    }

    /// Wakes one thread blocked in `wait`. Not queued if nobody is waiting.
    ///
    /// # Panics
    ///
    /// Panics if `locker` was obtained from a different monitor.
    pub fn signal(&self, locker: &MonitorLocker<'_, T>) {
        self.check_owner(locker, "signal");
        locker.signal();
    }

    /// Wakes every thread blocked in `wait`. Not queued if nobody is waiting.
    ///
    /// # Panics
    ///
    /// Panics if `locker` was obtained from a different monitor.
    pub fn broadcast(&self, locker: &MonitorLocker<'_, T>) {
        self.check_owner(locker, "broadcast");
        locker.broadcast();
    }

    /// Returns whether some thread currently holds the lock.
    ///
    /// Diagnostic only; the answer may be stale by the time it is read.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }

    /// Returns a mutable reference to the guarded value.
    ///
    /// No locking is needed since the borrow is exclusive.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        self.lock.get_mut()
    }

    /// Consumes the monitor, returning the guarded value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.lock.into_inner()
    }

    fn check_owner(&self, locker: &MonitorLocker<'_, T>, operation: &'static str) {
        if !ptr::eq(self, locker.monitor) {
            foreign_locker(operation);
        }
    }
}

#[cold]
#[track_caller]
fn foreign_locker(operation: &'static str) -> ! {
    tracing::error!(operation, "monitor used with a locker it does not own");
    panic!("Monitor::{operation} called with a locker from a different monitor");
}

impl<T: Default> Default for Monitor<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> fmt::Debug for Monitor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Monitor")
            .field("locked", &self.is_locked())
            .finish_non_exhaustive()
    }
}

/// Holds a [`Monitor`]'s lock for the duration of a scope.
///
/// Created by [`Monitor::enter`] or [`MonitorLocker::new`]. The lock is
/// released on drop, whichever way the scope is left. The guarded value is
/// reachable through `Deref`/`DerefMut`.
#[must_use = "the monitor is exited as soon as the locker is dropped"]
pub struct MonitorLocker<'a, T = ()> {
    monitor: &'a Monitor<T>,
    guard: MutexGuard<'a, T>,
}

impl<'a, T> MonitorLocker<'a, T> {
    /// Enters `monitor`, blocking until the lock is acquired.
    #[inline]
    pub fn new(monitor: &'a Monitor<T>) -> Self {
        Self {
            monitor,
            guard: monitor.lock.lock(),
        }
    }

    /// Exits the monitor now instead of at the end of the scope.
    #[inline]
    pub fn exit(self) {
        drop(self);
    }

    /// Releases the lock, blocks until signalled, and reacquires the lock.
    ///
    /// See [`Monitor::wait`].
    #[inline]
    pub fn wait(&mut self) {
        self.monitor.cv.wait(&mut self.guard);
    }

    /// Releases the lock and blocks until signalled or until `deadline`.
    ///
    /// Returns `true` if the wait timed out. See [`Monitor::wait_until`].
    #[inline]
    pub fn wait_until(&mut self, deadline: Instant) -> bool {
        self.monitor.cv.wait_until(&mut self.guard, deadline).timed_out()
    }

    /// Wakes one thread waiting on the monitor.
    #[inline]
    pub fn signal(&self) {
        self.monitor.cv.notify_one();
    }

    /// Wakes every thread waiting on the monitor.
    #[inline]
    pub fn broadcast(&self) {
        self.monitor.cv.notify_all();
    }

    /// The monitor this locker holds.
    #[inline]
    pub const fn monitor(&self) -> &'a Monitor<T> {
        self.monitor
    }
}

impl<T> Deref for MonitorLocker<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.guard
    }
}

impl<T> DerefMut for MonitorLocker<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.guard
    }
}

impl<T: fmt::Debug> fmt::Debug for MonitorLocker<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonitorLocker")
            .field("value", &*self.guard)
            .finish()
    }
}
