//! # Waitable Event
//!
//! Thread-coordination primitives that block one or more OS threads until a
//! producer announces that a condition has become true.
//!
//! ## Components
//!
//! - [`Monitor`] / [`MonitorLocker`] - a `parking_lot` mutex paired with a
//!   condition variable, held through a scope-bound guard.
//! - [`AutoResetWaitableEvent`] - each signal releases exactly one waiter and
//!   is consumed; repeated signals with no waiter collapse into one.
//! - [`ManualResetWaitableEvent`] - a signal persists, releasing all current
//!   and future waiters, until reset.
//! - [`core::Deadline`] / [`core::wait_for_condition`] - the timeout loop both
//!   events share: the deadline is computed once from a monotonic clock and the
//!   predicate is re-checked after every wake.
//!
//! ## Timeout polarity
//!
//! `wait_with_timeout` returns `true` when the wait **timed out** and `false`
//! when the event was acquired.
//!
//! ```
//! use waitable_event::AutoResetWaitableEvent;
//! use std::time::Duration;
//!
//! let event = AutoResetWaitableEvent::new();
//! event.signal();
//! assert!(event.is_signaled_for_test());
//! event.wait();
//! assert!(!event.is_signaled_for_test());
//! assert!(event.wait_with_timeout(Duration::from_millis(1)));
//! ```
//!
//! ## Configuration and async
//!
//! Events can be built from JSON or environment configuration
//! ([`config::EventConfig`], [`builders::EventBuilder`]). With the default
//! `tokio-runtime` feature, [`runtime::AsyncWaitableEvent`] lets async code
//! await a shared event without blocking a runtime worker.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Timeout arithmetic and error types.
pub mod core;
/// Configuration models for events.
pub mod config;
/// Builders to construct events from configuration.
pub mod builders;
/// Auto-reset and manual-reset waitable events.
pub mod event;
/// Monitor: a lock paired with a condition variable.
pub mod monitor;
/// Async adapters for the blocking event API.
#[cfg(feature = "tokio-runtime")]
pub mod runtime;
/// Elapsed-time measurement.
pub mod time;
/// Shared utilities.
pub mod util;

pub use event::{AutoResetWaitableEvent, ManualResetWaitableEvent, WaitableEvent, WaitableEventExt};
pub use monitor::{Monitor, MonitorLocker};
pub use time::Stopwatch;
