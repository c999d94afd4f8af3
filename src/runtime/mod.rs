//! Runtime adapters exposing the events to async code.

pub mod async_wait;

pub use async_wait::{AsyncWaitableEvent, CANCEL_POLL_INTERVAL};
