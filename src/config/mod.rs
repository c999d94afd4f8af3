//! Configuration models for events and their default timeouts.

pub mod event;

pub use event::{EventConfig, EventKind};
