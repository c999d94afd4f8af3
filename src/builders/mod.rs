//! Builders to construct events from configuration.

pub mod event_builder;

pub use event_builder::{ConfiguredEvent, EventBuilder};
