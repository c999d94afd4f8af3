//! Timeout arithmetic and error types shared by the event primitives.

pub mod deadline;
pub mod error;

pub use deadline::{wait_for_condition, Deadline, TIMEOUT_TOLERANCE};
pub use error::{ConfigError, SyncResult, WaitError};
