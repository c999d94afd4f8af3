//! Elapsed-time measurement.

pub mod stopwatch;

pub use stopwatch::Stopwatch;
