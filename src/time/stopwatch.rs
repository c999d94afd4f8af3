//! A simple stopwatch over the monotonic clock.

use std::time::{Duration, Instant};

/// Measures time elapsed from a starting point.
///
/// ```
/// use waitable_event::Stopwatch;
/// use std::time::Duration;
///
/// let mut stopwatch = Stopwatch::new();
/// std::thread::sleep(Duration::from_millis(5));
/// assert!(stopwatch.elapsed() >= Duration::from_millis(5));
///
/// stopwatch.start();
/// assert!(stopwatch.elapsed() < Duration::from_secs(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stopwatch {
    start_time: Instant,
}

impl Stopwatch {
    /// Creates a stopwatch started now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Restarts the stopwatch from now.
    pub fn start(&mut self) {
        self.start_time = Instant::now();
    }

    /// Time elapsed since the last [`start`](Self::start) (or construction).
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}
