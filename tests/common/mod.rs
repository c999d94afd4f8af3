//! Timing constants and helpers shared by the event integration tests.

#![allow(dead_code)]

use std::thread;
use std::time::Duration;

/// Slack above a requested timeout that a timed-out wait may take.
pub const EPSILON_TIMEOUT: Duration = Duration::from_millis(20);
/// Long enough for freshly spawned threads to reach their wait.
pub const TINY_TIMEOUT: Duration = Duration::from_millis(100);
/// Budget for waits that are expected to succeed.
pub const ACTION_TIMEOUT: Duration = Duration::from_secs(10);
/// Timeouts exercised by the accuracy tests, in milliseconds.
pub const TEST_TIMEOUTS_MS: [u64; 5] = [0, 10, 20, 40, 80];

/// Installs the env-filtered tracing subscriber once per test binary.
///
/// Run with `RUST_LOG=waitable_event=trace` to see event activity.
pub fn setup() {
    waitable_event::util::init_tracing();
}

/// Sleeps for a random duration below 20ms.
pub fn epsilon_random_sleep() {
    thread::sleep(Duration::from_millis(rand::random_range(0..20)));
}
