//! Tests for utility functions

use std::time::Duration;
use waitable_event::util::init_tracing;
use waitable_event::Stopwatch;

#[test]
fn test_init_tracing_twice() {
    init_tracing();
    init_tracing();
}

#[test]
fn test_stopwatch_measures_sleep() {
    let stopwatch = Stopwatch::new();
    std::thread::sleep(Duration::from_millis(5));
    assert!(stopwatch.elapsed() >= Duration::from_millis(5));
}
