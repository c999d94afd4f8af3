//! Integration tests for `AutoResetWaitableEvent`
//!
//! These tests verify wake counting and timeout accuracy with real threads.

mod common;

use common::{setup, ACTION_TIMEOUT, EPSILON_TIMEOUT, TEST_TIMEOUTS_MS, TINY_TIMEOUT};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use waitable_event::core::TIMEOUT_TOLERANCE;
use waitable_event::{AutoResetWaitableEvent, Stopwatch};

/// Signal once, observe it, consume it
#[test]
fn test_signal_then_wait_consumes() {
    setup();
    let ev = AutoResetWaitableEvent::new();
    ev.signal();
    assert!(ev.is_signaled_for_test());
    ev.wait();
    assert!(!ev.is_signaled_for_test());
}

/// Any number of signals with no waiter release a single wait
#[test]
fn test_repeated_signals_collapse() {
    setup();
    for k in 1..=8 {
        let ev = AutoResetWaitableEvent::new();
        for _ in 0..k {
            ev.signal();
        }
        assert!(!ev.wait_with_timeout(Duration::ZERO), "k = {k}");
        assert!(!ev.is_signaled_for_test());
        assert!(ev.wait_with_timeout(Duration::from_millis(10)), "k = {k}");
    }
}

/// Each signal wakes exactly one of several blocked waiters
#[test]
fn test_multiple_waiters() {
    const NUM_WAITERS: usize = 4;
    setup();

    let ev = Arc::new(AutoResetWaitableEvent::new());

    for _ in 0..3 {
        let wake_count = Arc::new(AtomicUsize::new(0));
        let mut handles = vec![];

        for _ in 0..NUM_WAITERS {
            let ev = Arc::clone(&ev);
            let wake_count = Arc::clone(&wake_count);
            handles.push(thread::spawn(move || {
                if rand::random::<bool>() {
                    ev.wait();
                } else {
                    assert!(!ev.wait_with_timeout(ACTION_TIMEOUT));
                }
                wake_count.fetch_add(1, Ordering::SeqCst);
            }));
        }

        // Give the waiters time to block
        thread::sleep(TINY_TIMEOUT + TINY_TIMEOUT);

        for j in 0..NUM_WAITERS {
            let old_wake_count = wake_count.load(Ordering::SeqCst);
            assert_eq!(old_wake_count, j);

            ev.signal();

            while wake_count.load(Ordering::SeqCst) == old_wake_count {
                thread::sleep(Duration::from_millis(5));
            }
            assert!(!ev.is_signaled_for_test());

            // No second waiter may follow
            thread::sleep(Duration::from_millis(20));
            assert_eq!(wake_count.load(Ordering::SeqCst), old_wake_count + 1);
            assert!(!ev.is_signaled_for_test());
        }

        // Nobody left to consume it, so it stays signaled
        ev.signal();
        thread::sleep(Duration::from_millis(20));
        assert!(ev.is_signaled_for_test());

        for handle in handles {
            handle.join().unwrap();
        }

        ev.reset();
    }
}

/// N signals release N blocked waiters and leave the event unsignaled
#[test]
fn test_signals_balance_waiters() {
    const NUM_WAITERS: usize = 6;
    setup();

    let ev = Arc::new(AutoResetWaitableEvent::new());
    let handles: Vec<_> = (0..NUM_WAITERS)
        .map(|_| {
            let ev = Arc::clone(&ev);
            thread::spawn(move || ev.wait_with_timeout(ACTION_TIMEOUT))
        })
        .collect();

    thread::sleep(TINY_TIMEOUT);

    for _ in 0..NUM_WAITERS {
        ev.signal();
        // Let the token be consumed before the next signal
        while ev.is_signaled_for_test() {
            thread::yield_now();
        }
    }

    for handle in handles {
        assert!(!handle.join().unwrap());
    }
    assert!(!ev.is_signaled_for_test());
}

/// Zero timeout never blocks
#[test]
fn test_zero_timeout_returns_immediately() {
    setup();
    let ev = AutoResetWaitableEvent::new();
    let stopwatch = Stopwatch::new();
    assert!(ev.wait_with_timeout(Duration::ZERO));
    assert!(stopwatch.elapsed() < EPSILON_TIMEOUT);
}

/// Timed-out waits last about as long as requested
#[test]
fn test_timeouts() {
    setup();
    let mut stopwatch = Stopwatch::new();
    let ev = AutoResetWaitableEvent::new();

    for ms in TEST_TIMEOUTS_MS {
        let timeout = Duration::from_millis(ms);

        stopwatch.start();
        assert!(ev.wait_with_timeout(timeout));
        let elapsed = stopwatch.elapsed();

        assert!(
            elapsed + TIMEOUT_TOLERANCE >= timeout,
            "{elapsed:?} < {timeout:?}"
        );
        assert!(
            elapsed < timeout + EPSILON_TIMEOUT,
            "{elapsed:?} >= {timeout:?} + epsilon"
        );
    }
}

/// A waiter with a timeout is released by a signal well before the deadline
#[test]
fn test_timed_wait_released_by_signal() {
    setup();
    let ev = Arc::new(AutoResetWaitableEvent::new());
    let ev2 = Arc::clone(&ev);

    let handle = thread::spawn(move || {
        let stopwatch = Stopwatch::new();
        let timed_out = ev2.wait_with_timeout(ACTION_TIMEOUT);
        (timed_out, stopwatch.elapsed())
    });

    thread::sleep(Duration::from_millis(20));
    ev.signal();

    let (timed_out, elapsed) = handle.join().unwrap();
    assert!(!timed_out);
    assert!(elapsed < ACTION_TIMEOUT);
}
