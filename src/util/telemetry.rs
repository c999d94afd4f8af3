//! Telemetry helpers for structured logging.
//!
//! The events log through `tracing` at `trace` level (signal, reset, timeout)
//! and `debug` level (configuration, async timeouts). Nothing is printed
//! unless a subscriber is installed.

/// Install a default env-filtered `fmt` subscriber if none is set.
///
/// The filter is read from `RUST_LOG`, e.g. `RUST_LOG=waitable_event=trace`.
/// Calling this more than once, or after the application installed its own
/// subscriber, is a no-op.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
