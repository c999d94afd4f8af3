//! Tests for error types

use std::time::Duration;
use waitable_event::core::{ConfigError, WaitError};

#[test]
fn test_invalid_config_error() {
    let err = ConfigError::Invalid("default_timeout_ms must be greater than 0".to_string());
    assert_eq!(
        format!("{}", err),
        "invalid config: default_timeout_ms must be greater than 0"
    );
}

#[test]
fn test_env_error() {
    let err = ConfigError::Env {
        name: "WAITABLE_EVENT_KIND".to_string(),
        reason: "not set".to_string(),
    };
    assert_eq!(
        format!("{}", err),
        "environment variable `WAITABLE_EVENT_KIND` invalid: not set"
    );
}

#[test]
fn test_parse_error_from_serde() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = ConfigError::from(source);
    assert!(format!("{}", err).starts_with("parse error: "));
}

#[test]
fn test_timed_out_error() {
    let err = WaitError::TimedOut(Duration::from_millis(20));
    assert_eq!(format!("{}", err), "wait timed out after 20ms");
}

#[test]
fn test_join_error() {
    let err = WaitError::Join("task panicked".to_string());
    assert_eq!(format!("{}", err), "blocking wait task failed: task panicked");
}
