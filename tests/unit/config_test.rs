//! Tests for configuration parsing and validation

use std::time::Duration;
use waitable_event::config::{EventConfig, EventKind};
use waitable_event::core::ConfigError;

#[test]
fn test_event_config_validation() {
    let valid = EventConfig::new(EventKind::AutoReset).with_default_timeout_ms(100);
    assert!(valid.validate().is_ok());
}

#[test]
fn test_event_config_invalid_timeout() {
    let invalid = EventConfig {
        kind: EventKind::ManualReset,
        initially_signaled: false,
        default_timeout_ms: Some(0),
    };
    assert!(matches!(invalid.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_event_config_from_json() {
    let json = r#"{
        "kind": "manual_reset",
        "initially_signaled": true,
        "default_timeout_ms": 250
    }"#;

    let config = EventConfig::from_json_str(json).unwrap();
    assert_eq!(config.kind, EventKind::ManualReset);
    assert!(config.initially_signaled);
    assert_eq!(config.default_timeout(), Some(Duration::from_millis(250)));
}

#[test]
fn test_event_config_from_json_defaults() {
    let config = EventConfig::from_json_str(r#"{ "kind": "auto_reset" }"#).unwrap();
    assert_eq!(config, EventConfig::new(EventKind::AutoReset));
    assert_eq!(config.default_timeout(), None);
}

#[test]
fn test_event_config_from_json_unknown_kind() {
    let err = EventConfig::from_json_str(r#"{ "kind": "edge_triggered" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_event_config_from_json_rejects_zero_timeout() {
    let err = EventConfig::from_json_str(r#"{ "kind": "auto_reset", "default_timeout_ms": 0 }"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_event_config_roundtrips_through_json() {
    let config = EventConfig::new(EventKind::ManualReset)
        .with_initially_signaled(true)
        .with_default_timeout_ms(10);
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"manual_reset\""));
    assert_eq!(EventConfig::from_json_str(&json).unwrap(), config);
}
