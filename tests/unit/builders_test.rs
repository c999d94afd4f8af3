//! Tests for builder modules

use std::sync::Arc;
use std::thread;
use waitable_event::builders::EventBuilder;
use waitable_event::config::{EventConfig, EventKind};

#[test]
fn test_event_builder_defaults() {
    let config = EventConfig::new(EventKind::AutoReset);
    let builder = EventBuilder::new(config.clone());
    assert_eq!(builder.config(), &config);

    let built = builder.build().unwrap();
    assert_eq!(built.kind(), EventKind::AutoReset);
    assert_eq!(built.default_timeout(), None);
    assert!(!built.event().is_signaled_for_test());
}

#[test]
fn test_built_event_is_shareable() {
    let built = EventBuilder::new(EventConfig::new(EventKind::ManualReset))
        .build()
        .unwrap();
    let event = Arc::clone(built.event());

    let handle = thread::spawn(move || built.wait_default());
    event.signal();

    assert!(!handle.join().unwrap());
    assert!(event.is_signaled_for_test());
}

#[test]
fn test_built_auto_reset_default_timeout_expires() {
    let built = EventBuilder::new(EventConfig::new(EventKind::AutoReset).with_default_timeout_ms(5))
        .build()
        .unwrap();
    assert!(built.wait_default());
}
