//! The process-wide registry can be installed exactly once

use std::sync::Arc;
use std::time::Duration;

use notify_bus::registry::{global, init_global, RegistryConfig, RegistryError, Topic};
use tokio_test::assert_ok;

#[tokio::test]
async fn test_init_global_once() {
    assert!(global().is_none());

    let registry = assert_ok!(init_global(RegistryConfig::default()));
    let installed = global().unwrap();
    assert!(Arc::ptr_eq(&registry, &installed));

    let second = init_global(RegistryConfig::default().slow_subscriber_threshold(Duration::ZERO));
    assert_eq!(second.err(), Some(RegistryError::AlreadyInitialized));
    assert_eq!(
        global().unwrap().config().slow_subscriber_threshold,
        Duration::from_millis(100)
    );

    let (_handle, mut rx) = registry.subscribe_channel(Topic::ConfigRefresh).await;
    assert_ok!(global().unwrap().publish(Topic::ConfigRefresh, "reload").await);
    assert_eq!(rx.recv().await.unwrap().message, "reload");
}
