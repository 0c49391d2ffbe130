//! Registry configuration

use std::time::Duration;

/// Configuration for a [`TopicRegistry`](super::TopicRegistry)
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Callbacks running longer than this are logged as slow
    pub slow_subscriber_threshold: Duration,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            slow_subscriber_threshold: Duration::from_millis(100),
        }
    }
}

impl RegistryConfig {
    /// Set the slow subscriber warning threshold
    pub fn slow_subscriber_threshold(mut self, threshold: Duration) -> Self {
        self.slow_subscriber_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RegistryConfig::default();

        assert_eq!(config.slow_subscriber_threshold, Duration::from_millis(100));
    }

    #[test]
    fn test_builder_threshold() {
        let config = RegistryConfig::default().slow_subscriber_threshold(Duration::from_secs(1));

        assert_eq!(config.slow_subscriber_threshold, Duration::from_secs(1));
    }
}
