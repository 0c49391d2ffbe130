//! Registry error types
//!
//! Error types for topic registry operations and subscriber callbacks.

use super::topic::Topic;

/// Error type for registry operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Name does not match any topic that currently has subscribers
    UnknownTopic(String),
    /// Publish attempted on a topic with no subscribers
    InvalidTopic(Topic),
    /// The process-wide registry was already installed
    AlreadyInitialized,
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::UnknownTopic(name) => write!(f, "Unknown topic: {}", name),
            RegistryError::InvalidTopic(topic) => {
                write!(f, "Topic has no subscribers: {}", topic)
            }
            RegistryError::AlreadyInitialized => write!(f, "Registry already initialized"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Error returned by a subscriber callback
///
/// Subscriber failures never reach the publisher as an `Err`; they are
/// logged and collected into the [`PublishReport`](super::PublishReport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberError {
    message: String,
}

impl SubscriberError {
    /// Create a new subscriber error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for SubscriberError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SubscriberError {}

impl From<String> for SubscriberError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for SubscriberError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
