//! Outcome of a publish call

use super::subscriber::SubscriptionId;
use super::topic::Topic;

/// A subscriber callback that failed during delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryFailure {
    /// Registration that failed
    pub subscription_id: SubscriptionId,
    /// Error message or panic payload
    pub reason: String,
}

impl std::fmt::Display for DeliveryFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Delivery to subscriber {} failed: {}",
            self.subscription_id, self.reason
        )
    }
}

/// Aggregate result of delivering one message
///
/// Individual failures do not make the publish call fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    /// Topic the message was published on
    pub topic: Topic,
    /// Number of callbacks that completed successfully
    pub delivered: usize,
    /// Callbacks that returned an error or panicked
    pub failures: Vec<DeliveryFailure>,
}

impl PublishReport {
    /// Number of subscribers the message was handed to
    pub fn attempted(&self) -> usize {
        self.delivered + self.failures.len()
    }

    /// Whether every subscriber accepted the message
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
