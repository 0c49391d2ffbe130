//! Topic entry and statistics types
//!
//! This module defines the per-topic state stored in the registry.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use super::subscriber::{Subscriber, SubscriptionId};

/// One registered subscriber
#[derive(Clone)]
pub(super) struct SubscriberSlot {
    pub(super) id: SubscriptionId,
    pub(super) subscriber: Arc<dyn Subscriber>,
}

/// Delivery counters of one topic entry
///
/// Shared with in-flight publishes so their outcome is recorded against the
/// entry they were delivered from, even if that entry has since been dropped.
#[derive(Default)]
pub(super) struct TopicCounters {
    published: AtomicU64,
    delivered: AtomicU64,
    failed: AtomicU64,
}

impl TopicCounters {
    /// Record the outcome of one publish call
    pub(super) fn record(&self, delivered: usize, failed: usize) {
        self.published.fetch_add(1, Ordering::Relaxed);
        self.delivered.fetch_add(delivered as u64, Ordering::Relaxed);
        self.failed.fetch_add(failed as u64, Ordering::Relaxed);
    }
}

/// Subscribers and counters captured for one publish call
pub(super) struct DeliverySnapshot {
    pub(super) subscribers: Vec<SubscriberSlot>,
    pub(super) counters: Arc<TopicCounters>,
}

/// Entry for a single topic in the registry
///
/// An entry only exists while the topic has at least one subscriber.
pub(super) struct TopicEntry {
    /// Subscribers in registration order
    pub(super) subscribers: Vec<SubscriberSlot>,

    counters: Arc<TopicCounters>,

    /// When the first subscriber arrived
    created_at: Instant,
}

impl TopicEntry {
    pub(super) fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            counters: Arc::new(TopicCounters::default()),
            created_at: Instant::now(),
        }
    }

    pub(super) fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Copy of the subscriber list and counters taken for delivery
    pub(super) fn snapshot(&self) -> DeliverySnapshot {
        DeliverySnapshot {
            subscribers: self.subscribers.clone(),
            counters: Arc::clone(&self.counters),
        }
    }

    /// Remove a subscriber by id, returning whether it was present
    pub(super) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|slot| slot.id != id);
        self.subscribers.len() != before
    }

    pub(super) fn stats(&self) -> TopicStats {
        TopicStats {
            subscriber_count: self.subscriber_count(),
            published: self.counters.published.load(Ordering::Relaxed),
            delivered: self.counters.delivered.load(Ordering::Relaxed),
            failed: self.counters.failed.load(Ordering::Relaxed),
            created_at: self.created_at,
        }
    }
}

/// Statistics for a topic
#[derive(Debug, Clone)]
pub struct TopicStats {
    /// Number of current subscribers
    pub subscriber_count: usize,
    /// Publish calls delivered to this topic
    pub published: u64,
    /// Successful callback invocations
    pub delivered: u64,
    /// Failed callback invocations
    pub failed: u64,
    /// When the topic gained its first subscriber
    pub created_at: Instant,
}
