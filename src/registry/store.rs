//! Topic registry implementation
//!
//! The central registry that tracks which topics have subscribers and fans
//! published messages out to them.

use std::any::Any;
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::{mpsc, RwLock};

use super::config::RegistryConfig;
use super::entry::{DeliverySnapshot, SubscriberSlot, TopicEntry, TopicStats};
use super::error::{RegistryError, SubscriberError};
use super::report::{DeliveryFailure, PublishReport};
use super::subscriber::{ChannelSubscriber, Notification, Subscriber, SubscriptionHandle};
use super::topic::Topic;

/// Central registry for topic subscriptions
///
/// Thread-safe via `RwLock`. Subscriptions are rare and take the write
/// lock; publishing and topic lookups only take the read lock, and never
/// hold it while subscriber callbacks run.
pub struct TopicRegistry {
    /// Map of topic to its subscribers; only topics with subscribers are present
    topics: RwLock<BTreeMap<Topic, TopicEntry>>,

    /// Next subscription id
    next_id: AtomicU64,

    /// Configuration
    config: RegistryConfig,
}

impl TopicRegistry {
    /// Create a new topic registry with default configuration
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a new topic registry with custom configuration
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            topics: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
            config,
        }
    }

    /// Get the registry configuration
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Register a subscriber for a topic
    ///
    /// The topic becomes visible in [`topics`](Self::topics) if this is its
    /// first subscriber. Subscribers are invoked in registration order.
    pub async fn subscribe<S: Subscriber>(
        &self,
        topic: Topic,
        subscriber: S,
    ) -> SubscriptionHandle {
        self.subscribe_arc(topic, Arc::new(subscriber)).await
    }

    /// Register a closure as a subscriber
    pub async fn subscribe_fn<F>(&self, topic: Topic, f: F) -> SubscriptionHandle
    where
        F: Fn(Topic, &str) -> Result<(), SubscriberError> + Send + Sync + 'static,
    {
        self.subscribe(topic, f).await
    }

    /// Register a shared subscriber
    ///
    /// The same subscriber may be registered on several topics.
    pub async fn subscribe_arc(
        &self,
        topic: Topic,
        subscriber: Arc<dyn Subscriber>,
    ) -> SubscriptionHandle {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut topics = self.topics.write().await;

        let entry = topics.entry(topic).or_insert_with(TopicEntry::new);
        entry.subscribers.push(SubscriberSlot { id, subscriber });

        tracing::info!(
            topic = %topic,
            subscription_id = id,
            subscribers = entry.subscriber_count(),
            "Subscriber added"
        );

        SubscriptionHandle { topic, id }
    }

    /// Subscribe through a channel
    ///
    /// Returns the handle and a receiver that yields every message published
    /// on `topic` until the subscription is removed.
    pub async fn subscribe_channel(
        &self,
        topic: Topic,
    ) -> (SubscriptionHandle, mpsc::UnboundedReceiver<Notification>) {
        let (subscriber, rx) = ChannelSubscriber::new();
        let handle = self.subscribe(topic, subscriber).await;
        (handle, rx)
    }

    /// Remove a subscription
    ///
    /// When the last subscriber of a topic leaves, the topic is dropped from
    /// the registry. Returns `false` if the handle was not registered.
    pub async fn unsubscribe(&self, handle: &SubscriptionHandle) -> bool {
        let mut topics = self.topics.write().await;

        let Some(entry) = topics.get_mut(&handle.topic) else {
            return false;
        };

        if !entry.remove(handle.id) {
            tracing::warn!(
                topic = %handle.topic,
                subscription_id = handle.id,
                "Unsubscribe for unknown subscription"
            );
            return false;
        }

        tracing::debug!(
            topic = %handle.topic,
            subscription_id = handle.id,
            subscribers = entry.subscriber_count(),
            "Subscriber removed"
        );

        if entry.subscriber_count() == 0 {
            topics.remove(&handle.topic);
            tracing::info!(topic = %handle.topic, "Topic removed, no subscribers");
        }

        true
    }

    /// Topics that currently have at least one subscriber
    ///
    /// The result is a consistent snapshot ordered by topic.
    pub async fn topics(&self) -> Vec<Topic> {
        self.topics.read().await.keys().copied().collect()
    }

    /// Check if a topic currently has subscribers
    pub async fn has_topic(&self, topic: Topic) -> bool {
        self.topics.read().await.contains_key(&topic)
    }

    /// Resolve a topic name against the currently subscribed topics
    ///
    /// Fails with [`RegistryError::UnknownTopic`] if `name` is not a canonical
    /// topic name or the topic has no subscribers.
    pub async fn parse_topic(&self, name: &str) -> Result<Topic, RegistryError> {
        let topic = Topic::parse(name)?;

        if self.has_topic(topic).await {
            Ok(topic)
        } else {
            Err(RegistryError::UnknownTopic(name.to_string()))
        }
    }

    /// Publish a message to every subscriber of a topic
    ///
    /// Subscribers are invoked one at a time in registration order. A
    /// subscriber that fails is logged and recorded in the report; delivery
    /// continues with the next one. Fails with
    /// [`RegistryError::InvalidTopic`] without invoking anything if the topic
    /// has no subscribers.
    pub async fn publish(
        &self,
        topic: Topic,
        message: &str,
    ) -> Result<PublishReport, RegistryError> {
        let DeliverySnapshot {
            subscribers,
            counters,
        } = {
            let topics = self.topics.read().await;
            match topics.get(&topic) {
                Some(entry) if entry.subscriber_count() > 0 => entry.snapshot(),
                _ => return Err(RegistryError::InvalidTopic(topic)),
            }
        };

        tracing::debug!(
            topic = %topic,
            subscribers = subscribers.len(),
            "Publishing message"
        );

        let mut delivered = 0;
        let mut failures = Vec::new();

        for slot in &subscribers {
            match self.deliver(slot, topic, message) {
                Ok(()) => delivered += 1,
                Err(reason) => {
                    tracing::warn!(
                        topic = %topic,
                        subscription_id = slot.id,
                        error = %reason,
                        "Subscriber failed"
                    );
                    failures.push(DeliveryFailure {
                        subscription_id: slot.id,
                        reason,
                    });
                }
            }
        }

        counters.record(delivered, failures.len());

        Ok(PublishReport {
            topic,
            delivered,
            failures,
        })
    }

    /// Resolve `name` and publish `message` on it
    pub async fn publish_str(
        &self,
        name: &str,
        message: &str,
    ) -> Result<PublishReport, RegistryError> {
        let topic = self.parse_topic(name).await?;
        self.publish(topic, message).await
    }

    /// Get the number of subscribers on a topic
    pub async fn subscriber_count(&self, topic: Topic) -> usize {
        self.topics
            .read()
            .await
            .get(&topic)
            .map_or(0, TopicEntry::subscriber_count)
    }

    /// Get topic statistics
    pub async fn topic_stats(&self, topic: Topic) -> Option<TopicStats> {
        self.topics.read().await.get(&topic).map(TopicEntry::stats)
    }

    /// Get total number of topics with subscribers
    pub async fn topic_count(&self) -> usize {
        self.topics.read().await.len()
    }

    /// Invoke one subscriber, turning errors and panics into a failure reason
    fn deliver(&self, slot: &SubscriberSlot, topic: Topic, message: &str) -> Result<(), String> {
        let started = Instant::now();

        let result = match panic::catch_unwind(AssertUnwindSafe(|| {
            slot.subscriber.on_message(topic, message)
        })) {
            Ok(result) => result.map_err(|e| e.to_string()),
            Err(payload) => Err(panic_message(payload.as_ref())),
        };

        let elapsed = started.elapsed();
        if elapsed > self.config.slow_subscriber_threshold {
            tracing::warn!(
                topic = %topic,
                subscription_id = slot.id,
                elapsed_ms = elapsed.as_millis() as u64,
                "Slow subscriber"
            );
        }

        result
    }
}

impl Default for TopicRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panicked: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panicked: {}", s)
    } else {
        "panicked".to_string()
    }
}
