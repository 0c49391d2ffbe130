//! Subscriber callbacks and subscription handles

use tokio::sync::mpsc;

use super::error::SubscriberError;
use super::topic::Topic;

/// Process-unique identifier for a single registration
pub type SubscriptionId = u64;

/// Receiver of published messages for one topic
///
/// Callbacks run synchronously on the publishing task and should return
/// quickly. A returned error is logged by the registry and does not stop
/// delivery to the remaining subscribers.
pub trait Subscriber: Send + Sync + 'static {
    /// Handle a message published on `topic`
    fn on_message(&self, topic: Topic, message: &str) -> Result<(), SubscriberError>;
}

impl<F> Subscriber for F
where
    F: Fn(Topic, &str) -> Result<(), SubscriberError> + Send + Sync + 'static,
{
    fn on_message(&self, topic: Topic, message: &str) -> Result<(), SubscriberError> {
        self(topic, message)
    }
}

/// Adapter for callbacks that cannot fail
pub struct InfallibleFn<F>(F);

impl<F> Subscriber for InfallibleFn<F>
where
    F: Fn(Topic, &str) + Send + Sync + 'static,
{
    fn on_message(&self, topic: Topic, message: &str) -> Result<(), SubscriberError> {
        (self.0)(topic, message);
        Ok(())
    }
}

/// Wrap an infallible closure as a [`Subscriber`]
pub fn subscriber_fn<F>(f: F) -> InfallibleFn<F>
where
    F: Fn(Topic, &str) + Send + Sync + 'static,
{
    InfallibleFn(f)
}

/// Token identifying one registration, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle {
    /// Topic the subscriber is registered on
    pub topic: Topic,
    /// Registration id
    pub id: SubscriptionId,
}

/// A published message as seen by channel subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Topic the message was published on
    pub topic: Topic,
    /// Message text
    pub message: String,
}

/// Subscriber that forwards each message into an unbounded channel
///
/// Lets a component consume notifications on its own task instead of
/// inside the publisher's call.
pub struct ChannelSubscriber {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelSubscriber {
    /// Create a subscriber and the receiver it feeds
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Subscriber for ChannelSubscriber {
    fn on_message(&self, topic: Topic, message: &str) -> Result<(), SubscriberError> {
        self.tx
            .send(Notification {
                topic,
                message: message.to_string(),
            })
            .map_err(|_| SubscriberError::new("notification receiver dropped"))
    }
}
