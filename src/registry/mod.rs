//! Topic registry for in-process pub/sub
//!
//! The registry tracks which topics currently have subscribers and delivers
//! published messages to them.
//!
//! # Architecture
//!
//! ```text
//!                        Arc<TopicRegistry>
//!                 ┌──────────────────────────────┐
//!                 │ topics: BTreeMap<Topic,      │
//!                 │   TopicEntry {               │
//!                 │     subscribers: [s1, s2],   │
//!                 │   }                          │
//!                 │ >                            │
//!                 └──────────────┬───────────────┘
//!                                │ snapshot under read lock
//!                                ▼
//!  publish(topic, msg) ──► s1.on_message() ──► s2.on_message() ──► PublishReport
//! ```
//!
//! # Delivery
//!
//! Publishing copies the subscriber list of the target topic, releases the
//! lock, and then calls each subscriber in registration order on the
//! publishing task. A subscriber that returns an error (or panics) is logged
//! and recorded in the [`PublishReport`]; the rest still receive the message.
//!
//! A topic is only valid for publishing while it has at least one
//! subscriber, and [`TopicRegistry::topics`] lists exactly those topics.

pub mod config;
mod entry;
pub mod error;
pub mod global;
pub mod report;
pub mod store;
pub mod subscriber;
pub mod topic;

pub use config::RegistryConfig;
pub use entry::TopicStats;
pub use error::{RegistryError, SubscriberError};
pub use global::{global, init_global};
pub use report::{DeliveryFailure, PublishReport};
pub use store::TopicRegistry;
pub use subscriber::{
    subscriber_fn, ChannelSubscriber, InfallibleFn, Notification, Subscriber, SubscriptionHandle,
    SubscriptionId,
};
pub use topic::Topic;
