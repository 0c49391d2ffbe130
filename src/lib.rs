//! # notify-bus
//!
//! In-process publish/subscribe for internal notifications such as cache
//! invalidation and configuration refresh, plus a small HTTP form that lets
//! an operator publish by hand.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use notify_bus::admin::{AdminConfig, AdminServer};
//! use notify_bus::registry::{subscriber_fn, Topic, TopicRegistry};
//!
//! #[tokio::main]
//! async fn main() -> notify_bus::Result<()> {
//!     let registry = Arc::new(TopicRegistry::new());
//!
//!     registry
//!         .subscribe(
//!             Topic::ConfigRefresh,
//!             subscriber_fn(|topic, message| println!("{}: {}", topic, message)),
//!         )
//!         .await;
//!
//!     registry.publish(Topic::ConfigRefresh, "reload").await?;
//!
//!     AdminServer::new(AdminConfig::default(), registry).run().await
//! }
//! ```

pub mod admin;
pub mod error;
pub mod registry;

pub use error::{Error, Result};
pub use registry::{PublishReport, RegistryConfig, RegistryError, Topic, TopicRegistry};
