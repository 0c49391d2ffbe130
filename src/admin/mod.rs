//! HTTP administrative bridge
//!
//! Lets an operator inject a `(topic, message)` pair into the registry
//! from a browser form. The page lists the topics that currently have
//! subscribers and shows the outcome of the last submission.

pub mod config;
pub mod handler;
pub mod page;
pub mod server;

pub use config::AdminConfig;
pub use handler::{router, PublishParams};
pub use page::PubSubPage;
pub use server::AdminServer;
