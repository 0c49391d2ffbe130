//! Request handlers for the admin endpoint
//!
//! The publish form reads two optional query fields, `topic` and `message`.
//! A submitted topic is resolved against the registry and published; an
//! unknown topic is answered with `400 Bad Request`.

use std::sync::Arc;

use askama::Template;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use crate::registry::{Topic, TopicRegistry};

use super::config::AdminConfig;
use super::page::{help_status, topic_list, PubSubPage};

/// Query parameters of the publish form
#[derive(Debug, Default, Deserialize)]
pub struct PublishParams {
    /// Topic name
    pub topic: Option<String>,
    /// Message text
    pub message: Option<String>,
}

impl PublishParams {
    /// Trimmed topic, `None` if missing or blank
    pub fn topic(&self) -> Option<&str> {
        non_blank(self.topic.as_deref())
    }

    /// Trimmed message, `None` if missing or blank
    pub fn message(&self) -> Option<&str> {
        non_blank(self.message.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Build the admin router for `registry`
pub fn router(config: &AdminConfig, registry: Arc<TopicRegistry>) -> Router {
    Router::new()
        .route(&config.path, get(pubsub_form))
        .route("/health", get(health))
        .with_state(registry)
}

/// Render the publish form, publishing the submitted topic first if present
pub async fn pubsub_form(
    State(registry): State<Arc<TopicRegistry>>,
    Query(params): Query<PublishParams>,
) -> Response {
    let mut status = help_status(&registry.topics().await);

    if let Some(topic) = params.topic() {
        let message = params.message().unwrap_or_default();
        tracing::info!(topic, text = message, "Submitting notification");

        match registry.publish_str(topic, message).await {
            Ok(report) => {
                if !report.is_complete() {
                    tracing::warn!(
                        topic,
                        delivered = report.delivered,
                        failed = report.failures.len(),
                        "Notification partially delivered"
                    );
                }
                status = format!("Submitted topic {}, message {}", topic, message);
            }
            Err(e) => {
                let msg = format!(
                    "Failed to submit topic {}, message {} - {}\nValid topics: {}",
                    topic,
                    message,
                    e,
                    topic_list(&registry.topics().await)
                );
                tracing::error!("{}", msg);
                return (StatusCode::BAD_REQUEST, msg).into_response();
            }
        }
    }

    render(registry.topics().await, status)
}

fn render(topics: Vec<Topic>, status: String) -> Response {
    let page = PubSubPage { topics, status };

    match page.render() {
        Ok(html) => {
            tracing::debug!(html = %html, "Rendered pubsub page");
            Html(html).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to render pubsub page");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

/// Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "healthy")
}
