//! Admin HTTP server
//!
//! Binds the listener and serves the admin router until shut down.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::admin::config::AdminConfig;
use crate::admin::handler;
use crate::error::Result;
use crate::registry::TopicRegistry;

/// HTTP server exposing the publish form
pub struct AdminServer {
    config: AdminConfig,
    registry: Arc<TopicRegistry>,
}

impl AdminServer {
    /// Create a new server publishing into `registry`
    pub fn new(config: AdminConfig, registry: Arc<TopicRegistry>) -> Self {
        Self { config, registry }
    }

    /// Get a reference to the topic registry
    pub fn registry(&self) -> &Arc<TopicRegistry> {
        &self.registry
    }

    /// Build the router served by this server
    pub fn router(&self) -> axum::Router {
        handler::router(&self.config, Arc::clone(&self.registry))
    }

    /// Run the server
    ///
    /// This method blocks until the listener fails.
    pub async fn run(&self) -> Result<()> {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        tracing::info!(
            addr = %self.config.bind_addr,
            path = %self.config.path,
            "Admin server listening"
        );

        axum::serve(listener, self.router()).await?;
        Ok(())
    }

    /// Run the server with graceful shutdown
    pub async fn run_until<F>(&self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` completes
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!(
            addr = %listener.local_addr()?,
            path = %self.config.path,
            "Admin server listening"
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(async move {
                shutdown.await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        Ok(())
    }

    /// Get the bind address
    pub fn bind_addr(&self) -> SocketAddr {
        self.config.bind_addr
    }
}
