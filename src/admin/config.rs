//! Admin server configuration

use std::net::SocketAddr;

/// Default port of the admin endpoint
pub const DEFAULT_ADMIN_PORT: u16 = 8080;

/// Default path of the publish form
pub const DEFAULT_PUBSUB_PATH: &str = "/pubsub";

/// Admin server configuration options
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,

    /// Path serving the publish form
    pub path: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_ADMIN_PORT)),
            path: DEFAULT_PUBSUB_PATH.to_string(),
        }
    }
}

impl AdminConfig {
    /// Create a new config with custom bind address
    pub fn with_addr(addr: SocketAddr) -> Self {
        Self {
            bind_addr: addr,
            ..Default::default()
        }
    }

    /// Set the bind address
    pub fn bind(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Set the form path
    ///
    /// A missing leading `/` is added.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.path = if path.starts_with('/') {
            path
        } else {
            format!("/{}", path)
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AdminConfig::default();

        assert_eq!(config.bind_addr.port(), DEFAULT_ADMIN_PORT);
        assert_eq!(config.path, "/pubsub");
    }

    #[test]
    fn test_with_addr() {
        let addr: SocketAddr = "127.0.0.1:9090".parse().unwrap();
        let config = AdminConfig::with_addr(addr);

        assert_eq!(config.bind_addr, addr);
        assert_eq!(config.path, DEFAULT_PUBSUB_PATH);
    }

    #[test]
    fn test_builder_path() {
        assert_eq!(AdminConfig::default().path("/admin/pubsub").path, "/admin/pubsub");
        assert_eq!(AdminConfig::default().path("notify").path, "/notify");
    }

    #[test]
    fn test_builder_chaining() {
        let addr: SocketAddr = "127.0.0.1:8081".parse().unwrap();
        let config = AdminConfig::default().bind(addr).path("/bus");

        assert_eq!(config.bind_addr, addr);
        assert_eq!(config.path, "/bus");
    }
}
