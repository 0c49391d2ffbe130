//! Process-wide registry instance
//!
//! Components should receive an `Arc<TopicRegistry>` explicitly. The global
//! slot exists for call sites that cannot be threaded through, and is filled
//! exactly once at startup.

use std::sync::{Arc, OnceLock};

use super::config::RegistryConfig;
use super::error::RegistryError;
use super::store::TopicRegistry;

static GLOBAL_REGISTRY: OnceLock<Arc<TopicRegistry>> = OnceLock::new();

/// Install the process-wide registry
///
/// Returns [`RegistryError::AlreadyInitialized`] if called more than once.
pub fn init_global(config: RegistryConfig) -> Result<Arc<TopicRegistry>, RegistryError> {
    let registry = Arc::new(TopicRegistry::with_config(config));

    GLOBAL_REGISTRY
        .set(Arc::clone(&registry))
        .map_err(|_| RegistryError::AlreadyInitialized)?;

    tracing::info!("Process-wide topic registry initialized");
    Ok(registry)
}

/// Get the process-wide registry, if it has been installed
pub fn global() -> Option<Arc<TopicRegistry>> {
    GLOBAL_REGISTRY.get().cloned()
}
