//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::WebConfig;
use crate::store::EntityStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The entity store is immutable after startup,
/// so handlers read it without locking.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: WebConfig,
    store: EntityStore,
}

impl AppState {
    /// Create application state over an already-seeded store.
    #[must_use]
    pub fn new(config: WebConfig, store: EntityStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &WebConfig {
        &self.inner.config
    }

    /// Get a reference to the entity store.
    #[must_use]
    pub fn store(&self) -> &EntityStore {
        &self.inner.store
    }
}
