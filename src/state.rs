//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::content::{CatalogCache, ContentResolver, ContentStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    store: ContentStore,
    catalog: CatalogCache,
}

impl AppState {
    /// Create application state from configuration
    pub fn new(config: Config) -> Self {
        let resolver = ContentResolver::with_extension(
            config.content.root.clone(),
            config.content.extension.clone(),
        );
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store: ContentStore::new(resolver),
                catalog: CatalogCache::new(),
            }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the content store
    pub fn store(&self) -> &ContentStore {
        &self.inner.store
    }

    /// Get the catalog cache
    pub fn catalog(&self) -> &CatalogCache {
        &self.inner.catalog
    }
}
