//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::processing::BoundedDispatcher;
use crate::services::ItemService;
use crate::storage::ItemStore;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Every field is cheap to clone; the store and the processing pool are
/// shared by all workers of the server.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Item operations
    pub items: ItemService,
    /// Process-wide processing pool
    pub dispatcher: Arc<BoundedDispatcher>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, store: Arc<dyn ItemStore>) -> Self {
        let dispatcher = Arc::new(BoundedDispatcher::from_config(config.processing()));
        Self::with_dispatcher(config, store, dispatcher)
    }

    /// Create a new AppState around an existing pool
    pub fn with_dispatcher(
        config: Config,
        store: Arc<dyn ItemStore>,
        dispatcher: Arc<BoundedDispatcher>,
    ) -> Self {
        let items = ItemService::new(store, dispatcher.clone(), config.processing());
        Self {
            config: Arc::new(config),
            items,
            dispatcher,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn ItemStore> {
        self.items.store()
    }
}
