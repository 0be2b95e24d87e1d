//! Storage layer for the item service
//!
//! [`ItemStore`] is the work store the service and the batch pipeline call
//! into. Two backends implement it: a SeaORM database and an in-process map.

/// Database storage module
pub mod database;
/// In-memory storage module
pub mod memory;

use crate::config::StorageConfig;
use crate::core::models::{Item, ItemId, NewItem, Page};
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

pub use memory::MemoryItemStore;

/// Persistence operations over items
///
/// Name uniqueness (case-insensitive) is enforced by every backend at write
/// time and reported as [`ServiceError::Conflict`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All items, ordered by identity
    async fn list_all(&self) -> Result<Vec<Item>>;

    /// One zero-based page of items, ordered by identity
    async fn list_page(&self, page: u64, size: u64) -> Result<Page<Item>>;

    /// Find an item by identity
    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>>;

    /// Find an item whose name matches ignoring case
    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Item>>;

    /// Store a new item and assign its identity
    async fn create(&self, item: NewItem) -> Result<Item>;

    /// Create-or-update by identity, returning the stored form
    async fn save(&self, item: Item) -> Result<Item>;

    /// Delete an item by identity
    async fn delete(&self, id: ItemId) -> Result<()>;

    /// Check that the backend is reachable
    async fn health_check(&self) -> Result<()>;

    /// Short backend name for health reports
    fn backend(&self) -> &'static str {
        "custom"
    }
}

/// Error reported when a name is already taken
pub fn duplicate_name_error(name: &str) -> ServiceError {
    ServiceError::conflict(format!("An item with this name ({}) already exists", name))
}

/// Error reported when an identity does not exist
pub fn item_not_found_error(id: ItemId) -> ServiceError {
    ServiceError::not_found(format!(
        "The item by the provided id ({}) couldn't be found",
        id
    ))
}

/// Storage health report
#[derive(Debug, Clone, Serialize)]
pub struct StorageHealthStatus {
    /// Backend name
    pub backend: &'static str,
    /// Whether the backend answered
    pub healthy: bool,
}

/// Open the configured backend, running migrations for the database
pub async fn connect(config: &StorageConfig) -> Result<Arc<dyn ItemStore>> {
    if !config.database.enabled {
        info!("Database disabled, using in-memory item store");
        return Ok(Arc::new(MemoryItemStore::new()));
    }

    debug!("Connecting to database");
    let database = database::Database::new(&config.database).await?;
    database.migrate().await?;

    info!("Storage layer initialized successfully");
    Ok(Arc::new(database))
}
