//! Item management service

use crate::config::ProcessingConfig;
use crate::core::models::{ItemId, ItemRequest, ItemResponse, NewItem, Page};
use crate::core::processing::{BatchCoordinator, BoundedDispatcher, EMPTY_BATCH_MESSAGE};
use crate::storage::{ItemStore, duplicate_name_error, item_not_found_error};
use crate::utils::error::{Result, ServiceError};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Page size used when the caller does not ask for one
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Largest page a caller may request
pub const MAX_PAGE_SIZE: u64 = 100;

/// CRUD operations over items plus batch processing
#[derive(Clone)]
pub struct ItemService {
    store: Arc<dyn ItemStore>,
    coordinator: BatchCoordinator,
}

impl ItemService {
    /// Create a new item service sharing the process-wide dispatcher
    pub fn new(
        store: Arc<dyn ItemStore>,
        dispatcher: Arc<BoundedDispatcher>,
        config: &ProcessingConfig,
    ) -> Self {
        let coordinator = BatchCoordinator::new(store.clone(), dispatcher, config);
        Self { store, coordinator }
    }

    pub fn store(&self) -> &Arc<dyn ItemStore> {
        &self.store
    }

    /// One zero-based page of items
    pub async fn find_page(&self, page: u64, size: u64) -> Result<Page<ItemResponse>> {
        if size == 0 || size > MAX_PAGE_SIZE {
            return Err(ServiceError::bad_request(format!(
                "The page size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }

        debug!(page, size, "Listing items");
        let items = self.store.list_page(page, size).await?;
        if items.is_empty() {
            warn!(page, size, "No items found");
            return Err(ServiceError::not_found(EMPTY_BATCH_MESSAGE));
        }

        Ok(items.map(ItemResponse::from))
    }

    pub async fn find_by_id(&self, id: ItemId) -> Result<ItemResponse> {
        debug!(item_id = %id, "Finding item");
        self.store
            .find_by_id(id)
            .await?
            .map(ItemResponse::from)
            .ok_or_else(|| {
                warn!(item_id = %id, "Item not found");
                item_not_found_error(id)
            })
    }

    /// Validate and store a new item
    ///
    /// The name pre-check gives the common case a clear error; the store's own
    /// uniqueness check settles concurrent creations.
    pub async fn create(&self, request: ItemRequest) -> Result<ItemResponse> {
        request.validate()?;

        if self
            .store
            .find_by_name_ignore_case(&request.name)
            .await?
            .is_some()
        {
            warn!(name = %request.name, "Item name already taken");
            return Err(duplicate_name_error(&request.name));
        }

        let item = self.store.create(NewItem::from(request)).await?;
        info!(item_id = %item.id, "Item created");
        Ok(ItemResponse::from(item))
    }

    /// Overwrite every field of an existing item
    pub async fn update(&self, id: ItemId, request: ItemRequest) -> Result<ItemResponse> {
        request.validate()?;

        let mut item = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| item_not_found_error(id))?;

        if let Some(other) = self.store.find_by_name_ignore_case(&request.name).await? {
            if other.id != id {
                warn!(item_id = %id, name = %request.name, "Item name already taken");
                return Err(duplicate_name_error(&request.name));
            }
        }

        item.apply(request);
        let item = self.store.save(item).await?;
        info!(item_id = %item.id, "Item updated");
        Ok(ItemResponse::from(item))
    }

    pub async fn delete(&self, id: ItemId) -> Result<()> {
        self.store.delete(id).await?;
        info!(item_id = %id, "Item deleted");
        Ok(())
    }

    /// Process every stored item on the shared pool
    pub async fn process_all(&self) -> Result<Vec<ItemResponse>> {
        self.coordinator.process_all().await
    }
}
