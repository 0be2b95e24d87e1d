//! In-process item store
//!
//! A lock-protected ordered map. Writes check name uniqueness under the same
//! write lock, so concurrent creators cannot both win.

use super::{ItemStore, duplicate_name_error, item_not_found_error};
use crate::core::models::{Item, ItemId, NewItem, Page};
use crate::utils::error::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Default)]
struct MemoryState {
    items: BTreeMap<ItemId, Item>,
    last_id: i64,
}

impl MemoryState {
    fn name_taken(&self, name_key: &str, except: Option<ItemId>) -> bool {
        self.items
            .values()
            .any(|item| Some(item.id) != except && item.name_key() == name_key)
    }
}

/// Item store kept in process memory
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    state: RwLock<MemoryState>,
}

impl MemoryItemStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.state.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn list_all(&self) -> Result<Vec<Item>> {
        Ok(self.state.read().items.values().cloned().collect())
    }

    async fn list_page(&self, page: u64, size: u64) -> Result<Page<Item>> {
        let state = self.state.read();
        let total = state.items.len() as u64;
        let items = state
            .items
            .values()
            .skip(page.saturating_mul(size) as usize)
            .take(size as usize)
            .cloned()
            .collect();

        Ok(Page::new(items, page, size, total))
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>> {
        Ok(self.state.read().items.get(&id).cloned())
    }

    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Item>> {
        let key = crate::core::models::item::name_key(name);
        Ok(self
            .state
            .read()
            .items
            .values()
            .find(|item| item.name_key() == key)
            .cloned())
    }

    async fn create(&self, item: NewItem) -> Result<Item> {
        let mut state = self.state.write();

        if state.name_taken(&item.name_key(), None) {
            return Err(duplicate_name_error(&item.name));
        }

        state.last_id += 1;
        let item = item.with_id(ItemId(state.last_id));
        state.items.insert(item.id, item.clone());

        debug!(item_id = %item.id, "Created item in memory store");
        Ok(item)
    }

    async fn save(&self, item: Item) -> Result<Item> {
        let mut state = self.state.write();

        if state.name_taken(&item.name_key(), Some(item.id)) {
            return Err(duplicate_name_error(&item.name));
        }

        state.last_id = state.last_id.max(item.id.value());
        state.items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn delete(&self, id: ItemId) -> Result<()> {
        match self.state.write().items.remove(&id) {
            Some(_) => Ok(()),
            None => Err(item_not_found_error(id)),
        }
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
