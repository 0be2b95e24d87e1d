//! Test fixtures and store wrappers
//!
//! Factories build real request payloads. The wrappers delegate to a real
//! store and add one behaviour each: a failing write, or a concurrency probe.

use async_trait::async_trait;
use item_service::core::models::{Item, ItemId, ItemRequest, NewItem, Page};
use item_service::storage::ItemStore;
use item_service::utils::error::{Result, ServiceError};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Factory for item payloads
pub struct ItemRequestFactory;

impl ItemRequestFactory {
    /// A valid payload with the given name
    pub fn named(name: &str) -> ItemRequest {
        ItemRequest {
            name: name.to_string(),
            description: format!("Description of {}", name),
            status: "NEW".to_string(),
            email: "owner@example.com".to_string(),
        }
    }

    /// A payload violating every field rule
    pub fn invalid() -> ItemRequest {
        ItemRequest {
            name: String::new(),
            description: "x".repeat(101),
            status: "   ".to_string(),
            email: "not-an-email".to_string(),
        }
    }
}

/// Store whose `save` fails for one item
pub struct FailingStore {
    inner: Arc<dyn ItemStore>,
    failing_id: ItemId,
}

impl FailingStore {
    pub fn new(inner: Arc<dyn ItemStore>, failing_id: ItemId) -> Self {
        Self { inner, failing_id }
    }
}

#[async_trait]
impl ItemStore for FailingStore {
    async fn list_all(&self) -> Result<Vec<Item>> {
        self.inner.list_all().await
    }

    async fn list_page(&self, page: u64, size: u64) -> Result<Page<Item>> {
        self.inner.list_page(page, size).await
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Item>> {
        self.inner.find_by_name_ignore_case(name).await
    }

    async fn create(&self, item: NewItem) -> Result<Item> {
        self.inner.create(item).await
    }

    async fn save(&self, item: Item) -> Result<Item> {
        if item.id == self.failing_id {
            return Err(ServiceError::internal(format!(
                "simulated write failure for item {}",
                item.id
            )));
        }
        self.inner.save(item).await
    }

    async fn delete(&self, id: ItemId) -> Result<()> {
        self.inner.delete(id).await
    }

    async fn health_check(&self) -> Result<()> {
        self.inner.health_check().await
    }
}

/// Store that counts calls and records the peak number of concurrent saves
pub struct ConcurrencyProbeStore {
    inner: Arc<dyn ItemStore>,
    save_delay: Duration,
    active: AtomicUsize,
    peak: AtomicUsize,
    saves: AtomicUsize,
    list_calls: AtomicUsize,
}

impl ConcurrencyProbeStore {
    pub fn new(inner: Arc<dyn ItemStore>, save_delay: Duration) -> Self {
        Self {
            inner,
            save_delay,
            active: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
            saves: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
        }
    }

    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ItemStore for ConcurrencyProbeStore {
    async fn list_all(&self) -> Result<Vec<Item>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list_all().await
    }

    async fn list_page(&self, page: u64, size: u64) -> Result<Page<Item>> {
        self.inner.list_page(page, size).await
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Item>> {
        self.inner.find_by_name_ignore_case(name).await
    }

    async fn create(&self, item: NewItem) -> Result<Item> {
        self.inner.create(item).await
    }

    async fn save(&self, item: Item) -> Result<Item> {
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        self.saves.fetch_add(1, Ordering::SeqCst);

        tokio::time::sleep(self.save_delay).await;
        let result = self.inner.save(item).await;

        self.active.fetch_sub(1, Ordering::SeqCst);
        result
    }

    async fn delete(&self, id: ItemId) -> Result<()> {
        self.inner.delete(id).await
    }

    async fn health_check(&self) -> Result<()> {
        self.inner.health_check().await
    }
}
