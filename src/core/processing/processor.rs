//! Per-item work: wait out the simulated latency, mark the item processed and persist it

use super::outcome::{Outcome, UnitFailure};
use crate::config::ProcessingConfig;
use crate::core::models::{Item, ItemResponse};
use crate::storage::ItemStore;
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

/// Processes one item into its public representation
#[derive(Clone)]
pub struct UnitProcessor {
    store: Arc<dyn ItemStore>,
    latency: Duration,
    terminal_status: Arc<str>,
    cancel: CancellationToken,
}

impl UnitProcessor {
    pub fn new(
        store: Arc<dyn ItemStore>,
        config: &ProcessingConfig,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            store,
            latency: config.simulated_latency(),
            terminal_status: Arc::from(config.terminal_status.as_str()),
            cancel,
        }
    }

    /// Process one item. Never returns an error: every failure becomes an [`Outcome::Failure`].
    pub async fn process(&self, item: Item) -> Outcome<ItemResponse> {
        let item_id = item.id;

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                warn!(item_id = %item_id, "Item processing interrupted");
                // Re-signal the pool token; a no-op when the pool itself shut down
                self.cancel.cancel();
                return Outcome::Failure(UnitFailure::Cancelled { item_id });
            }
            _ = tokio::time::sleep(self.latency) => {}
        }

        let outcome = Outcome::from_result(item_id, self.try_process(item).await);
        match &outcome {
            Outcome::Success(_) => debug!(item_id = %item_id, "Item processed"),
            Outcome::Failure(failure) => {
                error!(item_id = %item_id, error = %failure, "Error processing item")
            }
        }
        outcome
    }

    async fn try_process(&self, mut item: Item) -> Result<ItemResponse> {
        item.status = self.terminal_status.to_string();
        let saved = self.store.save(item).await?;
        Ok(ItemResponse::from(saved))
    }
}
