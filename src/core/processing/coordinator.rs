//! Batch orchestration over the shared pool

use super::dispatcher::BoundedDispatcher;
use super::outcome::Outcome;
use super::processor::UnitProcessor;
use crate::config::ProcessingConfig;
use crate::core::models::ItemResponse;
use crate::storage::ItemStore;
use crate::utils::error::{Result, ServiceError};
use futures::future::join_all;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Message reported when there is nothing to process
pub const EMPTY_BATCH_MESSAGE: &str = "No items could be found";

/// Summary of one batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub duration: Duration,
}

impl BatchSummary {
    pub fn from_outcomes<T>(outcomes: &[Outcome<T>], duration: Duration) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
        Self {
            total: outcomes.len(),
            succeeded,
            failed: outcomes.len() - succeeded,
            duration,
        }
    }
}

/// Runs every stored item through the shared pool
#[derive(Clone)]
pub struct BatchCoordinator {
    store: Arc<dyn ItemStore>,
    dispatcher: Arc<BoundedDispatcher>,
    processor: UnitProcessor,
}

impl BatchCoordinator {
    pub fn new(
        store: Arc<dyn ItemStore>,
        dispatcher: Arc<BoundedDispatcher>,
        config: &ProcessingConfig,
    ) -> Self {
        let processor =
            UnitProcessor::new(store.clone(), config, dispatcher.cancellation_token());
        Self {
            store,
            dispatcher,
            processor,
        }
    }

    pub fn dispatcher(&self) -> &Arc<BoundedDispatcher> {
        &self.dispatcher
    }

    /// Process every stored item, returning the processed items in enumeration order
    ///
    /// Fails with `NotFound` only when there are no items. Units that fail are
    /// left out of the result.
    pub async fn process_all(&self) -> Result<Vec<ItemResponse>> {
        let (processed, _) = self.process_all_with_summary().await?;
        Ok(processed)
    }

    /// Same as [`process_all`](Self::process_all), also returning the run summary
    ///
    /// The batch runs on its own task, so it completes even when the caller
    /// stops waiting for it.
    pub async fn process_all_with_summary(&self) -> Result<(Vec<ItemResponse>, BatchSummary)> {
        let batch = tokio::spawn(self.clone().run_batch());

        batch.await.map_err(|e| {
            error!(pool = %self.dispatcher.name(), error = %e, "Batch task failed");
            ServiceError::internal(format!("Batch processing task failed: {}", e))
        })?
    }

    async fn run_batch(self) -> Result<(Vec<ItemResponse>, BatchSummary)> {
        let items = self.store.list_all().await?;
        if items.is_empty() {
            error!("No items to process");
            return Err(ServiceError::not_found(EMPTY_BATCH_MESSAGE));
        }

        let start = Instant::now();
        info!(
            pool = %self.dispatcher.name(),
            items = items.len(),
            "Processing all items"
        );

        let processor = self.processor.clone();
        let handles = self
            .dispatcher
            .submit_all(items, move |item| {
                let processor = processor.clone();
                async move { processor.process(item).await }
            })
            .await;

        // join_all yields outcomes in handle order, whatever the completion order
        let outcomes = join_all(handles.into_iter().map(|handle| handle.resolve())).await;

        let summary = BatchSummary::from_outcomes(&outcomes, start.elapsed());
        info!(
            total = summary.total,
            succeeded = summary.succeeded,
            failed = summary.failed,
            duration_ms = summary.duration.as_millis() as u64,
            "Batch processing finished"
        );

        let processed = outcomes
            .into_iter()
            .filter_map(Outcome::into_success)
            .collect();

        Ok((processed, summary))
    }
}
