//! Process-wide bounded worker pool
//!
//! The pool admits at most `capacity` units at a time. There is no pending
//! queue: a submitter that finds every worker busy waits for a permit before
//! its next unit is spawned, and a unit keeps its permit until it finishes.

use super::outcome::{Outcome, UnitFailure};
use crate::config::ProcessingConfig;
use crate::core::models::{Item, ItemId};
use std::any::Any;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Something the dispatcher can run and report on
pub trait WorkUnit: Send + 'static {
    /// Identity recorded in the unit's failure, if any
    fn unit_id(&self) -> ItemId;
}

impl WorkUnit for Item {
    fn unit_id(&self) -> ItemId {
        self.id
    }
}

/// Pending outcome of one submitted unit
#[derive(Debug)]
pub enum OutcomeHandle<T> {
    /// The unit is running (or has run) on the pool
    Spawned {
        item_id: ItemId,
        handle: JoinHandle<Outcome<T>>,
    },
    /// The pool shut down before the unit was admitted
    NotAdmitted { item_id: ItemId },
}

impl<T> OutcomeHandle<T> {
    pub fn item_id(&self) -> ItemId {
        match self {
            Self::Spawned { item_id, .. } | Self::NotAdmitted { item_id } => *item_id,
        }
    }

    /// Wait for the unit. A panicking or aborted worker resolves as a failure.
    pub async fn resolve(self) -> Outcome<T> {
        match self {
            Self::NotAdmitted { item_id } => Outcome::Failure(UnitFailure::Cancelled { item_id }),
            Self::Spawned { item_id, handle } => match handle.await {
                Ok(outcome) => outcome,
                Err(e) if e.is_cancelled() => Outcome::Failure(UnitFailure::Cancelled { item_id }),
                Err(e) => Outcome::Failure(UnitFailure::Aborted {
                    item_id,
                    reason: panic_reason(e.into_panic()),
                }),
            },
        }
    }
}

fn panic_reason(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "worker panicked".to_string()
    }
}

/// Fixed-capacity pool with a zero-length admission queue
#[derive(Debug)]
pub struct BoundedDispatcher {
    name: String,
    capacity: usize,
    permits: Arc<Semaphore>,
    shutdown: CancellationToken,
}

impl BoundedDispatcher {
    /// Create a new pool with `capacity` workers (at least one)
    pub fn new(name: impl Into<String>, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let name = name.into();
        info!(pool = %name, capacity, "Processing pool created");

        Self {
            name,
            capacity,
            permits: Arc::new(Semaphore::new(capacity)),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn from_config(config: &ProcessingConfig) -> Self {
        Self::new(config.pool_name.clone(), config.workers)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Workers currently free
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    /// Units currently holding a worker
    pub fn in_flight(&self) -> usize {
        self.capacity.saturating_sub(self.available())
    }

    pub fn is_shut_down(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    /// Token cancelled when the pool shuts down. Units observe it and may
    /// cancel it themselves to wind the pool down.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// Submit every unit in order, returning one handle per unit in the same order.
    ///
    /// Waits for a free worker before each spawn. Units still waiting when the
    /// pool shuts down resolve as [`UnitFailure::Cancelled`] without running.
    pub async fn submit_all<U, T, F, Fut>(
        &self,
        units: impl IntoIterator<Item = U>,
        work: F,
    ) -> Vec<OutcomeHandle<T>>
    where
        U: WorkUnit,
        T: Send + 'static,
        F: Fn(U) -> Fut,
        Fut: Future<Output = Outcome<T>> + Send + 'static,
    {
        let units = units.into_iter();
        let mut handles = Vec::with_capacity(units.size_hint().0);

        for unit in units {
            let item_id = unit.unit_id();

            let permit = tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => None,
                permit = self.permits.clone().acquire_owned() => permit.ok(),
            };

            let Some(permit) = permit else {
                debug!(pool = %self.name, item_id = %item_id, "Pool shut down, unit not admitted");
                handles.push(OutcomeHandle::NotAdmitted { item_id });
                continue;
            };

            let task = work(unit);
            let handle = tokio::spawn(async move {
                let _permit = permit;
                task.await
            });

            handles.push(OutcomeHandle::Spawned { item_id, handle });
        }

        handles
    }

    /// Stop admitting work and signal running units to cancel
    pub fn shutdown(&self) {
        if self.shutdown.is_cancelled() && self.permits.is_closed() {
            return;
        }

        warn!(pool = %self.name, in_flight = self.in_flight(), "Shutting down processing pool");
        self.shutdown.cancel();
        self.permits.close();
    }
}

impl Drop for BoundedDispatcher {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
