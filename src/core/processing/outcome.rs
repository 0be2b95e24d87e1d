//! Per-unit outcome of batch processing

use crate::core::models::ItemId;
use thiserror::Error;

/// Result of one work unit, produced exactly once per unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Success(T),
    Failure(UnitFailure),
}

impl<T> Outcome<T> {
    /// Build an outcome from a unit body's result
    pub fn from_result<E: std::fmt::Display>(
        item_id: ItemId,
        result: std::result::Result<T, E>,
    ) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(e) => Self::Failure(UnitFailure::Failed {
                item_id,
                reason: e.to_string(),
            }),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&UnitFailure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }
}

/// Why a work unit did not succeed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitFailure {
    /// The pool was shut down before or while the unit ran
    #[error("processing of item {item_id} was cancelled")]
    Cancelled { item_id: ItemId },

    /// Work, persistence or mapping failed
    #[error("processing of item {item_id} failed: {reason}")]
    Failed { item_id: ItemId, reason: String },

    /// The worker task panicked
    #[error("worker for item {item_id} aborted: {reason}")]
    Aborted { item_id: ItemId, reason: String },
}

impl UnitFailure {
    pub fn item_id(&self) -> ItemId {
        match self {
            Self::Cancelled { item_id }
            | Self::Failed { item_id, .. }
            | Self::Aborted { item_id, .. } => *item_id,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}
