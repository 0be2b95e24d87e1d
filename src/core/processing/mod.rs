//! Batch processing of stored items
//!
//! Every stored item is run through the [`UnitProcessor`] on one shared,
//! fixed-capacity [`BoundedDispatcher`]. The [`BatchCoordinator`] enumerates
//! the work set, joins every unit and keeps the successes in their original
//! order.

pub mod coordinator;
pub mod dispatcher;
pub mod outcome;
pub mod processor;


pub use coordinator::{BatchCoordinator, BatchSummary, EMPTY_BATCH_MESSAGE};
pub use dispatcher::{BoundedDispatcher, OutcomeHandle, WorkUnit};
pub use outcome::{Outcome, UnitFailure};
pub use processor::UnitProcessor;
