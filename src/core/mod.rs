//! Core functionality for the item service
//!
//! Domain models, request validation and the batch processing pipeline.

pub mod models;
pub mod processing;
pub mod validation;
