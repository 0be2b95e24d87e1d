//! Error types for the item service
//!
//! This module defines the error enum, its HTTP mapping and constructor helpers.

#![allow(missing_docs)]

mod helpers;
mod response;
mod types;


pub use response::{ErrorDetail, ErrorResponse};
pub use types::{FieldErrors, Result, ServiceError};
