//! Utility modules for the item service
//!
//! - **error**: Error type and its HTTP representation
//! - **logging**: Tracing subscriber setup

pub mod error; // Error handling
pub mod logging; // Logging & monitoring

pub use error::{Result, ServiceError};
