//! Services module
//!
//! This module contains business logic and service implementations

pub mod items;

pub use items::{DEFAULT_PAGE_SIZE, ItemService, MAX_PAGE_SIZE};
