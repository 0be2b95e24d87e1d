//! Configuration data models
//!
//! This module defines all configuration structures used throughout the service.

#![allow(missing_docs)]

pub mod logging;
pub mod processing;
pub mod server;
pub mod service;
pub mod storage;

// Re-export all configuration types
pub use logging::*;
pub use processing::*;
pub use server::*;
pub use service::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

pub fn default_database_url() -> String {
    "sqlite://data/items.db?mode=rwc".to_string()
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_true() -> bool {
    true
}

pub fn default_pool_name() -> String {
    "ItemProcessor".to_string()
}

/// Fixed worker count of the shared processing pool
pub fn default_processing_workers() -> usize {
    10
}

/// Artificial per-item latency standing in for real work
pub fn default_simulated_latency_ms() -> u64 {
    100
}

pub fn default_terminal_status() -> String {
    crate::core::models::PROCESSED_STATUS.to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}
