//! Batch processing configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration of the shared processing pool and the per-item work
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Name of the process-wide pool, used in logs
    #[serde(default = "default_pool_name")]
    pub pool_name: String,
    /// Maximum number of items processed at the same time
    #[serde(default = "default_processing_workers")]
    pub workers: usize,
    /// Simulated work duration per item in milliseconds
    #[serde(default = "default_simulated_latency_ms")]
    pub simulated_latency_ms: u64,
    /// Status written to an item once it has been processed
    #[serde(default = "default_terminal_status")]
    pub terminal_status: String,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            pool_name: default_pool_name(),
            workers: default_processing_workers(),
            simulated_latency_ms: default_simulated_latency_ms(),
            terminal_status: default_terminal_status(),
        }
    }
}

impl ProcessingConfig {
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}
