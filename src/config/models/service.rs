//! Top-level service configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Main service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Batch processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
