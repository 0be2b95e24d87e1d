//! Tracing subscriber initialization
//!
//! The subscriber is configured from [`LoggingConfig`]; `RUST_LOG` takes
//! precedence over the configured level when it is set.

use crate::config::LoggingConfig;
use crate::utils::error::{Result, ServiceError};
use tracing_subscriber::EnvFilter;

/// Build the env filter for the given configuration
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(format!(
            "{},sqlx=warn,sea_orm_migration=warn",
            config.level
        ))
        .map_err(|e| ServiceError::config(format!("Invalid log level '{}': {}", config.level, e))),
    }
}

/// Install the global tracing subscriber
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;

    let result = if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_current_span(true)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(true)
            .try_init()
    };

    result.map_err(|e| ServiceError::config(format!("Failed to initialize logging: {}", e)))
}
