//! Configuration loading utilities
//!
//! Environment variable overrides applied on top of file or default configuration.

use super::models::*;
use crate::utils::error::{Result, ServiceError};
use std::env;
use std::str::FromStr;
use tracing::debug;

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| ServiceError::Config(format!("Invalid {}: {}", name, e)))
}

impl ServiceConfig {
    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|name| env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Applying configuration overrides from environment");

        // Server configuration
        if let Some(host) = lookup("APP_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("APP_PORT") {
            self.server.port = parse_var("APP_PORT", &port)?;
        }
        if let Some(workers) = lookup("APP_WORKERS") {
            self.server.workers = Some(parse_var("APP_WORKERS", &workers)?);
        }

        // Database configuration
        if let Some(url) = lookup("DATABASE_URL") {
            self.storage.database.url = url;
        }
        if let Some(enabled) = lookup("DATABASE_ENABLED") {
            self.storage.database.enabled = parse_var("DATABASE_ENABLED", &enabled)?;
        }

        // Processing configuration
        if let Some(workers) = lookup("PROCESSING_WORKERS") {
            self.processing.workers = parse_var("PROCESSING_WORKERS", &workers)?;
        }
        if let Some(latency) = lookup("PROCESSING_LATENCY_MS") {
            self.processing.simulated_latency_ms = parse_var("PROCESSING_LATENCY_MS", &latency)?;
        }

        // Logging configuration
        if let Some(level) = lookup("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(json) = lookup("LOG_JSON") {
            self.logging.json = parse_var("LOG_JSON", &json)?;
        }

        Ok(())
    }
}
