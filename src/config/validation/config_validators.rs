//! Configuration validators
//!
//! Validation implementations for every section of [`ServiceConfig`].

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating service configuration");

        self.server.validate()?;
        self.storage.validate()?;
        self.processing.validate()?;
        self.logging.validate()?;

        debug!("Service configuration validation completed");
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port cannot be 0".to_string());
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err("Server workers must be greater than 0".to_string());
            }
        }

        if self.max_body_size == 0 {
            return Err("Max body size cannot be 0".to_string());
        }

        Ok(())
    }
}

impl Validate for StorageConfig {
    fn validate(&self) -> Result<(), String> {
        self.database.validate()
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }

        if self.url.is_empty() {
            return Err("Database URL is required".to_string());
        }

        if !(self.url.starts_with("sqlite:")
            || self.url.starts_with("postgres://")
            || self.url.starts_with("postgresql://"))
        {
            return Err(format!("Unsupported database URL scheme: {}", self.url));
        }

        if self.max_connections == 0 {
            return Err("Database max connections must be greater than 0".to_string());
        }

        if self.connection_timeout == 0 {
            return Err("Database connection timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for ProcessingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.pool_name.trim().is_empty() {
            return Err("Processing pool name cannot be empty".to_string());
        }

        if self.workers == 0 {
            return Err("Processing workers must be greater than 0".to_string());
        }

        if self.terminal_status.trim().is_empty() {
            return Err("Terminal status cannot be empty".to_string());
        }

        if self.terminal_status.chars().count() > crate::core::validation::MAX_FIELD_LENGTH {
            return Err(format!(
                "Terminal status must contain at most {} characters",
                crate::core::validation::MAX_FIELD_LENGTH
            ));
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }

        tracing_subscriber::EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| format!("Invalid log level '{}': {}", self.level, e))
    }
}
