//! Configuration management for the item service
//!
//! This module handles loading, validation, and management of all service configuration.
//! Values come from a YAML file, then environment overrides, then CLI flags.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{Result, ServiceError};
use std::env;
use std::path::Path;
use tracing::{debug, info};

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/service.yaml";

/// Where a loaded configuration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    Defaults,
}

/// Main configuration struct for the item service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::read_file(path.as_ref()).await?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load the file if it exists, otherwise the defaults, then apply environment overrides
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let (config, source) = Self::load_with_source(path, |name| env::var(name).ok()).await?;

        if source == ConfigSource::Defaults {
            info!("Configuration file {:?} not found, using defaults", path);
        }

        config.validate()?;
        Ok(config)
    }

    /// Read the file (or the defaults when it is missing) and apply overrides from `lookup`.
    ///
    /// Nothing is validated here: callers validate once every override is in place.
    pub async fn load_with_source<P, F>(path: P, lookup: F) -> Result<(Self, ConfigSource)>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();

        let (mut config, source) = if tokio::fs::try_exists(path).await.unwrap_or(false) {
            (Self::read_file(path).await?, ConfigSource::File)
        } else {
            (Self::default(), ConfigSource::Defaults)
        };

        config.service.apply_overrides(lookup)?;
        Ok((config, source))
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config = Self::parse_yaml(content)?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    async fn read_file(path: &Path) -> Result<Self> {
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ServiceError::Config(format!("Failed to read config file: {}", e)))?;

        Self::parse_yaml(&content)
    }

    fn parse_yaml(content: &str) -> Result<Self> {
        let service: ServiceConfig = serde_yaml::from_str(content)
            .map_err(|e| ServiceError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(Self { service })
    }

    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }

    /// Apply environment overrides and re-validate
    pub fn with_env_overrides(mut self) -> Result<Self> {
        self.service.apply_env_overrides()?;
        self.validate()?;
        Ok(self)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.service.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.service.storage
    }

    /// Get processing configuration
    pub fn processing(&self) -> &ProcessingConfig {
        &self.service.processing
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.service.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        Validate::validate(&self.service).map_err(ServiceError::Config)?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.service).map_err(|e| {
            ServiceError::Config(format!("Failed to serialize config to YAML: {}", e))
        })
    }
}
