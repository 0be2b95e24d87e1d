//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{Result, ServiceError};
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| ServiceError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config).await
    }
}

/// Build and run the server until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting item service v{}", env!("CARGO_PKG_VERSION"));

    let server = ServerBuilder::new().with_config(config.clone()).build().await?;

    info!(
        "Server starting at: http://{}:{}",
        config.server().host,
        config.server().port
    );
    info!("API endpoints:");
    info!("   GET    /health");
    info!("   GET    /api/v1/items?page=&size=");
    info!("   GET    /api/v1/items/{{id}}");
    info!("   POST   /api/v1/items");
    info!("   PUT    /api/v1/items/{{id}}");
    info!("   DELETE /api/v1/items/{{id}}");
    info!("   GET    /api/v1/items/process");

    server.start().await
}
