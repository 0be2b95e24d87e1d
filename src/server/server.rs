//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{Config, ServerConfig};
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{Result, ServiceError};
use actix_web::{
    App, HttpServer as ActixHttpServer, error,
    middleware::DefaultHeaders,
    web,
};
use tracing::info;
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server, opening storage and the processing pool
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let store = crate::storage::connect(config.storage()).await?;
        let state = AppState::new(config.clone(), store);

        Ok(Self::with_state(config.server().clone(), state))
    }

    /// Create a server around prepared state
    pub fn with_state(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let max_body_size = state.config.server().max_body_size;

        let json_config = web::JsonConfig::default()
            .limit(max_body_size)
            .error_handler(|err, _req| {
                let message = match &err {
                    error::JsonPayloadError::ContentType => {
                        "Content type must be application/json".to_string()
                    }
                    _ => format!("Malformed JSON request: {}", err),
                };
                ServiceError::bad_request(message).into()
            });

        let path_config = web::PathConfig::default().error_handler(|err, _req| {
            ServiceError::bad_request(format!("Invalid path parameter: {}", err)).into()
        });

        let query_config = web::QueryConfig::default().error_handler(|err, _req| {
            ServiceError::bad_request(format!("Invalid query parameter: {}", err)).into()
        });

        App::new()
            .app_data(state)
            .app_data(json_config)
            .app_data(path_config)
            .app_data(query_config)
            .wrap(TracingLogger::default())
            .wrap(DefaultHeaders::new().add(("Server", "item-service")))
            .configure(routes::configure_routes)
    }

    /// Start the HTTP server and run until a shutdown signal arrives
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let port = self.config.port;
        let workers = self.config.worker_count();

        info!("Starting HTTP server on {} ({} workers)", bind_addr, workers);

        let dispatcher = self.state.dispatcher.clone();
        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(workers)
            .disable_signals()
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr, port))?
            .run();

        let handle = server.handle();
        let shutdown_dispatcher = dispatcher.clone();
        tokio::spawn(async move {
            Self::shutdown_signal().await;
            shutdown_dispatcher.shutdown();
            handle.stop(true).await;
        });

        info!("HTTP server listening on {}", bind_addr);

        let result = server
            .await
            .map_err(|e| ServiceError::server(format!("Server error: {}", e)));

        dispatcher.shutdown();
        info!("HTTP server stopped");
        result
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
