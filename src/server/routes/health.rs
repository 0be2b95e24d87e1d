//! Health check endpoint

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::storage::StorageHealthStatus;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use tracing::{debug, warn};

/// Configure health check routes
pub fn configure_health_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

/// Health status payload
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub storage: StorageHealthStatus,
    pub pool: PoolStatus,
}

/// Processing pool snapshot
#[derive(Debug, Clone, Serialize)]
pub struct PoolStatus {
    pub name: String,
    pub capacity: usize,
    pub in_flight: usize,
    pub shut_down: bool,
}

/// GET /health
///
/// 200 when the store answers, 503 otherwise.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    let healthy = match state.store().health_check().await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "Storage health check failed");
            false
        }
    };

    let dispatcher = &state.dispatcher;
    let status = HealthStatus {
        status: if healthy { "healthy" } else { "unhealthy" },
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now(),
        storage: StorageHealthStatus {
            backend: state.store().backend(),
            healthy,
        },
        pool: PoolStatus {
            name: dispatcher.name().to_string(),
            capacity: dispatcher.capacity(),
            in_flight: dispatcher.in_flight(),
            shut_down: dispatcher.is_shut_down(),
        },
    };

    if healthy {
        HttpResponse::Ok().json(ApiResponse::success("Service is healthy", status))
    } else {
        HttpResponse::ServiceUnavailable().json(ApiResponse {
            success: false,
            message: "Service is unhealthy".to_string(),
            data: Some(status),
            timestamp: chrono::Utc::now().to_rfc3339(),
        })
    }
}
