//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod health;
pub mod items;

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

/// Standard API response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Human-readable outcome
    pub message: String,
    /// Response data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// RFC 3339 time the response was produced
    pub timestamp: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Create a successful response
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl ApiResponse<()> {
    /// Create a successful response without data
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Convert the API response to an HTTP 200 response
    pub fn to_http_response(&self) -> HttpResponse {
        HttpResponse::Ok().json(self)
    }
}

/// Register every route of the service
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    health::configure_health_routes(cfg);
    items::configure_item_routes(cfg);
}
