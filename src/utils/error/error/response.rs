//! HTTP response handling for errors

use super::types::{FieldErrors, ServiceError};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl ServiceError {
    /// Stable machine-readable code for the error kind
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::Config(_) => "CONFIG_ERROR",
            ServiceError::Database(_) => "DATABASE_ERROR",
            ServiceError::Io(_) => "IO_ERROR",
            ServiceError::Serialization(_) => "SERIALIZATION_ERROR",
            ServiceError::Yaml(_) => "YAML_ERROR",
            ServiceError::Validation(_) => "VALIDATION_ERROR",
            ServiceError::BadRequest(_) => "BAD_REQUEST",
            ServiceError::NotFound(_) => "NOT_FOUND",
            ServiceError::Conflict(_) => "CONFLICT",
            ServiceError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message exposed to clients; storage internals are never leaked
    fn public_message(&self) -> String {
        match self {
            ServiceError::Database(_) => "Database operation failed".to_string(),
            ServiceError::Io(_) | ServiceError::Serialization(_) | ServiceError::Yaml(_) => {
                "An internal error occurred".to_string()
            }
            ServiceError::Validation(_) => "Validation failed".to_string(),
            ServiceError::BadRequest(message)
            | ServiceError::NotFound(message)
            | ServiceError::Conflict(message) => message.clone(),
            _ => self.to_string(),
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) | ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let validation_errors = match self {
            ServiceError::Validation(errors) => Some(errors.clone()),
            _ => None,
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.public_message(),
                timestamp: chrono::Utc::now().to_rfc3339(),
                validation_errors,
            },
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub validation_errors: Option<FieldErrors>,
}
