//! Error handling for the HTTP API
//!
//! Structured error type and status mapping for the HTTP adapter,
//! ensuring consistent translation of domain outcomes across all
//! endpoints.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use reparto_domain::{DeliveryNumber, DomainError};
use serde_json::json;
use tracing::{error, warn};

/// Result type alias for HTTP handlers
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Structured error type for HTTP operations
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Delivery not found: {0}")]
    DeliveryNotFound(DeliveryNumber),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::DeliveryNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Domain(DomainError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Domain(DomainError::Conflict(_)) => StatusCode::CONFLICT,
            ApiError::Domain(DomainError::Infrastructure(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Error type tag for logging
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::DeliveryNotFound(_) => "delivery_not_found",
            ApiError::InvalidRequest(_) => "invalid_request",
            ApiError::Domain(DomainError::Validation(_)) => "validation_error",
            ApiError::Domain(DomainError::Conflict(_)) => "conflict",
            ApiError::Domain(DomainError::Infrastructure(_)) => "infrastructure_error",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_type = self.error_type();

        // Structured logging: client errors at warn, server errors at error
        match &self {
            ApiError::DeliveryNotFound(number) => {
                warn!(delivery_number = %number, error_type, "Delivery not found");
            }
            ApiError::InvalidRequest(msg) => {
                warn!(error_type, details = %msg, "Invalid request");
            }
            ApiError::Domain(DomainError::Validation(msg)) => {
                warn!(error_type, details = %msg, "Validation failed");
            }
            ApiError::Domain(DomainError::Conflict(msg)) => {
                warn!(error_type, details = %msg, "Conflict");
            }
            ApiError::Domain(DomainError::Infrastructure(msg)) => {
                error!(error_type, details = %msg, "Infrastructure error");
            }
            ApiError::Internal(msg) => {
                error!(error_type, details = %msg, "Internal error");
            }
        }

        let body = Json(json!({
            "error": self.to_string(),
            "error_type": error_type,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let number = DeliveryNumber::new("ORD-1").unwrap();

        assert_eq!(
            ApiError::DeliveryNotFound(number).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::InvalidRequest("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Domain(DomainError::Validation("blank".to_string())).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Domain(DomainError::Conflict("dup".to_string())).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Domain(DomainError::Infrastructure("io".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_type_tags() {
        assert_eq!(
            ApiError::Domain(DomainError::Validation("x".to_string())).error_type(),
            "validation_error"
        );
        assert_eq!(
            ApiError::Internal("x".to_string()).error_type(),
            "internal_error"
        );
    }
}
