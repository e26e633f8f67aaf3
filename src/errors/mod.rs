//! Error handling module for the Vimarsh backend.
//!
//! Provides centralized error types with mapping to HTTP status codes and response envelopes.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INVALID_COLLECTION: &str = "INVALID_COLLECTION";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
    pub const MALFORMED_RECORD: &str = "MALFORMED_RECORD";
    pub const NOT_CONFIGURED: &str = "NOT_CONFIGURED";
    pub const DATABASE_ERROR: &str = "DATABASE_ERROR";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Session required
    Unauthorized(String),
    /// Valid request, no matching record
    NotFound(String),
    /// Collection name outside the known set
    InvalidCollection(String),
    /// Validation error
    Validation(String),
    /// Content store unreachable or answered with garbage
    Transport(String),
    /// A record failed field validation at the boundary
    MalformedRecord(String),
    /// An optional backing service has no configuration
    NotConfigured(String),
    /// Database error
    Database(String),
    /// Internal server error
    Internal(String),
    /// Bad request
    BadRequest(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidCollection(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Transport(_) => StatusCode::BAD_GATEWAY,
            AppError::MalformedRecord(_) => StatusCode::BAD_GATEWAY,
            AppError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Unauthorized(_) => codes::UNAUTHORIZED,
            AppError::NotFound(_) => codes::NOT_FOUND,
            AppError::InvalidCollection(_) => codes::INVALID_COLLECTION,
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::Transport(_) => codes::TRANSPORT_ERROR,
            AppError::MalformedRecord(_) => codes::MALFORMED_RECORD,
            AppError::NotConfigured(_) => codes::NOT_CONFIGURED,
            AppError::Database(_) => codes::DATABASE_ERROR,
            AppError::Internal(_) => codes::INTERNAL_ERROR,
            AppError::BadRequest(_) => codes::BAD_REQUEST,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::Unauthorized(msg)
            | AppError::NotFound(msg)
            | AppError::InvalidCollection(msg)
            | AppError::Validation(msg)
            | AppError::Transport(msg)
            | AppError::MalformedRecord(msg)
            | AppError::NotConfigured(msg)
            | AppError::Database(msg)
            | AppError::Internal(msg)
            | AppError::BadRequest(msg) => msg.clone(),
        }
    }

    /// True for the deliberate "no such record" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        AppError::Database(format!("Database error: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Transport error: {:?}", err);
        AppError::Transport(format!("Transport error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::warn!("JSON error: {}", err);
        AppError::BadRequest(format!("JSON error: {}", err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

/// Error details in the response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

/// Error response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetails,
}

impl ErrorResponse {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorDetails {
                code: code.to_string(),
                message: message.into(),
            },
        }
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        ErrorResponse::new(error.error_code(), error.message())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse::from(&self);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_distinct_from_transport() {
        let missing = AppError::NotFound("Project missing-id not found".to_string());
        let down = AppError::Transport("connection refused".to_string());

        assert!(missing.is_not_found());
        assert!(!down.is_not_found());
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(down.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_error_envelope() {
        let err = AppError::NotConfigured("Application table is not configured".to_string());
        let body = serde_json::to_value(ErrorResponse::from(&err)).unwrap();

        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "NOT_CONFIGURED");
        assert_eq!(
            body["error"]["message"],
            "Application table is not configured"
        );
    }

    #[test]
    fn test_display() {
        let err = AppError::InvalidCollection("Unknown collection: widgets".to_string());
        assert_eq!(
            err.to_string(),
            "INVALID_COLLECTION: Unknown collection: widgets"
        );
    }
}
