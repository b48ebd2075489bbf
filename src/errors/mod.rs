//! Error handling module for the Codex backend.
//!
//! Provides centralized error types with mapping to HTTP status codes and response bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Maximum number of characters of underlying error text exposed to clients.
pub const DETAIL_PREFIX_LEN: usize = 50;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const STORE_UNAVAILABLE: &str = "STORE_UNAVAILABLE";
    pub const DATABASE_ERROR: &str = "DATABASE_ERROR";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Store handle was never initialized
    StoreUnavailable,
    /// A store query, insert or delete failed
    Database(String),
    /// Invalid configuration at startup
    Config(String),
    /// Bad request
    BadRequest(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::StoreUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::StoreUnavailable => codes::STORE_UNAVAILABLE,
            AppError::Database(_) => codes::DATABASE_ERROR,
            AppError::Config(_) => codes::CONFIG_ERROR,
            AppError::BadRequest(_) => codes::BAD_REQUEST,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::StoreUnavailable => "Database not available".to_string(),
            AppError::Database(msg) => msg.clone(),
            AppError::Config(msg) => msg.clone(),
            AppError::BadRequest(msg) => msg.clone(),
        }
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
        AppError::Database(format!("Database error: {}", truncate_detail(&err.to_string())))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::Database(format!("Malformed document: {}", truncate_detail(&err.to_string())))
    }
}

/// Keep at most [`DETAIL_PREFIX_LEN`] characters of an error description.
pub fn truncate_detail(text: &str) -> String {
    text.chars().take(DETAIL_PREFIX_LEN).collect()
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(error: &AppError) -> Self {
        Self {
            detail: error.message(),
            code: error.error_code().to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse::new(&self);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_unavailable_maps_to_500() {
        let err = AppError::StoreUnavailable;
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), codes::STORE_UNAVAILABLE);
        assert_eq!(err.message(), "Database not available");
    }

    #[test]
    fn test_truncate_detail() {
        let long = "x".repeat(200);
        assert_eq!(truncate_detail(&long).len(), DETAIL_PREFIX_LEN);
        assert_eq!(truncate_detail("short"), "short");
        // Multi-byte characters are never split
        let emoji = "⚠".repeat(60);
        assert_eq!(truncate_detail(&emoji).chars().count(), DETAIL_PREFIX_LEN);
    }

    #[test]
    fn test_error_response_body() {
        let body = ErrorResponse::new(&AppError::BadRequest("data must be an object".into()));
        assert_eq!(body.code, "BAD_REQUEST");
        assert_eq!(body.detail, "data must be an object");
    }
}
