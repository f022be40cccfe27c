//! Error types for chirp-rs.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Application result type.
pub type AppResult<T> = Result<T, AppError>;

/// Application error type.
///
/// Every error is serialized to the wire as
/// `{"result": false, "error_type": ..., "error_message": ...}`.
#[derive(Debug, Error)]
pub enum AppError {
    // === Client Errors ===
    /// API token did not match any user.
    #[error("User is not found")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),

    /// Acting user is not permitted to perform the operation
    /// (e.g. deleting someone else's tweet).
    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    // === Server Errors ===
    #[error("Database error: {0}")]
    Database(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            // 4xx Client Errors
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,

            // 5xx Server Errors
            Self::Database(_) | Self::Storage(_) | Self::Config(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Returns the `error_type` field for API responses.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Unauthorized => "AuthenticationError",
            Self::NotFound(_) => "NotFound",
            Self::Forbidden(_) => "UserError",
            Self::BadRequest(_) => "BadRequest",
            Self::Conflict(_) => "Conflict",
            Self::Database(_) => "DatabaseError",
            Self::Storage(_) => "StorageError",
            Self::Config(_) => "ConfigError",
            Self::Internal(_) => "InternalError",
        }
    }

    /// Returns whether this error should be logged at error level.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_type = self.error_type();

        // Log server errors
        if self.is_server_error() {
            tracing::error!(error = %self, error_type, "Server error occurred");
        } else {
            tracing::debug!(error = %self, error_type, "Client error occurred");
        }

        let body = Json(json!({
            "result": false,
            "error_type": error_type,
            "error_message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

// === From implementations ===

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}
