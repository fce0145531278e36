//! # REST API Errors
//!
//! Error types for the REST API module. Every error renders as a single-key
//! `{"error": "..."}` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::dataset::DatasetError;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// page or per_page is not a positive integer
    #[error("Invalid pagination parameters: {0}")]
    InvalidPagination(String),

    /// No row for the requested key; message names resource and key
    #[error("{0}")]
    NotFound(String),

    /// No route for the request path
    #[error("Resource not found")]
    RouteNotFound,

    /// Table name outside the fixed four
    #[error("{0}")]
    UnknownTable(#[from] DatasetError),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Anything else. The detail is logged, never sent to the client.
    #[error("An unexpected error occurred")]
    Unexpected(String),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            RestError::InvalidPagination(_) => StatusCode::BAD_REQUEST,

            // 404 Not Found
            RestError::NotFound(_) => StatusCode::NOT_FOUND,
            RestError::RouteNotFound => StatusCode::NOT_FOUND,
            RestError::UnknownTable(_) => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            RestError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        RestError::NotFound(message.into())
    }

    pub fn unexpected(detail: impl Into<String>) -> Self {
        RestError::Unexpected(detail.into())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<RestError> for ErrorResponse {
    fn from(err: RestError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        if let RestError::Unexpected(detail) = &self {
            error!(%detail, "request failed");
        }
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RestError::InvalidPagination("test".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RestError::not_found("Movie with ID 999 not found").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(RestError::RouteNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            RestError::unexpected("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unexpected_detail_is_hidden() {
        let body = ErrorResponse::from(RestError::unexpected("index out of bounds at foo.rs:12"));
        assert_eq!(body.error, "An unexpected error occurred");
    }

    #[test]
    fn test_unknown_table_propagation() {
        let err = RestError::from(DatasetError::UnknownTable("users".to_string()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Unknown table: users");
    }

    #[test]
    fn test_error_body_has_single_key() {
        let body = ErrorResponse::from(RestError::not_found("Movie with ID 999 not found"));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"error": "Movie with ID 999 not found"})
        );
    }
}
