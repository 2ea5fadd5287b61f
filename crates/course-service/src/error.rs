//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use course_catalog::CatalogError;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Dataset missing, unreadable, or failing schema validation
    #[error("dataset error: {0}")]
    Dataset(String),

    /// Malformed request parameter
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Unexpected failure (e.g. a panicked worker task)
    #[error("internal server error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    code: &'static str,
    message: String,
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::Dataset(_) => "dataset_error",
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Internal(_) => "internal_error",
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Dataset(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match self {
            ApiError::Dataset(msg) | ApiError::BadRequest(msg) => msg.clone(),
            ApiError::Internal(_) => "internal server error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        error!(code, status = %status, error = %self, "api_error");

        let body = Json(ErrorResponse {
            code,
            message: self.public_message(),
        });
        (status, body).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(value: CatalogError) -> Self {
        ApiError::Dataset(value.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(value: tokio::task::JoinError) -> Self {
        ApiError::Internal(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_map_to_dataset_error() {
        let err: ApiError = CatalogError::MissingColumns {
            missing: vec!["price".to_string()],
            available: vec!["course_title".to_string()],
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "dataset_error");
        assert!(err.public_message().contains("price"));
        assert!(err.public_message().contains("course_title"));
    }

    #[test]
    fn test_internal_message_is_hidden() {
        let err = ApiError::Internal("worker exploded at 0xdeadbeef".to_string());
        assert_eq!(err.public_message(), "internal server error");
    }

    #[test]
    fn test_bad_request_status() {
        let err = ApiError::BadRequest("top_k must be a number".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
