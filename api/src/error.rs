//! Unified error types for the Mindly API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors
//! - `FeedError`: Feed assembly failures (storage or row mapping)
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Feed assembly errors.
///
/// Both kinds mean the feed is unavailable for this request; the caller gets
/// no entries alongside either of them.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Connection or query execution failure
    #[error("feed unavailable: storage error: {0}")]
    StorageUnavailable(String),

    /// A row's columns could not be mapped to the expected types
    #[error("feed unavailable: could not map row: {0}")]
    ScanFailure(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Feed(#[from] FeedError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::AlreadyExists(msg)) => {
                (StatusCode::CONFLICT, "Already exists", Some(msg.clone()))
            }
            AppError::Domain(DomainError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Domain(DomainError::Internal(msg)) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Feed(e) => {
                tracing::error!(error = %e, "Feed request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Feed unavailable", None)
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_errors_read_as_feed_unavailable() {
        let storage = FeedError::StorageUnavailable("connection refused".to_string());
        let scan = FeedError::ScanFailure("duration_sec is negative".to_string());

        assert!(storage.to_string().starts_with("feed unavailable"));
        assert!(storage.to_string().contains("connection refused"));
        assert!(scan.to_string().starts_with("feed unavailable"));
        assert!(scan.to_string().contains("duration_sec"));
    }

    #[test]
    fn status_codes_by_error_kind() {
        let cases = [
            (
                AppError::Domain(DomainError::AlreadyExists("taken".into())),
                StatusCode::CONFLICT,
            ),
            (
                AppError::Domain(DomainError::Validation("bad".into())),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Domain(DomainError::Database("down".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::Feed(FeedError::StorageUnavailable("down".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::BadRequest("nope".into()),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[tokio::test]
    async fn feed_failure_body_hides_the_cause() {
        let response =
            AppError::Feed(FeedError::StorageUnavailable("connection refused".into()))
                .into_response();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body, serde_json::json!({"error": "Feed unavailable"}));
    }
}
