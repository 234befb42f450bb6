//! Unified error types for the feedbot API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors
//! - `StoreError`, `FeedError`, `NotifyError`, `SecretError`: adapter errors
//! - `ConfigError`: startup configuration errors
//! - `AppError`: Application layer errors (wraps the others for HTTP responses)

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
    #[error("Invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("Feed item has no published timestamp: {0}")]
    MissingTimestamp(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn invalid_timestamp(value: &str, err: chrono::ParseError) -> Self {
        DomainError::InvalidTimestamp {
            value: value.to_string(),
            reason: err.to_string(),
        }
    }
}

/// Blob store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Store error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Object is not valid UTF-8: {0}")]
    Encoding(String),
}

/// Feed fetching and parsing errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Feed source answered {0}")]
    Status(u16),

    #[error("Malformed feed: {0}")]
    Malformed(#[from] rss::Error),
}

/// Notification sink errors
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Notification rejected: {status} - {message}")]
    Rejected { status: u16, message: String },
}

/// Secret resolution errors
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("Secret not configured: {0}")]
    Missing(String),
}

/// Configuration errors raised at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is invalid: {reason}")]
    Invalid { name: String, reason: String },

    #[error("{0} must be set")]
    Missing(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),

    #[error("Secret error: {0}")]
    Secret(#[from] SecretError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Missing argument for: {0}")]
    MissingArgument(String),

    #[error("Unknown feed: {0}")]
    UnknownFeed(String),
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
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::Secret(e) => {
                tracing::error!("Secret error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error",
                    None,
                )
            }
            AppError::Notify(e) => {
                tracing::error!("Notification error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Notification error", None)
            }
            // Everything else came out of the fetch pipeline; the caller
            // only needs to know the invocation failed.
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Command failed",
                Some(self.to_string()),
            ),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
