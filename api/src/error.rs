//! Unified error types for the feed service
//!
//! This module defines error types for each layer:
//! - `FeedError`: Activity records that cannot become feed items
//! - `RenderError`: Markup rendering failures (always recovered locally)
//! - `LocaleError`: Loading a message catalog
//! - `AppError`: Application layer errors (wraps the above for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Conversion errors. Any of these fails the whole batch.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("unknown action type: {0}")]
    UnknownActionType(i64),

    #[error("malformed action {id}: {reason}")]
    MalformedAction { id: i64, reason: String },
}

/// Markup rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("markup too large: {size} bytes (limit {limit})")]
    TooLarge { size: usize, limit: usize },
}

/// Message catalog errors
#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("failed to read locale file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse locale file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
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
            AppError::Feed(e) => {
                tracing::warn!("Feed conversion failed: {}", e);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Unprocessable activity",
                    Some(e.to_string()),
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
