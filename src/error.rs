//! HTTP-facing error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::content::ContentError;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AppError::Content(e) => match e {
                ContentError::InvalidId(id) => (
                    StatusCode::BAD_REQUEST,
                    "invalid_identifier",
                    format!("Invalid content identifier: {}", id),
                ),
                ContentError::NotFound(id) => (
                    StatusCode::NOT_FOUND,
                    "not_found",
                    format!("Content not found: {}", id),
                ),
                ContentError::EmptyContent(id) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "empty_content",
                    format!("Content is empty: {}", id),
                ),
                ContentError::Parse { .. } => {
                    tracing::error!("Content parse error: {}", e);
                    (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        "parse_error",
                        e.to_string(),
                    )
                }
                ContentError::Io(e) => {
                    tracing::error!("IO error: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "io_error",
                        "IO error".to_string(),
                    )
                }
            },
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}
