use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use trivia_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the wire error shape
/// `{ "success": false, "error": <status>, "message": <phrase> }`.
///
/// Variant payloads carry internal detail for logging; the response body
/// always uses the fixed message for the status so nothing leaks.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A domain-level error from `trivia_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with an internal, human-readable reason.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A missing resource or empty resolved page.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

/// Canonical reason phrase carried in every error body for a status.
pub fn canonical_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "Bad Request",
        StatusCode::NOT_FOUND => "Resource Not Found",
        StatusCode::METHOD_NOT_ALLOWED => "Method Not Allowed",
        StatusCode::UNPROCESSABLE_ENTITY => "Unprocessable Entity",
        _ => "Internal Server Error",
    }
}

/// Build the JSON error response for a status code.
pub fn error_response(status: StatusCode) -> Response {
    let body = json!({
        "success": false,
        "error": status.as_u16(),
        "message": canonical_message(status),
    });
    (status, axum::Json(body)).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity = %entity, id = %id, "Entity not found");
                    StatusCode::NOT_FOUND
                }
                CoreError::Validation(msg) => {
                    tracing::debug!(reason = %msg, "Request validation failed");
                    StatusCode::BAD_REQUEST
                }
                CoreError::Unprocessable(msg) => {
                    tracing::debug!(reason = %msg, "Unprocessable request");
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            ApiError::Database(err) => classify_sqlx_error(err),
            ApiError::BadRequest(msg) => {
                tracing::debug!(reason = %msg, "Bad request");
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(msg) => {
                tracing::debug!(reason = %msg, "Resource not found");
                StatusCode::NOT_FOUND
            }
        };

        error_response(status)
    }
}

/// Classify a sqlx error into an HTTP status.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 and is logged; the body stays sanitized.
fn classify_sqlx_error(err: &sqlx::Error) -> StatusCode {
    match err {
        sqlx::Error::RowNotFound => StatusCode::NOT_FOUND,
        other => {
            tracing::error!(error = %other, "Database error");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
