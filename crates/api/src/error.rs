use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sentra_core::error::CoreError;
use sentra_core::image_store::ImageStoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors, [`ImageStoreError`] for file
/// lifecycle failures, and `sqlx::Error` for storage failures. Implements
/// [`IntoResponse`] to produce consistent JSON error responses: 4xx bodies
/// carry the human-readable message, 5xx bodies are generic with full
/// detail logged server-side only.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `sentra_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An image store failure.
    #[error(transparent)]
    Image(#[from] ImageStoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A malformed request (e.g. an unreadable multipart body).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
                }
                CoreError::Validation(_) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", core.to_string())
                }
                CoreError::DuplicateName(_) => {
                    (StatusCode::BAD_REQUEST, "DUPLICATE_NAME", core.to_string())
                }
                CoreError::DuplicateAddress(_) => (
                    StatusCode::BAD_REQUEST,
                    "DUPLICATE_ADDRESS",
                    core.to_string(),
                ),
                CoreError::InvalidParameter(_) => (
                    StatusCode::BAD_REQUEST,
                    "INVALID_PARAMETER",
                    core.to_string(),
                ),
                CoreError::NoChange => (StatusCode::BAD_REQUEST, "NO_CHANGE", core.to_string()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::Image(err) => match err {
                ImageStoreError::InvalidFileKind(_) => (
                    StatusCode::BAD_REQUEST,
                    "INVALID_FILE_KIND",
                    err.to_string(),
                ),
                // NotFound here means the row and the disk disagreed mid-flight.
                ImageStoreError::NotFound(_) | ImageStoreError::Io(_) => {
                    tracing::error!(error = %err, "Image store error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "A storage error occurred".to_string(),
                )
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
