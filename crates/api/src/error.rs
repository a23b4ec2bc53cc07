use articles_core::error::CoreError;
use articles_db::store::StoreError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Message returned for every 5xx; details only go to the log.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for storage
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`] to
/// produce the uniform `{ "error": { "message": ... } }` body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `articles_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure from the article store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::MissingField { .. }
                | CoreError::EmptyUpdate
                | CoreError::Validation(_) => (StatusCode::BAD_REQUEST, core.to_string()),
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
            },

            // --- Storage errors ---
            AppError::Store(err) => {
                tracing::error!(error = %err, "Article store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = json!({
            "error": { "message": message },
        });

        (status, axum::Json(body)).into_response()
    }
}
