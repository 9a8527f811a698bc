use axum::{
    extract::{multipart::MultipartError, rejection::PathRejection, FromRequestParts},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant renders as `{"detail": "<message>"}`; the message is the
/// error's own text so clients see what went wrong in the pipeline.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid multipart body: {}", .0.body_text())]
    Multipart(#[from] MultipartError),

    #[error("Invalid path parameter: {}", .0.body_text())]
    Path(#[from] PathRejection),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("File storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Multipart(err) => err.status(),
            AppError::Path(err) => err.status(),
            AppError::Database(_) | AppError::Io(_) | AppError::Llm(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {self:?}");
        }

        let body = Json(json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}

/// `axum::extract::Path` whose rejection renders as `{"detail": ...}`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
