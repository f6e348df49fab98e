use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Client errors carry enough detail to act on (the offending field or id);
/// everything internal collapses to a generic 500 body and is logged
/// server-side with the underlying cause.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid document id: {0}")]
    InvalidId(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Asset error: {0}")]
    Asset(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, field) = match &self {
            AppError::MissingField(name) => (
                StatusCode::BAD_REQUEST,
                "MISSING_FIELD",
                format!("Missing required field: {name}"),
                Some(*name),
            ),
            AppError::InvalidId(id) => (
                StatusCode::BAD_REQUEST,
                "INVALID_ID",
                format!("Invalid document id: {id}"),
                None,
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone(), None),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                    None,
                )
            }
            AppError::Asset(msg) => {
                tracing::error!("Asset error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ASSET_ERROR",
                    "Failed to generate PDF".to_string(),
                    None,
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                    None,
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(field) = field {
            error["field"] = json!(field);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
