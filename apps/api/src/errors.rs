use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Token budget nearly reached ({used}/{ceiling} tokens)")]
    BudgetExceeded { used: u64, ceiling: u64 },

    #[error("Limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Upstream error: {0}")]
    Upstream(String),
}

/// `Json` whose rejections use the `AppError` envelope instead of axum's plain text.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::BudgetExceeded { used, ceiling } => AppError::BudgetExceeded { used, ceiling },
            LlmError::CheckLimitReached { limit } => AppError::LimitExceeded(format!(
                "Maximum number of code checks ({limit}) reached"
            )),
            other => AppError::Upstream(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone(), None),
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                msg.clone(),
                None,
            ),
            AppError::BudgetExceeded { used, ceiling } => {
                tracing::warn!("Token budget guard tripped: {used}/{ceiling}");
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    "BUDGET_EXCEEDED",
                    "API budget nearly reached. Please contact support.".to_string(),
                    None,
                )
            }
            AppError::LimitExceeded(msg) => (
                StatusCode::BAD_REQUEST,
                "LIMIT_EXCEEDED",
                msg.clone(),
                None,
            ),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                    Some(e.to_string()),
                )
            }
            AppError::Upstream(msg) => {
                tracing::error!("Upstream error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UPSTREAM_ERROR",
                    "An AI processing error occurred".to_string(),
                    Some(msg.clone()),
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message,
        });
        if let Some(details) = details {
            error["details"] = json!(details);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
