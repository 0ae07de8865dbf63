use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::error;

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "intelliviews-api"
    }))
}

#[derive(Debug, Serialize)]
pub struct StoreDiagnostic {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /api/test-db
/// 200 when the response store answers, 500 with the store error otherwise.
/// Both outcomes use the same flat diagnostic shape rather than the error envelope.
pub async fn test_db_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<StoreDiagnostic>) {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(StoreDiagnostic {
                success: true,
                message: "Database connected successfully!",
                database: Some(state.config.database_host().to_string()),
                error: None,
            }),
        ),
        Err(err) => {
            error!("Database connection test failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StoreDiagnostic {
                    success: false,
                    message: "Database connection failed",
                    database: None,
                    error: Some(err.to_string()),
                }),
            )
        }
    }
}
