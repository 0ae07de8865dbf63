use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{ApiJson, AppError};
use crate::llm_client::gateway::TokenUsage;
use crate::performance::report::{analyze_performance, ResponseStats};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzePerformanceRequest {
    pub candidate_email: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzePerformanceResponse {
    pub success: bool,
    pub feedback: String,
    pub stats: ResponseStats,
    pub token_usage: TokenUsage,
}

/// POST /api/analyze-performance
///
/// 404 when nothing has been stored for the candidate; never an empty report.
pub async fn handle_analyze_performance(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AnalyzePerformanceRequest>,
) -> Result<Json<AnalyzePerformanceResponse>, AppError> {
    let email = request.candidate_email.as_deref().unwrap_or_default().trim();
    if email.is_empty() {
        return Err(AppError::Validation(
            "Candidate email is required".to_string(),
        ));
    }

    let report = analyze_performance(state.store.as_ref(), &state.llm, email).await?;
    info!(
        "Performance analysis generated for {email} ({} responses, {} tokens)",
        report.stats.total_responses,
        report.completion.total_tokens()
    );

    Ok(Json(AnalyzePerformanceResponse {
        success: true,
        token_usage: TokenUsage::from(&report.completion),
        feedback: report.completion.text,
        stats: report.stats,
    }))
}
