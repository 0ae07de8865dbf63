use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::behavioural::question::{generate_question, BehaviouralScenario};
use crate::errors::{ApiJson, AppError};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BehaviouralQuestionRequest {
    pub scenario: Option<BehaviouralScenario>,
    /// e.g. "Senior Software Engineer"
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetedTokenUsage {
    pub input: u32,
    pub output: u32,
    pub total: u64,
    pub cumulative_total: u64,
    pub estimated_cost: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviouralQuestionResponse {
    pub success: bool,
    pub response: String,
    pub token_usage: BudgetedTokenUsage,
}

/// POST /api/behavioral-ai
///
/// Returns one probing question for the given scenario, or 429 once the
/// process-wide token budget guard has tripped.
pub async fn handle_behavioural_question(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<BehaviouralQuestionRequest>,
) -> Result<Json<BehaviouralQuestionResponse>, AppError> {
    let completion =
        generate_question(&state.llm, request.scenario.as_ref(), request.role.as_deref()).await?;

    let budget = state.llm.budget();
    let cumulative_total = budget.used();
    info!(
        "Behavioural question generated for scenario {:?} ({} tokens, {} cumulative, approx {})",
        request.scenario.as_ref().and_then(|s| s.id.as_ref()),
        completion.total_tokens(),
        cumulative_total,
        budget.estimated_cost()
    );

    Ok(Json(BehaviouralQuestionResponse {
        success: true,
        token_usage: BudgetedTokenUsage {
            input: completion.input_tokens,
            output: completion.output_tokens,
            total: completion.total_tokens(),
            cumulative_total,
            estimated_cost: budget.estimated_cost(),
        },
        response: completion.text,
    }))
}
