//! Behavioural question generation — one probing question per workplace scenario.

use serde::Deserialize;
use serde_json::Value;

use crate::behavioural::prompts::{QUESTION_SYSTEM_TEMPLATE, QUESTION_USER_MESSAGE};
use crate::errors::AppError;
use crate::llm_client::gateway::{Completion, LlmGateway};
use crate::llm_client::prompts::{fill_template, PromptBundle, CANDIDATE_FACING_TONE};

const QUESTION_MAX_TOKENS: u32 = 100;
const QUESTION_TEMPERATURE: f32 = 0.8;

/// A workplace scenario shown to the candidate. Never persisted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BehaviouralScenario {
    /// Opaque to the server; clients send numbers or strings.
    pub id: Option<Value>,
    pub title: Option<String>,
    pub situation: Option<String>,
}

impl BehaviouralScenario {
    fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default().trim()
    }

    fn situation(&self) -> &str {
        self.situation.as_deref().unwrap_or_default().trim()
    }
}

/// Builds the question prompt. Both the scenario and the role are required.
pub fn build_question_prompt(
    scenario: Option<&BehaviouralScenario>,
    role: Option<&str>,
) -> Result<PromptBundle, AppError> {
    let scenario = scenario
        .filter(|s| !s.title().is_empty() || !s.situation().is_empty())
        .ok_or_else(|| AppError::Validation("scenario is required".to_string()))?;
    let role = role
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .ok_or_else(|| AppError::Validation("role is required".to_string()))?;

    let system = fill_template(
        QUESTION_SYSTEM_TEMPLATE,
        &[
            ("role", role),
            ("tone", CANDIDATE_FACING_TONE),
            ("scenario_title", scenario.title()),
            ("scenario_situation", scenario.situation()),
        ],
    );

    Ok(PromptBundle {
        system,
        user: QUESTION_USER_MESSAGE.to_string(),
    })
}

/// Asks the model for a probing question. Guarded by the token budget.
pub async fn generate_question(
    llm: &LlmGateway,
    scenario: Option<&BehaviouralScenario>,
    role: Option<&str>,
) -> Result<Completion, AppError> {
    let prompt = build_question_prompt(scenario, role)?;
    Ok(llm
        .invoke_within_budget(&prompt, QUESTION_MAX_TOKENS, QUESTION_TEMPERATURE)
        .await?)
}
