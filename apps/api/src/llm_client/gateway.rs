//! LLM Gateway — budget and limit enforcement around a `ChatModel`.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::llm_client::budget::TokenBudget;
use crate::llm_client::prompts::PromptBundle;
use crate::llm_client::{ChatModel, CompletionRequest, LlmError};

/// Coaching interactions allowed per task.
pub const MAX_CODE_CHECKS: u32 = 3;

/// Normalised model reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl Completion {
    pub fn total_tokens(&self) -> u64 {
        u64::from(self.input_tokens) + u64::from(self.output_tokens)
    }
}

/// Per-call token usage echoed back to clients.
#[derive(Debug, Clone, Serialize)]
pub struct TokenUsage {
    pub input: u32,
    pub output: u32,
    pub total: u64,
}

impl From<&Completion> for TokenUsage {
    fn from(c: &Completion) -> Self {
        Self {
            input: c.input_tokens,
            output: c.output_tokens,
            total: c.total_tokens(),
        }
    }
}

#[derive(Clone)]
pub struct LlmGateway {
    model: Arc<dyn ChatModel>,
    budget: Arc<TokenBudget>,
}

impl LlmGateway {
    pub fn new(model: Arc<dyn ChatModel>, budget: Arc<TokenBudget>) -> Self {
        Self { model, budget }
    }

    pub fn budget(&self) -> &TokenBudget {
        &self.budget
    }

    /// Sends one prompt to the model. Usage is added to the budget as soon as
    /// the model answers, even if the reply carries no text.
    pub async fn invoke(
        &self,
        prompt: &PromptBundle,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<Completion, LlmError> {
        let response = self
            .model
            .complete(CompletionRequest {
                system: &prompt.system,
                user: &prompt.user,
                max_tokens,
                temperature,
            })
            .await?;

        let cumulative = self.budget.record(response.usage.total());
        info!(
            "LLM tokens used: {} (cumulative {} / {})",
            response.usage.total(),
            cumulative,
            self.budget.ceiling()
        );

        let text = response
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(LlmError::EmptyContent)?;

        Ok(Completion {
            text: text.to_string(),
            input_tokens: response.usage.input_tokens,
            output_tokens: response.usage.output_tokens,
        })
    }

    /// Like `invoke`, but refuses to call the model once the budget guard has tripped.
    pub async fn invoke_within_budget(
        &self,
        prompt: &PromptBundle,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<Completion, LlmError> {
        self.budget.ensure_headroom()?;
        self.invoke(prompt, max_tokens, temperature).await
    }

    pub fn ensure_check_available(&self, checks_used: u32) -> Result<(), LlmError> {
        if checks_used >= MAX_CODE_CHECKS {
            return Err(LlmError::CheckLimitReached {
                limit: MAX_CODE_CHECKS,
            });
        }
        Ok(())
    }
}
