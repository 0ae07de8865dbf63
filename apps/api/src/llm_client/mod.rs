/// LLM Client — the single point of entry for all Claude API calls in Intelliviews.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// Feature modules build a `PromptBundle` and hand it to `LlmGateway`, which
/// owns budget and check-limit enforcement.
///
/// Model: claude-sonnet-4-5 (hardcoded — do not make configurable to prevent drift)
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod budget;
pub mod gateway;
pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all LLM calls in Intelliviews.
pub const MODEL: &str = "claude-sonnet-4-5";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned no text content")]
    EmptyContent,

    #[error("Token budget nearly reached ({used}/{ceiling})")]
    BudgetExceeded { used: u64, ceiling: u64 },

    #[error("Check limit of {limit} reached")]
    CheckLimitReached { limit: u32 },
}

/// Everything the model needs for one turn.
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    pub system: &'a str,
    pub user: &'a str,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl Usage {
    pub fn total(&self) -> u64 {
        u64::from(self.input_tokens) + u64::from(self.output_tokens)
    }
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// A hosted chat-completion backend. `AnthropicClient` in production;
/// tests substitute a scripted model.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<LlmResponse, LlmError>;
}

/// Wraps the Anthropic Messages API. One attempt per call: failures surface
/// immediately to the caller.
#[derive(Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
}

impl AnthropicClient {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
        })
    }
}

#[async_trait]
impl ChatModel for AnthropicClient {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<LlmResponse, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            system: request.system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: request.user,
            }],
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = parse_api_error(&body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        debug!(
            "LLM call succeeded: input_tokens={}, output_tokens={}",
            llm_response.usage.input_tokens, llm_response.usage.output_tokens
        );

        Ok(llm_response)
    }
}

/// Pulls `error.message` out of an Anthropic error body, falling back to the raw body.
fn parse_api_error(body: &str) -> String {
    serde_json::from_str::<AnthropicError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(block_type: &str, text: Option<&str>) -> ContentBlock {
        ContentBlock {
            block_type: block_type.to_string(),
            text: text.map(str::to_string),
        }
    }

    #[test]
    fn test_text_takes_first_text_block() {
        let response = LlmResponse {
            content: vec![
                block("tool_use", None),
                block("text", Some("first")),
                block("text", Some("second")),
            ],
            usage: Usage {
                input_tokens: 1,
                output_tokens: 1,
            },
        };
        assert_eq!(response.text(), Some("first"));
    }

    #[test]
    fn test_text_none_without_text_block() {
        let response = LlmResponse {
            content: vec![block("tool_use", None)],
            usage: Usage {
                input_tokens: 1,
                output_tokens: 1,
            },
        };
        assert!(response.text().is_none());
    }

    #[test]
    fn test_parse_api_error_extracts_message() {
        let body = r#"{"type":"error","error":{"type":"authentication_error","message":"invalid x-api-key"}}"#;
        assert_eq!(parse_api_error(body), "invalid x-api-key");
    }

    #[test]
    fn test_parse_api_error_falls_back_to_body() {
        assert_eq!(parse_api_error("bad gateway"), "bad gateway");
    }

    #[test]
    fn test_response_deserializes_from_api_shape() {
        let raw = r#"{
            "id": "msg_01",
            "type": "message",
            "content": [{"type": "text", "text": "Have you considered empty input?"}],
            "usage": {"input_tokens": 120, "output_tokens": 14}
        }"#;
        let response: LlmResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text(), Some("Have you considered empty input?"));
        assert_eq!(response.usage.total(), 134);
    }
}
