// Behavioural stage: probing questions for workplace scenarios.
// All LLM calls go through llm_client::gateway — no direct Anthropic calls here.

pub mod handlers;
pub mod prompts;
pub mod question;
