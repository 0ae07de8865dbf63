// Holistic performance report over a candidate's stored responses.
// All LLM calls go through llm_client::gateway — no direct Anthropic calls here.

pub mod handlers;
pub mod prompts;
pub mod report;
