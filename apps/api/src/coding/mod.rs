// Technical stage: live code coaching, capped per task.
// All LLM calls go through llm_client::gateway — no direct Anthropic calls here.

pub mod coach;
pub mod handlers;
pub mod prompts;
