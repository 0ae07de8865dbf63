// Shared prompt types and cross-cutting prompt fragments.
// Each feature module that calls the LLM defines its own prompts.rs alongside it.

/// System prompt + user message for a single model turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptBundle {
    pub system: String,
    pub user: String,
}

/// Tone instruction shared by every candidate-facing prompt.
pub const CANDIDATE_FACING_TONE: &str = "\
    Be direct, professional and supportive. \
    Speak to the candidate as a real interviewer would during a live session.";

/// Fills `{name}` placeholders in a single left-to-right pass.
///
/// Inserted values are never rescanned, so candidate text containing
/// `{code}` or similar stays verbatim. Unknown placeholders are left as-is.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
