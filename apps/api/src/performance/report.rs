//! Performance report — partitions a candidate's history, computes stats, and
//! asks the model for a holistic four-part assessment.

use serde::Serialize;

use crate::errors::AppError;
use crate::llm_client::gateway::{Completion, LlmGateway};
use crate::llm_client::prompts::PromptBundle;
use crate::models::response::{InterviewResponseRow, InterviewType};
use crate::performance::prompts::{
    BEHAVIOURAL_SECTION, EMPTY_SECTION, ENTRY_SEPARATOR, REPORT_SYSTEM, REPORT_USER_PREFIX,
    TECHNICAL1_SECTION, TECHNICAL2_SECTION, TRANSCRIPT_TITLE,
};
use crate::responses::store::ResponseStore;

const REPORT_MAX_TOKENS: u32 = 2000;
const REPORT_TEMPERATURE: f32 = 0.7;

/// A candidate's responses split by interview type, each in creation order.
#[derive(Debug, Default)]
pub struct ResponsePartition<'a> {
    pub technical1: Vec<&'a InterviewResponseRow>,
    pub technical2: Vec<&'a InterviewResponseRow>,
    pub behavioural: Vec<&'a InterviewResponseRow>,
}

impl<'a> ResponsePartition<'a> {
    pub fn from_rows(rows: &'a [InterviewResponseRow]) -> Self {
        let mut partition = Self::default();
        for row in rows {
            match row.interview_type {
                InterviewType::Technical1 => partition.technical1.push(row),
                InterviewType::Technical2 => partition.technical2.push(row),
                InterviewType::Behavioural => partition.behavioural.push(row),
            }
        }
        partition
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseStats {
    pub total_responses: usize,
    pub technical1_count: usize,
    pub technical2_count: usize,
    pub behavioural_count: usize,
    pub total_time_spent: i64,
}

impl ResponseStats {
    pub fn compute(rows: &[InterviewResponseRow], partition: &ResponsePartition<'_>) -> Self {
        Self {
            total_responses: rows.len(),
            technical1_count: partition.technical1.len(),
            technical2_count: partition.technical2.len(),
            behavioural_count: partition.behavioural.len(),
            total_time_spent: rows.iter().map(|r| r.time_spent_seconds.max(0)).sum(),
        }
    }
}

fn technical_entry(row: &InterviewResponseRow) -> String {
    format!(
        "\nTask: {}\nDifficulty: {}\nResponse:\n{}\nTime Spent: {}s\n",
        row.task_title,
        row.metadata_str("difficulty").unwrap_or("Unknown"),
        row.response,
        row.time_spent_seconds
    )
}

fn behavioural_entry(row: &InterviewResponseRow) -> String {
    format!(
        "\nScenario: {}\nQuestion Asked: {}\nCandidate Response:\n{}\n",
        row.task_title,
        row.metadata_str("question").unwrap_or("N/A"),
        row.response
    )
}

fn render_section(
    heading: &str,
    rows: &[&InterviewResponseRow],
    render: fn(&InterviewResponseRow) -> String,
) -> String {
    let body = if rows.is_empty() {
        EMPTY_SECTION.to_string()
    } else {
        rows.iter()
            .map(|r| render(r))
            .collect::<Vec<_>>()
            .join(ENTRY_SEPARATOR)
    };
    format!("{heading}\n{body}")
}

/// Renders the full transcript with one marked section per interview type.
pub fn build_transcript(partition: &ResponsePartition<'_>) -> String {
    [
        TRANSCRIPT_TITLE.to_string(),
        render_section(TECHNICAL1_SECTION, &partition.technical1, technical_entry),
        render_section(TECHNICAL2_SECTION, &partition.technical2, technical_entry),
        render_section(BEHAVIOURAL_SECTION, &partition.behavioural, behavioural_entry),
    ]
    .join("\n\n")
}

pub fn build_report_prompt(partition: &ResponsePartition<'_>) -> PromptBundle {
    PromptBundle {
        system: REPORT_SYSTEM.to_string(),
        user: format!("{REPORT_USER_PREFIX}\n\n{}", build_transcript(partition)),
    }
}

#[derive(Debug)]
pub struct PerformanceReport {
    pub completion: Completion,
    pub stats: ResponseStats,
}

/// Loads the candidate's history and synthesizes the report.
/// `NotFound` when the candidate has no stored responses.
pub async fn analyze_performance(
    store: &dyn ResponseStore,
    llm: &LlmGateway,
    candidate_email: &str,
) -> Result<PerformanceReport, AppError> {
    let rows = store.list_by_candidate(candidate_email).await?;
    if rows.is_empty() {
        return Err(AppError::NotFound(
            "No interview responses found for this candidate".to_string(),
        ));
    }

    let partition = ResponsePartition::from_rows(&rows);
    let stats = ResponseStats::compute(&rows, &partition);
    let prompt = build_report_prompt(&partition);

    let completion = llm
        .invoke(&prompt, REPORT_MAX_TOKENS, REPORT_TEMPERATURE)
        .await?;

    Ok(PerformanceReport { completion, stats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::row;
    use serde_json::json;

    #[test]
    fn test_stats_for_mixed_history() {
        let rows = vec![
            row("c@x.io", InterviewType::Technical1, 120, json!({})),
            row("c@x.io", InterviewType::Behavioural, 60, json!({})),
        ];
        let partition = ResponsePartition::from_rows(&rows);

        assert_eq!(
            ResponseStats::compute(&rows, &partition),
            ResponseStats {
                total_responses: 2,
                technical1_count: 1,
                technical2_count: 0,
                behavioural_count: 1,
                total_time_spent: 180,
            }
        );
    }

    #[test]
    fn test_transcript_sections_and_fallbacks() {
        let mut tech = row(
            "c@x.io",
            InterviewType::Technical1,
            95,
            json!({"difficulty": "medium"}),
        );
        tech.task_title = "Fix the off-by-one".to_string();
        tech.response = "Changed <= to <".to_string();
        let mut tech_unknown = row("c@x.io", InterviewType::Technical1, 10, json!({}));
        tech_unknown.task_title = "Pagination".to_string();
        let mut beh = row("c@x.io", InterviewType::Behavioural, 0, json!({}));
        beh.task_title = "Credit for your work".to_string();
        beh.response = "I'd talk to them privately first.".to_string();

        let rows = vec![tech, tech_unknown, beh];
        let transcript = build_transcript(&ResponsePartition::from_rows(&rows));

        assert!(transcript.starts_with(TRANSCRIPT_TITLE));
        let t1 = transcript.find(TECHNICAL1_SECTION).unwrap();
        let t2 = transcript.find(TECHNICAL2_SECTION).unwrap();
        let b = transcript.find(BEHAVIOURAL_SECTION).unwrap();
        assert!(t1 < t2 && t2 < b);

        let t1_body = &transcript[t1..t2];
        assert!(t1_body.contains("Task: Fix the off-by-one\nDifficulty: medium"));
        assert!(t1_body.contains("Time Spent: 95s"));
        assert!(t1_body.contains("Difficulty: Unknown"));
        assert_eq!(t1_body.matches(ENTRY_SEPARATOR).count(), 1);

        assert!(transcript[t2..b].contains(EMPTY_SECTION));

        let b_body = &transcript[b..];
        assert!(b_body.contains("Scenario: Credit for your work"));
        assert!(b_body.contains("Question Asked: N/A"));
        assert!(b_body.contains("Candidate Response:\nI'd talk to them privately first."));
    }

    #[test]
    fn test_report_prompt_requests_four_parts() {
        let rows = vec![row("c@x.io", InterviewType::Technical2, 30, json!({}))];
        let prompt = build_report_prompt(&ResponsePartition::from_rows(&rows));

        for part in [
            "1. Overall assessment",
            "2. Key strengths",
            "3. Areas for improvement",
            "4. Recommended next steps",
        ] {
            assert!(prompt.system.contains(part), "missing {part}");
        }
        assert!(prompt.system.contains("- Professional and supportive\n"));
        assert!(prompt.user.starts_with(REPORT_USER_PREFIX));
        assert!(prompt.user.contains(TECHNICAL2_SECTION));
    }
}
