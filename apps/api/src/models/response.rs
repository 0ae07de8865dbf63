use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;
use uuid::Uuid;

/// Classification of a stored response, used to partition data for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "interview_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InterviewType {
    Technical1,
    Technical2,
    Behavioural,
}

impl InterviewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewType::Technical1 => "technical1",
            InterviewType::Technical2 => "technical2",
            InterviewType::Behavioural => "behavioural",
        }
    }
}

impl fmt::Display for InterviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterviewType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "technical1" => Ok(InterviewType::Technical1),
            "technical2" => Ok(InterviewType::Technical2),
            "behavioural" => Ok(InterviewType::Behavioural),
            other => Err(format!(
                "unknown interviewType '{other}' (expected technical1, technical2 or behavioural)"
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct InterviewResponseRow {
    pub id: Uuid,
    pub candidate_email: String,
    pub interview_type: InterviewType,
    pub task_title: String,
    pub response: String,
    pub time_spent_seconds: i64,
    pub metadata: Value,
    pub created_at: DateTime<Utc>,
}

impl InterviewResponseRow {
    /// String-valued metadata field, if present.
    pub fn metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata
            .get(key)
            .and_then(Value::as_str)
            .filter(|v| !v.trim().is_empty())
    }
}

/// A validated record ready for insertion.
#[derive(Debug, Clone)]
pub struct NewInterviewResponse {
    pub candidate_email: String,
    pub interview_type: InterviewType,
    pub task_title: String,
    pub response: String,
    pub time_spent_seconds: i64,
    pub metadata: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_interview_type_parses_wire_names() {
        assert_eq!(
            "technical1".parse::<InterviewType>(),
            Ok(InterviewType::Technical1)
        );
        assert_eq!(
            " behavioural ".parse::<InterviewType>(),
            Ok(InterviewType::Behavioural)
        );
        assert!("behavioral".parse::<InterviewType>().is_err());
    }

    #[test]
    fn test_interview_type_serde_matches_as_str() {
        for t in [
            InterviewType::Technical1,
            InterviewType::Technical2,
            InterviewType::Behavioural,
        ] {
            assert_eq!(serde_json::to_value(t).unwrap(), json!(t.as_str()));
        }
    }

    #[test]
    fn test_row_serializes_camel_case() {
        let row = InterviewResponseRow {
            id: Uuid::nil(),
            candidate_email: "a@b.dev".to_string(),
            interview_type: InterviewType::Technical2,
            task_title: "Incident triage".to_string(),
            response: "Roll back first".to_string(),
            time_spent_seconds: 42,
            metadata: json!({"difficulty": "hard"}),
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["candidateEmail"], "a@b.dev");
        assert_eq!(value["interviewType"], "technical2");
        assert_eq!(value["timeSpentSeconds"], 42);
        assert_eq!(row.metadata_str("difficulty"), Some("hard"));
        assert_eq!(row.metadata_str("question"), None);
    }
}
