use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::{ApiJson, AppError};
use crate::models::response::{InterviewResponseRow, InterviewType, NewInterviewResponse};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppendResponseRequest {
    pub candidate_email: Option<String>,
    pub interview_type: Option<String>,
    pub task_title: Option<String>,
    pub response: Option<String>,
    pub time_spent_seconds: Option<u32>,
    pub metadata: Option<Map<String, Value>>,
}

impl AppendResponseRequest {
    /// Checks the required fields and normalises the optional ones.
    pub fn into_record(self) -> Result<NewInterviewResponse, AppError> {
        let candidate_email = self
            .candidate_email
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_string();
        if candidate_email.is_empty() {
            return Err(AppError::Validation(
                "candidateEmail is required".to_string(),
            ));
        }
        let interview_type = self
            .interview_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Validation("interviewType is required".to_string()))?
            .parse::<InterviewType>()
            .map_err(AppError::Validation)?;

        Ok(NewInterviewResponse {
            candidate_email,
            interview_type,
            task_title: self.task_title.unwrap_or_default(),
            response: self.response.unwrap_or_default(),
            time_spent_seconds: i64::from(self.time_spent_seconds.unwrap_or(0)),
            metadata: self.metadata.unwrap_or_default(),
        })
    }
}

/// POST /api/responses
///
/// Appends one candidate response. Records are never updated afterwards.
pub async fn handle_append_response(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AppendResponseRequest>,
) -> Result<(StatusCode, Json<InterviewResponseRow>), AppError> {
    let record = request.into_record()?;
    let row = state.store.append(record).await?;
    Ok((StatusCode::CREATED, Json(row)))
}
