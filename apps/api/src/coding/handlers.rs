use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::coding::coach::{coach_code, CodeCheckSession};
use crate::errors::{ApiJson, AppError};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckCodeRequest {
    pub code: Option<String>,
    pub task_description: Option<String>,
    pub starter_code: Option<String>,
    /// Signed so a negative counter is a validation error, not a parse failure.
    pub checks_used: Option<i64>,
    pub candidate_email: Option<String>,
    pub task_id: Option<String>,
}

impl TryFrom<CheckCodeRequest> for CodeCheckSession {
    type Error = AppError;

    fn try_from(req: CheckCodeRequest) -> Result<Self, Self::Error> {
        let checks_used = u32::try_from(req.checks_used.unwrap_or(0)).map_err(|_| {
            AppError::Validation("checksUsed must be a non-negative integer".to_string())
        })?;

        Ok(Self {
            code: req.code.unwrap_or_default(),
            task_description: req.task_description.unwrap_or_default(),
            starter_code: req.starter_code.unwrap_or_default(),
            checks_used,
            candidate_email: req.candidate_email,
            task_id: req.task_id,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckCodeResponse {
    pub success: bool,
    pub feedback: String,
    pub checks_remaining: u32,
}

/// POST /api/check-code
///
/// Socratic feedback on in-progress code. At most three checks per task.
pub async fn handle_check_code(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CheckCodeRequest>,
) -> Result<Json<CheckCodeResponse>, AppError> {
    let session = CodeCheckSession::try_from(request)?;
    let outcome = coach_code(&state.llm, &state.check_ledger, &session).await?;

    Ok(Json(CheckCodeResponse {
        success: true,
        feedback: outcome.completion.text,
        checks_remaining: outcome.checks_remaining,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> CheckCodeRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_nulls_become_empty_fields() {
        let session = CodeCheckSession::try_from(request(json!({
            "code": null,
            "taskDescription": "Reverse a list",
            "starterCode": null,
            "checksUsed": null
        })))
        .unwrap();

        assert!(session.code.is_empty());
        assert!(session.starter_code.is_empty());
        assert_eq!(session.checks_used, 0);
    }

    #[test]
    fn test_negative_checks_used_rejected() {
        let err = CodeCheckSession::try_from(request(json!({"checksUsed": -1}))).unwrap_err();
        assert!(matches!(err, AppError::Validation(m) if m.contains("checksUsed")));
    }
}
