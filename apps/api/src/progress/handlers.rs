use axum::Json;
use serde::Serialize;

use crate::errors::ApiJson;
use crate::progress::tracker::{Stage, StageMarkers, StageProgress};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageView {
    pub id: &'static str,
    pub title: &'static str,
    pub href: &'static str,
    pub duration_minutes: u32,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponse {
    pub completed_stages: Vec<Stage>,
    pub completed_count: usize,
    pub total_stages: usize,
    pub completion_percentage: f64,
    pub stages: Vec<StageView>,
}

impl From<&StageProgress> for ProgressResponse {
    fn from(progress: &StageProgress) -> Self {
        Self {
            completed_stages: progress.completed.iter().copied().collect(),
            completed_count: progress.completed.len(),
            total_stages: Stage::ALL.len(),
            completion_percentage: progress.completion_percentage(),
            stages: Stage::ALL
                .into_iter()
                .map(|stage| StageView {
                    id: stage.id(),
                    title: stage.title(),
                    href: stage.href(),
                    duration_minutes: stage.duration_minutes(),
                    completed: progress.is_complete(stage),
                })
                .collect(),
        }
    }
}

/// POST /api/progress
///
/// Body carries the raw client markers (`technical1_completed`,
/// `technical2_completed`, `behavioural_progress`). Malformed markers never fail the request.
pub async fn handle_progress(
    ApiJson(markers): ApiJson<StageMarkers>,
) -> Json<ProgressResponse> {
    let progress = StageProgress::from_markers(&markers);
    Json(ProgressResponse::from(&progress))
}
