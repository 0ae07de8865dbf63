//! Session Progress Tracker — derives completed stages from client-held markers.
//!
//! Each marker is raw text written by a stage-specific UI flow. A marker that
//! fails to parse counts as "stage not complete" and is logged; it is never
//! surfaced as an error.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// One interview phase, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Technical,
    Behavioural,
    Simulation,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Technical, Stage::Behavioural, Stage::Simulation];

    pub fn id(&self) -> &'static str {
        match self {
            Stage::Technical => "technical",
            Stage::Behavioural => "behavioural",
            Stage::Simulation => "simulation",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Stage::Technical => "Technical Assessment",
            Stage::Behavioural => "Behavioural Assessment",
            Stage::Simulation => "Work Simulation",
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            Stage::Technical => "/interview_environment/technical",
            Stage::Behavioural => "/interview_environment/behavioural",
            Stage::Simulation => "/interview_environment/technical2",
        }
    }

    pub fn duration_minutes(&self) -> u32 {
        match self {
            Stage::Technical => 30,
            Stage::Behavioural => 25,
            Stage::Simulation => 35,
        }
    }

    /// Client storage key of the marker that drives this stage.
    pub fn marker_key(&self) -> &'static str {
        match self {
            Stage::Technical => "technical1_completed",
            Stage::Behavioural => "behavioural_progress",
            Stage::Simulation => "technical2_completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Complete,
    Incomplete,
}

/// Raw marker text as stored by the client. `None` = never written.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StageMarkers {
    pub technical1_completed: Option<String>,
    pub technical2_completed: Option<String>,
    pub behavioural_progress: Option<String>,
}

impl StageMarkers {
    fn raw(&self, stage: Stage) -> Option<&str> {
        match stage {
            Stage::Technical => self.technical1_completed.as_deref(),
            Stage::Behavioural => self.behavioural_progress.as_deref(),
            Stage::Simulation => self.technical2_completed.as_deref(),
        }
    }
}

/// A JSON list of completed task ids. Complete iff non-empty.
pub fn parse_task_list(raw: &str) -> Option<StageStatus> {
    match serde_json::from_str::<Value>(raw).ok()? {
        Value::Array(tasks) if !tasks.is_empty() => Some(StageStatus::Complete),
        Value::Array(_) => Some(StageStatus::Incomplete),
        _ => None,
    }
}

/// A JSON map of scenario id → progress. Complete iff any entry has `completed: true`.
pub fn parse_scenario_progress(raw: &str) -> Option<StageStatus> {
    let Value::Object(scenarios) = serde_json::from_str::<Value>(raw).ok()? else {
        return None;
    };
    let any_completed = scenarios
        .values()
        .any(|p| p.get("completed").and_then(Value::as_bool) == Some(true));
    Some(if any_completed {
        StageStatus::Complete
    } else {
        StageStatus::Incomplete
    })
}

pub fn stage_status(stage: Stage, markers: &StageMarkers) -> StageStatus {
    let Some(raw) = markers.raw(stage).filter(|r| !r.trim().is_empty()) else {
        return StageStatus::Incomplete;
    };
    let parsed = match stage {
        Stage::Technical | Stage::Simulation => parse_task_list(raw),
        Stage::Behavioural => parse_scenario_progress(raw),
    };
    parsed.unwrap_or_else(|| {
        warn!(
            "Failed to parse {} marker; treating {} as incomplete",
            stage.marker_key(),
            stage.id()
        );
        StageStatus::Incomplete
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageProgress {
    pub completed: BTreeSet<Stage>,
}

impl StageProgress {
    pub fn from_markers(markers: &StageMarkers) -> Self {
        let completed = Stage::ALL
            .into_iter()
            .filter(|&s| stage_status(s, markers) == StageStatus::Complete)
            .collect();
        Self { completed }
    }

    pub fn is_complete(&self, stage: Stage) -> bool {
        self.completed.contains(&stage)
    }

    pub fn completion_percentage(&self) -> f64 {
        self.completed.len() as f64 / Stage::ALL.len() as f64 * 100.0
    }
}
