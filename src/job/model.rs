use crate::run::StructuredRun;
use crate::strategy::Strategy;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a job as reported by the jobs API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Draft,
    Pending,
    Started,
    Paused,
    Success,
    Failure,
    Aborted,
    #[serde(other)]
    Unknown,
}

/// The parts of a persisted job the run editor reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub pipeline_uuid: String,
    pub status: JobStatus,
    #[serde(default)]
    pub strategy_json: Strategy,
    #[serde(default)]
    pub parameters: Vec<StructuredRun>,
}

impl Job {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_draft(&self) -> bool {
        self.status == JobStatus::Draft
    }

    /// A draft whose strategy was never configured. Only such jobs get a
    /// strategy compiled from the pipeline's defaults.
    pub fn needs_initial_strategy(&self) -> bool {
        self.is_draft() && self.strategy_json.is_empty()
    }
}

/// Body of the job update request sent when saving or starting a job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobUpdate {
    pub name: String,
    /// Set when a draft is started; absent for edits of existing jobs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm_draft: Option<bool>,
    pub strategy_json: Strategy,
    pub parameters: Vec<StructuredRun>,
}
