use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;

/// Default node key for pipeline-level parameters.
pub const DEFAULT_RESERVED_KEY: &str = "pipeline_parameters";

/// Default soft limit on the number of generated runs.
pub const DEFAULT_MAX_RUNS: usize = 10_000;

/// Engine settings, usually loaded from a JSON file next to the server config.
///
/// Missing fields fall back to their defaults, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Strategy node key that holds pipeline-level parameters.
    pub pipeline_parameters_reserved_key: String,
    /// Soft cap on the run count of one strategy. `0` disables the cap.
    pub max_runs: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pipeline_parameters_reserved_key: DEFAULT_RESERVED_KEY.to_string(),
            max_runs: DEFAULT_MAX_RUNS,
        }
    }
}

impl EngineConfig {
    /// Load the config from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::JsonParseError(e.to_string()))
    }

    pub fn with_reserved_key(mut self, key: &str) -> Self {
        self.pipeline_parameters_reserved_key = key.to_string();
        self
    }

    pub fn with_max_runs(mut self, max_runs: usize) -> Self {
        self.max_runs = max_runs;
        self
    }

    /// The run limit as an `Option`, `None` meaning unlimited.
    pub fn run_limit(&self) -> Option<usize> {
        (self.max_runs > 0).then_some(self.max_runs)
    }
}
