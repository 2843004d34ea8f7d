use serde::Serialize;

/// Label used for the single run of a strategy without parameters.
pub const PARAMETERLESS_RUN: &str = "Parameterless run";

/// A generated run as shown in a selectable table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunRow {
    /// Position of the run in the generated sequence.
    pub index: usize,
    /// Compact specification, e.g. `lr: 0.1, epochs: 10`.
    pub spec: String,
    pub details: RunDetails,
}

impl RunRow {
    pub fn is_parameterless(&self) -> bool {
        matches!(self.details, RunDetails::Parameterless)
    }
}

/// Expanded view of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunDetails {
    /// The run sets no parameters at all.
    Parameterless,
    /// One `name: value` line per parameter, under the pipeline name.
    Parameters {
        pipeline_name: String,
        lines: Vec<String>,
    },
}
