use super::{PARAMETERLESS_RUN, RunAssignment, RunDetails, RunRow, StructuredRun};
use crate::flat_key::{make_flat_key, split_flat_key};
use itertools::Itertools;

/// Converts between flat run assignments and their persisted, nested form.
pub struct RunEncoder;

impl RunEncoder {
    /// Un-flattens every `node#param` key into `structured[node][param]`.
    pub fn encode(run: &RunAssignment) -> StructuredRun {
        let mut structured = StructuredRun::new();
        for (key, value) in run.entries() {
            let (node_id, param_name) = split_flat_key(key);
            structured.insert(node_id, param_name, value.clone());
        }
        structured
    }

    /// Flattens a persisted run back into `node#param` keys.
    pub fn decode(structured: &StructuredRun) -> RunAssignment {
        structured
            .pairs()
            .map(|(node_id, param_name, value)| (make_flat_key(node_id, param_name), value.clone()))
            .collect()
    }

    /// Signature of the run's persisted form.
    pub fn signature(run: &RunAssignment) -> String {
        Self::encode(run).signature()
    }

    /// `name: value` fragments in the run's own key order.
    pub fn spec_lines(run: &RunAssignment) -> Vec<String> {
        run.entries()
            .iter()
            .map(|(key, value)| {
                let (_, param_name) = split_flat_key(key);
                format!("{}: {}", param_name, value)
            })
            .collect()
    }

    /// Human-readable label, or `"Parameterless run"` for an empty assignment.
    pub fn label(run: &RunAssignment) -> String {
        if run.is_empty() {
            return PARAMETERLESS_RUN.to_string();
        }
        Self::spec_lines(run).iter().join(", ")
    }

    pub fn row(index: usize, run: &RunAssignment, pipeline_name: &str) -> RunRow {
        let lines = Self::spec_lines(run);
        if lines.is_empty() {
            return RunRow {
                index,
                spec: PARAMETERLESS_RUN.to_string(),
                details: RunDetails::Parameterless,
            };
        }
        RunRow {
            index,
            spec: lines.iter().join(", "),
            details: RunDetails::Parameters {
                pipeline_name: pipeline_name.to_string(),
                lines,
            },
        }
    }
}
