//! Common test utilities for building pipelines, strategies and runs.
use kumiawase::prelude::*;
use serde_json::{Value, json};

#[allow(dead_code)]
pub const RESERVED_KEY: &str = "pipeline_parameters";

/// A pipeline with pipeline-level parameters, a parameterless step and a
/// step with two parameters.
pub const TRAINING_PIPELINE_JSON: &str = r#"{
    "name": "training",
    "parameters": {"dataset": "mnist"},
    "steps": {
        "3f1a-load": {"uuid": "3f1a-load", "title": "Load data", "parameters": {}},
        "9c2e-train": {
            "uuid": "9c2e-train",
            "title": "Train",
            "parameters": {"lr": 0.1, "opts#extra": {"momentum": 0.9}}
        }
    }
}"#;

#[allow(dead_code)]
pub fn training_pipeline() -> PipelineDefinition {
    PipelineJson::from_json_str(TRAINING_PIPELINE_JSON)
        .and_then(IntoPipeline::into_pipeline)
        .expect("fixture pipeline is valid")
}

/// Builds a single-node strategy from `(parameter, candidate list text)` pairs.
#[allow(dead_code)]
pub fn single_node_strategy(node: &str, params: &[(&str, &str)]) -> Strategy {
    let node = params
        .iter()
        .fold(StrategyNode::new(node, node).unwrap(), |node, (name, text)| {
            node.with_parameter(name, text).unwrap()
        });
    Strategy::new().with_node(node).unwrap()
}

/// Builds a persisted run for a single node.
#[allow(dead_code)]
pub fn structured(node: &str, params: &[(&str, Value)]) -> StructuredRun {
    let mut run = StructuredRun::new();
    for (name, value) in params {
        run.insert(node, name, value.clone());
    }
    run
}

/// Extracts one parameter's value from every run, in order.
#[allow(dead_code)]
pub fn column(runs: &[RunAssignment], flat_key: &str) -> Vec<Value> {
    runs.iter()
        .map(|r| r.get(flat_key).cloned().unwrap_or(Value::Null))
        .collect()
}

/// A draft job that was never configured.
#[allow(dead_code)]
pub fn draft_job() -> Job {
    serde_json::from_value(json!({
        "uuid": "job-1",
        "name": "sweep",
        "pipeline_uuid": "pipe-1",
        "status": "DRAFT",
        "strategy_json": {},
        "parameters": []
    }))
    .expect("fixture job is valid")
}
