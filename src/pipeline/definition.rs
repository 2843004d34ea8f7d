use serde_json::Value;

/// The static parts of a pipeline the engine cares about: its name and the
/// declared parameter defaults, pipeline-level and per step, in a stable order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineDefinition {
    pub name: String,
    pub parameters: Vec<(String, Value)>,
    pub steps: Vec<StepDefinition>,
}

/// A single step of a pipeline and its declared parameter defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct StepDefinition {
    pub uuid: String,
    pub title: String,
    pub parameters: Vec<(String, Value)>,
}
