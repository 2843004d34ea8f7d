use super::definition::{PipelineDefinition, StepDefinition};
use crate::error::PipelineConversionError;
use serde::Deserialize;
use serde_json::{Map, Value};

/// A trait for custom data models that can be converted into a `PipelineDefinition`.
///
/// Implement it on whatever structs your pipeline files deserialize into; the
/// strategy compiler only ever sees the canonical definition.
///
/// # Example
///
/// ```rust,no_run
/// use kumiawase::error::PipelineConversionError;
/// use kumiawase::pipeline::{IntoPipeline, PipelineDefinition, StepDefinition};
///
/// struct MyTask { id: String, defaults: Vec<(String, serde_json::Value)> }
/// struct MyWorkflow { label: String, tasks: Vec<MyTask> }
///
/// impl IntoPipeline for MyWorkflow {
///     fn into_pipeline(self) -> Result<PipelineDefinition, PipelineConversionError> {
///         Ok(PipelineDefinition {
///             name: self.label,
///             parameters: vec![],
///             steps: self
///                 .tasks
///                 .into_iter()
///                 .map(|t| StepDefinition {
///                     title: t.id.clone(),
///                     uuid: t.id,
///                     parameters: t.defaults,
///                 })
///                 .collect(),
///         })
///     }
/// }
/// ```
pub trait IntoPipeline {
    /// Consumes the object and converts it into the canonical pipeline model.
    fn into_pipeline(self) -> Result<PipelineDefinition, PipelineConversionError>;
}

/// The `pipeline.json` document format: steps keyed by uuid, in file order.
#[derive(Debug, Deserialize)]
pub struct PipelineJson {
    pub name: String,
    #[serde(default)]
    pub parameters: Map<String, Value>,
    #[serde(default)]
    pub steps: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct StepJson {
    #[serde(default)]
    title: String,
    #[serde(default)]
    parameters: Map<String, Value>,
}

impl PipelineJson {
    pub fn from_json_str(json: &str) -> Result<Self, PipelineConversionError> {
        serde_json::from_str(json)
            .map_err(|e| PipelineConversionError::JsonParseError(e.to_string()))
    }
}

impl IntoPipeline for PipelineJson {
    fn into_pipeline(self) -> Result<PipelineDefinition, PipelineConversionError> {
        let steps = self
            .steps
            .into_iter()
            .map(|(uuid, raw)| {
                let step: StepJson = serde_json::from_value(raw).map_err(|e| {
                    PipelineConversionError::ValidationError(format!(
                        "step '{}' is malformed: {}",
                        uuid, e
                    ))
                })?;
                Ok(StepDefinition {
                    uuid,
                    title: step.title,
                    parameters: step.parameters.into_iter().collect(),
                })
            })
            .collect::<Result<Vec<_>, PipelineConversionError>>()?;

        Ok(PipelineDefinition {
            name: self.name,
            parameters: self.parameters.into_iter().collect(),
            steps,
        })
    }
}
