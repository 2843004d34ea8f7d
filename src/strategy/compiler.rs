use super::{ParameterDomain, Strategy, StrategyNode};
use crate::config::DEFAULT_RESERVED_KEY;
use crate::error::StrategyError;
use crate::pipeline::PipelineDefinition;
use serde_json::Value;
use tracing::{debug, instrument};

/// Derives the initial strategy of a job from its pipeline's parameter defaults.
///
/// Every declared parameter becomes a singleton candidate list holding its
/// current value. Pipeline-level parameters come first under the reserved key,
/// followed by each step that declares parameters, in pipeline order.
///
/// Callers run this once per job, only while the job has no strategy yet.
/// Re-compiling would throw away the operator's candidate lists.
pub struct StrategyCompiler<'a> {
    pipeline: &'a PipelineDefinition,
    reserved_key: String,
}

pub struct StrategyCompilerBuilder<'a> {
    pipeline: &'a PipelineDefinition,
    reserved_key: String,
}

impl<'a> StrategyCompilerBuilder<'a> {
    pub fn new(pipeline: &'a PipelineDefinition) -> Self {
        Self {
            pipeline,
            reserved_key: DEFAULT_RESERVED_KEY.to_string(),
        }
    }

    /// Node key under which pipeline-level parameters are stored.
    pub fn with_reserved_key(mut self, reserved_key: &str) -> Self {
        self.reserved_key = reserved_key.to_string();
        self
    }

    pub fn build(self) -> StrategyCompiler<'a> {
        StrategyCompiler {
            pipeline: self.pipeline,
            reserved_key: self.reserved_key,
        }
    }
}

impl<'a> StrategyCompiler<'a> {
    pub fn builder(pipeline: &'a PipelineDefinition) -> StrategyCompilerBuilder<'a> {
        StrategyCompilerBuilder::new(pipeline)
    }

    #[instrument(level = "debug", skip(self), fields(pipeline = %self.pipeline.name))]
    pub fn compile(&self) -> Result<Strategy, StrategyError> {
        let mut strategy = Strategy::new();

        if !self.pipeline.parameters.is_empty() {
            strategy.push_node(singleton_node(
                &self.reserved_key,
                &self.pipeline.name,
                &self.pipeline.parameters,
            )?)?;
        }

        for step in &self.pipeline.steps {
            if step.parameters.is_empty() {
                continue;
            }
            strategy.push_node(singleton_node(&step.uuid, &step.title, &step.parameters)?)?;
        }

        debug!(
            nodes = strategy.nodes().len(),
            parameters = strategy.parameter_count(),
            "compiled initial strategy"
        );
        Ok(strategy)
    }
}

fn singleton_node(
    key: &str,
    title: &str,
    parameters: &[(String, Value)],
) -> Result<StrategyNode, StrategyError> {
    let node = StrategyNode::new(key, title)?;
    Ok(parameters.iter().fold(node, |node, (name, value)| {
        node.with_domain(name, ParameterDomain::singleton(value.clone()))
    }))
}
