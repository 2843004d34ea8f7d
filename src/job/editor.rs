use super::model::{Job, JobUpdate};
use crate::config::EngineConfig;
use crate::error::JobError;
use crate::expansion::{GeneratedRuns, RunGenerator};
use crate::pipeline::PipelineDefinition;
use crate::reconcile::SelectionReconciler;
use crate::run::{RunAssignment, RunRow, StructuredRun};
use crate::strategy::{Strategy, StrategyCompiler};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

/// Editing session for the runs of one job.
///
/// Holds the current strategy, the runs generated from it and the operator's
/// selection. Every strategy change regenerates the runs from scratch.
pub struct JobEditor {
    name: String,
    is_draft: bool,
    pipeline_name: String,
    config: EngineConfig,
    strategy: Strategy,
    generated: GeneratedRuns,
    selected: BTreeSet<usize>,
    dropped: Vec<StructuredRun>,
}

impl JobEditor {
    /// Opens a job for editing.
    ///
    /// An unconfigured draft gets a strategy compiled from the pipeline's
    /// defaults; any other job keeps its persisted strategy. A previous run
    /// selection is restored by reconciliation. Jobs without saved parameters
    /// start with every run selected.
    #[instrument(level = "debug", skip_all, fields(job = %job.uuid))]
    pub fn open(
        job: &Job,
        pipeline: &PipelineDefinition,
        config: &EngineConfig,
    ) -> Result<Self, JobError> {
        let strategy = if job.needs_initial_strategy() {
            info!(pipeline = %pipeline.name, "compiling initial strategy for unconfigured draft");
            StrategyCompiler::builder(pipeline)
                .with_reserved_key(&config.pipeline_parameters_reserved_key)
                .build()
                .compile()?
        } else {
            job.strategy_json.clone()
        };

        let generated = RunGenerator::new(config).generate(&pipeline.name, &strategy)?;

        let (selected, dropped) = if job.parameters.is_empty() {
            ((0..generated.len()).collect(), Vec::new())
        } else {
            let restored = SelectionReconciler::reconcile(&generated.runs, &job.parameters);
            (restored.selected.into_iter().collect(), restored.unmatched)
        };

        Ok(Self {
            name: job.name.clone(),
            is_draft: job.is_draft(),
            pipeline_name: pipeline.name.clone(),
            config: config.clone(),
            strategy,
            generated,
            selected,
            dropped,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn runs(&self) -> &[RunAssignment] {
        &self.generated.runs
    }

    pub fn rows(&self) -> &[RunRow] {
        &self.generated.rows
    }

    /// Selected run indices, ascending.
    pub fn selected(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }

    /// Persisted runs that could not be restored when the job was opened.
    pub fn dropped_runs(&self) -> &[StructuredRun] {
        &self.dropped
    }

    /// Replaces the strategy, regenerates every run and selects all of them.
    /// On error the session is left unchanged.
    pub fn update_strategy(&mut self, strategy: Strategy) -> Result<(), JobError> {
        let generated = RunGenerator::new(&self.config).generate(&self.pipeline_name, &strategy)?;
        debug!(runs = generated.len(), "strategy changed, selecting all runs");
        self.selected = (0..generated.len()).collect();
        self.generated = generated;
        self.strategy = strategy;
        Ok(())
    }

    /// Edits one candidate list, the way the parameter editor does.
    pub fn set_domain_text(
        &mut self,
        node_key: &str,
        parameter: &str,
        text: &str,
    ) -> Result<(), JobError> {
        let mut strategy = self.strategy.clone();
        strategy.set_domain_text(node_key, parameter, text)?;
        self.update_strategy(strategy)
    }

    /// Replaces the selection. Every index must refer to a generated run.
    pub fn set_selection<I>(&mut self, indices: I) -> Result<(), JobError>
    where
        I: IntoIterator<Item = usize>,
    {
        let total = self.generated.len();
        let selection = indices
            .into_iter()
            .map(|index| {
                if index < total {
                    Ok(index)
                } else {
                    Err(JobError::SelectionOutOfRange { index, total })
                }
            })
            .collect::<Result<BTreeSet<_>, _>>()?;
        self.selected = selection;
        Ok(())
    }

    /// Flips the selection of one run and returns whether it is now selected.
    pub fn toggle(&mut self, index: usize) -> Result<bool, JobError> {
        let total = self.generated.len();
        if index >= total {
            return Err(JobError::SelectionOutOfRange { index, total });
        }
        if self.selected.remove(&index) {
            Ok(false)
        } else {
            self.selected.insert(index);
            Ok(true)
        }
    }

    pub fn select_all(&mut self) {
        self.selected = (0..self.generated.len()).collect();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// A job needs at least one selected run to be saved or started.
    pub fn validate(&self) -> Result<(), JobError> {
        if self.selected.is_empty() {
            return Err(JobError::NoRunsSelected);
        }
        Ok(())
    }

    /// Persisted form of the selected runs, in index order.
    pub fn selected_parameters(&self) -> Vec<StructuredRun> {
        self.generated.structured(&self.selected())
    }

    /// Builds the update request body. Drafts are confirmed, which starts them.
    pub fn update_payload(&self) -> Result<JobUpdate, JobError> {
        self.validate()?;
        Ok(JobUpdate {
            name: self.name.clone(),
            confirm_draft: self.is_draft.then_some(true),
            strategy_json: self.strategy.clone(),
            parameters: self.selected_parameters(),
        })
    }

    /// Counter shown on the runs tab, e.g. `Pipeline runs (2/6)`.
    pub fn summary(&self) -> String {
        format!(
            "Pipeline runs ({}/{})",
            self.selected.len(),
            self.generated.len()
        )
    }
}
