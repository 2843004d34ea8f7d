//! From a strategy to the ordered list of runs and their table rows.

use crate::config::EngineConfig;
use crate::error::ExpansionError;
use crate::run::{RunAssignment, RunEncoder, RunRow, StructuredRun};
use crate::strategy::Strategy;
use tracing::{debug, instrument, warn};

pub mod cartesian;
pub mod flatten;

pub use cartesian::{CartesianExpander, RunIter};
pub use flatten::{FlatTable, ParameterFlattener};

/// Every run of a strategy, in generation order, with its display row.
///
/// `runs[i]` and `rows[i]` describe the same run and `rows[i].index == i`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedRuns {
    pub runs: Vec<RunAssignment>,
    pub rows: Vec<RunRow>,
}

impl GeneratedRuns {
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Persisted form of the runs at `indices`, in the order given.
    /// Indices past the end are skipped.
    pub fn structured(&self, indices: &[usize]) -> Vec<StructuredRun> {
        indices
            .iter()
            .filter_map(|&index| self.runs.get(index))
            .map(RunEncoder::encode)
            .collect()
    }
}

/// Regenerates all runs of a strategy from scratch.
///
/// Called on every strategy edit; nothing is carried over between calls.
pub struct RunGenerator<'c> {
    config: &'c EngineConfig,
}

impl<'c> RunGenerator<'c> {
    pub fn new(config: &'c EngineConfig) -> Self {
        Self { config }
    }

    #[instrument(level = "debug", skip(self, strategy))]
    pub fn generate(
        &self,
        pipeline_name: &str,
        strategy: &Strategy,
    ) -> Result<GeneratedRuns, ExpansionError> {
        let table = ParameterFlattener::flatten(strategy);
        let expander = CartesianExpander::new(&table).with_limit(self.config.run_limit());

        let runs = match expander.expand() {
            Ok(runs) => runs,
            Err(e) => {
                warn!(error = %e, "refusing to expand strategy");
                return Err(e);
            }
        };

        let rows = runs
            .iter()
            .enumerate()
            .map(|(index, run)| RunEncoder::row(index, run, pipeline_name))
            .collect();

        debug!(keys = table.len(), runs = runs.len(), "expanded strategy");
        Ok(GeneratedRuns { runs, rows })
    }
}
