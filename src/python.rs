use crate::config::EngineConfig;
use crate::expansion::{GeneratedRuns, RunGenerator};
use crate::reconcile::SelectionReconciler;
use crate::run::StructuredRun;
use crate::strategy::Strategy;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn value_error(e: impl std::fmt::Display) -> PyErr {
    PyErr::new::<PyValueError, _>(e.to_string())
}

fn generate(
    config: &EngineConfig,
    pipeline_name: &str,
    strategy_json: &str,
) -> PyResult<GeneratedRuns> {
    let strategy = Strategy::from_json_str(strategy_json).map_err(value_error)?;
    RunGenerator::new(config)
        .generate(pipeline_name, &strategy)
        .map_err(value_error)
}

/// Run generation for job strategies.
///
/// A `RunPlanner` holds the engine configuration. Strategies and persisted
/// parameters are exchanged as JSON strings, exactly as they are stored with
/// a job.
#[pyclass(name = "RunPlanner")]
struct RunPlannerPy {
    config: EngineConfig,
}

#[pymethods]
impl RunPlannerPy {
    /// Creates a planner.
    ///
    /// Args:
    ///     max_runs (int): Soft limit on the number of runs of one strategy.
    ///         0 disables the limit.
    ///     reserved_key (str): Strategy key holding pipeline-level parameters.
    #[new]
    #[pyo3(signature = (
        max_runs = crate::config::DEFAULT_MAX_RUNS,
        reserved_key = crate::config::DEFAULT_RESERVED_KEY
    ))]
    fn new(max_runs: usize, reserved_key: &str) -> Self {
        RunPlannerPy {
            config: EngineConfig::default()
                .with_max_runs(max_runs)
                .with_reserved_key(reserved_key),
        }
    }

    /// Expands a strategy into its runs.
    ///
    /// Args:
    ///     pipeline_name (str): Name shown in run details.
    ///     strategy_json (str): The job's `strategy_json` document.
    ///
    /// Returns:
    ///     str: A JSON array of the persisted form of every run, in
    ///         generation order.
    ///
    /// Raises:
    ///     ValueError: If a candidate list is not a JSON array or the
    ///         strategy exceeds the run limit.
    fn expand(&self, pipeline_name: &str, strategy_json: &str) -> PyResult<String> {
        let generated = generate(&self.config, pipeline_name, strategy_json)?;
        let all: Vec<usize> = (0..generated.len()).collect();
        serde_json::to_string(&generated.structured(&all)).map_err(value_error)
    }

    /// Labels of every run, e.g. `"lr: 0.1, epochs: 10"`.
    fn labels(&self, pipeline_name: &str, strategy_json: &str) -> PyResult<Vec<String>> {
        let generated = generate(&self.config, pipeline_name, strategy_json)?;
        Ok(generated.rows.into_iter().map(|row| row.spec).collect())
    }

    /// Indices of the runs matching a job's saved `parameters`.
    ///
    /// Args:
    ///     strategy_json (str): The job's `strategy_json` document.
    ///     parameters_json (str): The job's saved `parameters` list.
    ///
    /// Returns:
    ///     list[int]: Selected run indices, ascending.
    fn reconcile(&self, strategy_json: &str, parameters_json: &str) -> PyResult<Vec<usize>> {
        let generated = generate(&self.config, "", strategy_json)?;
        let persisted: Vec<StructuredRun> =
            serde_json::from_str(parameters_json).map_err(value_error)?;
        Ok(SelectionReconciler::selected_indices(&generated.runs, &persisted))
    }
}

/// Parameter strategy expansion and run selection reconciliation.
#[pymodule]
fn kumiawase(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<RunPlannerPy>()?;
    Ok(())
}
