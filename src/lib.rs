//! # Kumiawase - Parameter Strategy Expansion and Run Selection
//!
//! **Kumiawase** turns per-node lists of candidate parameter values into every
//! concrete combination ("run") of a pipeline job, and restores a previously
//! saved run selection after those candidate lists change.
//!
//! ## Core Workflow
//!
//! 1.  **Describe the pipeline**: Load a `PipelineDefinition`, either from the
//!     `pipeline.json` format (`PipelineJson`) or from your own format through
//!     the `IntoPipeline` trait.
//! 2.  **Build a strategy**: Compile an initial `Strategy` with
//!     `StrategyCompiler` (every default becomes a one-element candidate list),
//!     or load the strategy persisted with the job.
//! 3.  **Expand**: `RunGenerator` flattens the strategy into `node#param`
//!     columns and walks their Cartesian product in a fixed order, producing
//!     `RunAssignment`s and display `RunRow`s.
//! 4.  **Reconcile**: `SelectionReconciler` maps the job's saved parameter sets
//!     back onto indices of the fresh run list.
//! 5.  **Persist**: `RunEncoder` turns the selected runs back into the nested
//!     `StructuredRun` form stored with the job.
//!
//! `JobEditor` wires these steps into a job editing session.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kumiawase::prelude::*;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let strategy = Strategy::new().with_node(
//!         StrategyNode::new("pipeline_parameters", "training")?
//!             .with_parameter("lr", "[0.1, 0.01]")?
//!             .with_parameter("epochs", "[10]")?,
//!     )?;
//!
//!     let config = EngineConfig::default();
//!     let generated = RunGenerator::new(&config).generate("training", &strategy)?;
//!     for row in &generated.rows {
//!         println!("{}: {}", row.index, row.spec);
//!     }
//!
//!     // Restore a selection saved before the strategy was edited.
//!     let saved: Vec<StructuredRun> =
//!         serde_json::from_str(r#"[{"pipeline_parameters": {"lr": 0.01, "epochs": 10}}]"#)?;
//!     let restored = SelectionReconciler::reconcile(&generated.runs, &saved);
//!     assert_eq!(restored.selected, vec![1]);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod expansion;
pub mod flat_key;
pub mod job;
pub mod pipeline;
pub mod prelude;
pub mod reconcile;
pub mod report;
pub mod run;
pub mod strategy;

#[cfg(feature = "python-bindings")]
mod python;
