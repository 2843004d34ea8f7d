//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the kumiawase
//! crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use kumiawase::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let pipeline_json = std::fs::read_to_string("path/to/pipeline.json")?;
//! let pipeline = PipelineJson::from_json_str(&pipeline_json)?.into_pipeline()?;
//!
//! let strategy = StrategyCompiler::builder(&pipeline).build().compile()?;
//! let config = EngineConfig::default();
//! let generated = RunGenerator::new(&config).generate(&pipeline.name, &strategy)?;
//!
//! println!("{}", RowFormatter::format_table(&generated.rows, &[]));
//! # Ok(())
//! # }
//! ```

// Engine
pub use crate::config::EngineConfig;
pub use crate::expansion::{
    CartesianExpander, FlatTable, GeneratedRuns, ParameterFlattener, RunGenerator,
};
pub use crate::flat_key::{make_flat_key, split_flat_key};
pub use crate::reconcile::{Reconciliation, SelectionReconciler};

// Data model
pub use crate::pipeline::{IntoPipeline, PipelineDefinition, PipelineJson, StepDefinition};
pub use crate::run::{RunAssignment, RunDetails, RunEncoder, RunRow, StructuredRun};
pub use crate::strategy::{ParameterDomain, Strategy, StrategyCompiler, StrategyNode};

// Job editing
pub use crate::job::{Job, JobEditor, JobStatus, JobUpdate};

// Error types
pub use crate::error::{
    ConfigError, ExpansionError, JobError, PipelineConversionError, StrategyError,
};

// Formatting
pub use crate::report::RowFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
