use thiserror::Error;

/// Errors raised at the boundary where a strategy is loaded or edited.
///
/// Once a `Strategy` exists, every domain in it is a well-formed JSON array,
/// so none of the expansion phases need to re-validate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    #[error("Candidate list for parameter '{parameter}' is not valid JSON: {message}")]
    InvalidDomainJson { parameter: String, message: String },

    #[error("Candidate list for parameter '{parameter}' must be a JSON array, found {found}")]
    DomainNotAList { parameter: String, found: String },

    #[error("Node identifier '{0}' must not contain '#'")]
    InvalidNodeId(String),

    #[error("Node '{0}' appears more than once in the strategy")]
    DuplicateNode(String),

    #[error("Node '{0}' was not found in the strategy")]
    NodeNotFound(String),

    #[error("Malformed strategy document: {0}")]
    MalformedDocument(String),
}

/// Errors that can occur while expanding a flattened table into runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpansionError {
    #[error("Strategy would generate {count} runs, which exceeds the configured limit of {limit}")]
    TooManyRuns { count: usize, limit: usize },

    #[error("Number of runs does not fit in memory: the product of candidate counts overflows")]
    Overflow,
}

/// Errors that can occur while editing or saving a job's run selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JobError {
    #[error(
        "You selected 0 pipeline runs. Please choose at least one pipeline run configuration."
    )]
    NoRunsSelected,

    #[error("Selected run index {index} is out of range, only {total} runs were generated")]
    SelectionOutOfRange { index: usize, total: usize },

    #[error(transparent)]
    Strategy(#[from] StrategyError),

    #[error(transparent)]
    Expansion(#[from] ExpansionError),
}

/// Errors that can occur when loading engine configuration.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {message}")]
    Unreadable { path: String, message: String },

    #[error("Failed to parse config JSON: {0}")]
    JsonParseError(String),
}

/// Errors that can occur when converting a custom user format into a `PipelineDefinition`.
#[derive(Error, Debug, Clone)]
pub enum PipelineConversionError {
    #[error("Invalid pipeline data: {0}")]
    ValidationError(String),

    #[error("Failed to parse pipeline JSON: {0}")]
    JsonParseError(String),
}
