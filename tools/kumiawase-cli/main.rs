use clap::{Parser, Subcommand};
use kumiawase::prelude::*;
use std::fs;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Expand job parameter strategies into runs and restore saved selections
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Optional path to an engine config JSON file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the initial strategy compiled from a pipeline's parameter defaults
    Compile {
        /// Path to the pipeline JSON file
        pipeline_path: String,
    },
    /// List every run of a strategy
    Expand {
        /// Path to the pipeline JSON file
        pipeline_path: String,
        /// Strategy JSON file; compiled from the pipeline when omitted
        #[arg(short, long)]
        strategy: Option<String>,
        /// Saved job parameters to restore the selection from
        #[arg(short, long)]
        parameters: Option<String>,
        /// Print rows as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the job update payload for a job and a run selection
    Payload {
        /// Path to the job JSON file
        job_path: String,
        /// Path to the pipeline JSON file
        pipeline_path: String,
        /// Comma-separated run indices; keeps the restored selection when omitted
        #[arg(long, value_delimiter = ',')]
        select: Option<Vec<usize>>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => EngineConfig::default(),
    };

    match cli.command {
        Command::Compile { pipeline_path } => run_compile(&config, &pipeline_path),
        Command::Expand {
            pipeline_path,
            strategy,
            parameters,
            json,
        } => run_expand(&config, &pipeline_path, strategy, parameters, json),
        Command::Payload {
            job_path,
            pipeline_path,
            select,
        } => run_payload(&config, &job_path, &pipeline_path, select),
    }
}

fn run_compile(config: &EngineConfig, pipeline_path: &str) {
    let pipeline = load_pipeline(pipeline_path);
    let strategy = compile_strategy(config, &pipeline);
    print_json(&strategy);
}

fn run_expand(
    config: &EngineConfig,
    pipeline_path: &str,
    strategy_path: Option<String>,
    parameters_path: Option<String>,
    json: bool,
) {
    let pipeline = load_pipeline(pipeline_path);
    let strategy = match strategy_path {
        Some(path) => Strategy::from_json_str(&read_file(&path, "strategy"))
            .unwrap_or_else(|e| exit_with_error(&format!("Invalid strategy: {}", e))),
        None => compile_strategy(config, &pipeline),
    };

    let expand_start = Instant::now();
    let generated = RunGenerator::new(config)
        .generate(&pipeline.name, &strategy)
        .unwrap_or_else(|e| exit_with_error(&format!("Expansion failed: {}", e)));
    let expand_duration = expand_start.elapsed();

    let selected = match parameters_path {
        Some(path) => {
            let persisted: Vec<StructuredRun> =
                serde_json::from_str(&read_file(&path, "parameters")).unwrap_or_else(|e| {
                    exit_with_error(&format!("Failed to parse parameters JSON: {}", e))
                });
            let restored = SelectionReconciler::reconcile(&generated.runs, &persisted);
            if !restored.unmatched.is_empty() {
                eprintln!(
                    "Warning: {} saved run(s) no longer match the strategy",
                    restored.unmatched.len()
                );
            }
            restored.selected
        }
        None => (0..generated.len()).collect(),
    };

    if json {
        print_json(&serde_json::json!({
            "rows": generated.rows,
            "selected": selected,
        }));
        return;
    }

    print!("{}", RowFormatter::format_table(&generated.rows, &selected));
    println!(
        "\n{}/{} runs selected, expanded in {:?}",
        selected.len(),
        generated.len(),
        expand_duration
    );
}

fn run_payload(
    config: &EngineConfig,
    job_path: &str,
    pipeline_path: &str,
    select: Option<Vec<usize>>,
) {
    let pipeline = load_pipeline(pipeline_path);
    let job = Job::from_json_str(&read_file(job_path, "job"))
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse job JSON: {}", e)));

    let mut editor = JobEditor::open(&job, &pipeline, config)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to open job: {}", e)));
    if let Some(indices) = select {
        editor
            .set_selection(indices)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    }

    eprintln!("{}", editor.summary());
    let payload = editor
        .update_payload()
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    print_json(&payload);
}

fn load_pipeline(path: &str) -> PipelineDefinition {
    PipelineJson::from_json_str(&read_file(path, "pipeline"))
        .and_then(IntoPipeline::into_pipeline)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load pipeline: {}", e)))
}

fn compile_strategy(config: &EngineConfig, pipeline: &PipelineDefinition) -> Strategy {
    StrategyCompiler::builder(pipeline)
        .with_reserved_key(&config.pipeline_parameters_reserved_key)
        .build()
        .compile()
        .unwrap_or_else(|e| exit_with_error(&format!("Strategy compilation failed: {}", e)))
}

fn read_file(path: &str, what: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read {} file '{}': {}", what, path, e))
    })
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => exit_with_error(&format!("Failed to serialize output: {}", e)),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
