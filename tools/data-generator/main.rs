use clap::Parser;
use rand::Rng;
use rand::rngs::ThreadRng;
use serde_json::{Map, Value, json};
use std::fs;

/// A CLI tool to generate sample pipeline definitions with parameters
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated pipeline JSON file to
    #[arg(short, long, default_value = "generated_pipeline.json")]
    output: String,

    /// Number of steps in the generated pipeline
    #[arg(long, default_value_t = 4)]
    steps: usize,

    /// The maximum number of parameters per step
    #[arg(long, default_value_t = 3)]
    max_params: usize,
}

const PARAMETER_NAMES: &[&str] = &[
    "learning_rate",
    "batch_size",
    "epochs",
    "dropout",
    "optimizer",
    "seed",
    "verbose",
    "columns",
    "config#nested",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    println!(
        "Generating pipeline with {} steps (up to {} parameters each)...",
        cli.steps, cli.max_params
    );

    let mut steps = Map::new();
    for index in 0..cli.steps {
        let uuid = format!("{:08x}-step-{}", rng.random::<u32>(), index);
        steps.insert(
            uuid.clone(),
            json!({
                "uuid": uuid,
                "title": format!("Step {}", index + 1),
                "parameters": generate_parameters(&mut rng, cli.max_params),
            }),
        );
    }

    let pipeline = json!({
        "name": "generated-pipeline",
        "parameters": generate_parameters(&mut rng, cli.max_params),
        "steps": steps,
    });

    fs::write(&cli.output, serde_json::to_string_pretty(&pipeline)?)?;
    println!("Successfully generated and saved pipeline to '{}'", cli.output);

    Ok(())
}

fn generate_parameters(rng: &mut ThreadRng, max_params: usize) -> Value {
    let count = rng.random_range(0..=max_params);
    let mut parameters = Map::new();
    for _ in 0..count {
        let name = PARAMETER_NAMES[rng.random_range(0..PARAMETER_NAMES.len())];
        parameters.insert(name.to_string(), generate_value(rng));
    }
    Value::Object(parameters)
}

fn generate_value(rng: &mut ThreadRng) -> Value {
    match rng.random_range(0..5) {
        0 => json!(rng.random_range(1..=512)),
        1 => json!((rng.random::<f64>() * 1000.0).round() / 1000.0),
        2 => json!(rng.random_bool(0.5)),
        3 => json!(["adam", "sgd", "rmsprop"][rng.random_range(0..3)]),
        _ => json!({"depth": rng.random_range(1..8), "tags": ["a", "b"]}),
    }
}
