/// Steading: generate settlements from the command line.
///
/// Usage: steading [--type <Hamlet|Village|City|Castle|Tower|Abbey>] [--seed <n>]
///                 [--count <n>] [--field <name>] [--descriptors <file.ron>]
///                 [--format json|ron]
///
/// Records go to stdout; logs go to stderr (`RUST_LOG=debug` for detail).

use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use steading_engine::core::pipeline::{SteadingError, SteadingGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Ron,
}

#[derive(Parser, Debug)]
#[command(name = "steading")]
#[command(about = "Generate hamlets, villages, cities, castles, wizard towers and abbeys")]
struct Args {
    /// Settlement type; unknown or missing picks one at random
    #[arg(short = 't', long = "type")]
    settlement_type: Option<String>,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of records to generate
    #[arg(short, long, default_value = "1")]
    count: usize,

    /// Generate a single field instead of a whole record
    #[arg(short, long)]
    field: Option<String>,

    /// RON word table for descriptors
    #[arg(long)]
    descriptors: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: Format,
}

#[derive(Debug, thiserror::Error)]
enum ToolError {
    #[error(transparent)]
    Steading(#[from] SteadingError),
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("RON output error: {0}")]
    Ron(#[from] ron::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "steading failed");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), ToolError> {
    let mut builder = SteadingGenerator::builder();
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    if let Some(ref path) = args.descriptors {
        builder = builder.descriptors_path(path);
    }
    let mut generator = builder.build()?;
    info!(seed = ?args.seed, count = args.count, "generator ready");

    for _ in 0..args.count {
        match args.field {
            Some(ref field) => {
                let value = generator.generate_step(field)?;
                print_value(&value, args.format)?;
            }
            None => {
                let record = generator.generate(args.settlement_type.as_deref());
                print_value(&record, args.format)?;
            }
        }
    }

    Ok(())
}

fn print_value<T: Serialize>(value: &T, format: Format) -> Result<(), ToolError> {
    let text = match format {
        Format::Json => serde_json::to_string_pretty(value)?,
        Format::Ron => ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())?,
    };
    println!("{}", text);
    Ok(())
}
