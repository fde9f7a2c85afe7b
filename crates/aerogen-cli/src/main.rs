use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use aerogen_core::config::{ConfigError, GeneratorConfig};
use aerogen_generate::output::csv::write_dataset_csv;
use aerogen_generate::output::sql::insert_dataset;
use aerogen_generate::{AircraftGenerator, GenerationError, GenerationReport};

#[derive(Debug, Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("config file error: {0}")]
    ConfigFile(#[from] toml::de::Error),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Parser, Debug)]
#[command(name = "aerogen", version, about = "Synthetic AIMS/AMOS dataset generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one dataset and write it to CSV files, optionally loading
    /// it into a Postgres database.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// TOML configuration file; defaults apply when omitted.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Output directory for CSV files and the run report.
    #[arg(long, default_value = "out")]
    out: PathBuf,
    /// Override the configured base size.
    #[arg(long)]
    size: Option<u64>,
    /// Override the configured random seed.
    #[arg(long)]
    seed: Option<u64>,
    /// Postgres connection string for the SQL sink.
    #[arg(long, value_name = "CONNECTION_STRING")]
    db_url: Option<String>,
}

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Generate(args) => generate(args).await,
    }
}

async fn generate(args: GenerateArgs) -> Result<(), CliError> {
    let mut config = match &args.config {
        Some(path) => toml::from_str(&std::fs::read_to_string(path)?)?,
        None => GeneratorConfig::default(),
    };
    if let Some(size) = args.size {
        config.size = size;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.validate()?;

    let db_url = args.db_url.clone().or_else(|| config.db_url.clone());
    let seed = config.seed;

    let start = Instant::now();
    let generator = AircraftGenerator::new(config)?;
    let dataset = generator.populate()?;

    let bytes_written = write_dataset_csv(&args.out, &dataset)?;

    let mut report = GenerationReport::new(seed, &dataset);
    report.duration_ms = start.elapsed().as_millis() as u64;
    report.bytes_written = bytes_written;
    std::fs::write(
        args.out.join("generation_report.json"),
        serde_json::to_vec_pretty(&report)?,
    )?;

    if let Some(url) = db_url {
        let pool = PgPoolOptions::new().max_connections(4).connect(&url).await?;
        let inserted = insert_dataset(&pool, &dataset).await?;
        info!(inserted, "database load complete");
    }

    info!(
        out = %args.out.display(),
        total_instances = report.total_instances,
        total_entities = report.total_entities,
        bytes_written,
        duration_ms = report.duration_ms,
        "generation complete"
    );

    Ok(())
}
