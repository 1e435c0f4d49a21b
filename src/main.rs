// Solace - Rule-based mental-health support responder
// Main entry point

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use solace::config::{load_config, Config};
use solace::errors::startup_load_error;
use solace::prep::{goemotions, suicide_dataset};
use solace::responder::{ChatRequest, Knowledge, Responder};
use solace::server::ChatServer;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "solace")]
#[command(about = "Rule-based mental-health support responder", version)]
struct Args {
    /// Run mode (defaults to `serve`)
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to a config file (default: ~/.solace/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP chat server
    Serve {
        /// Host to bind (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Classify a single message and print the JSON response
    Classify {
        /// Message text
        message: String,
    },
    /// Load and summarize the suicide-risk CSV dataset
    LoadDataset {
        #[arg(long, default_value = suicide_dataset::DEFAULT_DATASET_PATH)]
        path: PathBuf,
    },
    /// Decode GoEmotions splits and write bucketed CSVs
    PrepareGoemotions {
        /// emotions.txt with one label per line
        #[arg(long, default_value = "emotions.txt")]
        emotions: PathBuf,
        /// Directory containing train.tsv, dev.tsv and test.tsv
        #[arg(long, default_value = ".")]
        input_dir: PathBuf,
        /// Directory for the *_clean.csv outputs
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing(args.verbose);

    match args.command {
        Some(Command::Serve { host, port }) => run_serve(args.config.as_deref(), host, port).await,
        None => run_serve(args.config.as_deref(), None, None).await,
        Some(Command::Classify { message }) => run_classify(args.config.as_deref(), message),
        Some(Command::LoadDataset { path }) => run_load_dataset(&path),
        Some(Command::PrepareGoemotions {
            emotions,
            input_dir,
            output_dir,
        }) => run_prepare_goemotions(&emotions, &input_dir, &output_dir),
    }
}

fn init_tracing(verbose: bool) {
    let show_debug = verbose
        || std::env::var("SOLACE_DEBUG")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

    // RUST_LOG wins; otherwise info, or debug when requested
    let default_level = if show_debug { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Bridge log crate -> tracing (for dependencies using log crate)
    tracing_log::LogTracer::init().ok();
}

/// Load configuration and the static tables; any failure aborts startup
fn load_responder(config: &Config) -> Result<Responder> {
    let knowledge = match Knowledge::load(&config.data) {
        Ok(knowledge) => knowledge,
        Err(e) => anyhow::bail!(startup_load_error(&e)),
    };
    Ok(Responder::new(knowledge))
}

/// Run HTTP chat server
async fn run_serve(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let responder = load_responder(&config)?;
    let server = ChatServer::new(config.server.clone(), responder)?;

    server.serve().await
}

/// Classify one message from the command line
fn run_classify(config_path: Option<&Path>, message: String) -> Result<()> {
    let config = load_config(config_path)?;
    let responder = load_responder(&config)?;

    let response = responder.respond(&ChatRequest::new(message));
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

fn run_load_dataset(path: &Path) -> Result<()> {
    let dataset = suicide_dataset::load_suicide_data(path)
        .with_context(|| format!("Failed to load dataset {}", path.display()))?;

    println!("Suicide dataset loaded and cleaned!");
    print!("{}", dataset.summary());

    Ok(())
}

fn run_prepare_goemotions(emotions: &Path, input_dir: &Path, output_dir: &Path) -> Result<()> {
    let table = goemotions::load_emotions(emotions)
        .with_context(|| format!("Failed to load emotions from {}", emotions.display()))?;
    println!("Loaded {} emotions", table.len());

    let written = goemotions::prepare_splits(&table, input_dir, output_dir)
        .context("Failed to prepare GoEmotions splits")?;

    let names: Vec<String> = written.iter().map(|p| p.display().to_string()).collect();
    println!("Clean datasets saved: {}", names.join(", "));

    Ok(())
}
