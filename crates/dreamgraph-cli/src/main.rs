//! Dreamgraph CLI - Command-line interface
//!
//! Usage:
//!   dreamgraph transform "a floating city above the clouds"
//!   echo "ship at ocean" | dreamgraph transform --pretty
//!   dreamgraph tokens "I'm in a dark forest"
//!   dreamgraph classify city glass spaceship
//!   dreamgraph config

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dreamgraph_core::{AppConfig, LoggingConfig};
use dreamgraph_extractor::DreamPipeline;

const EMPTY_DREAM_MESSAGE: &str = "Enter a dream to see output.";

#[derive(Parser)]
#[command(name = "dreamgraph")]
#[command(about = "Turn a dream description into a world-model graph")]
#[command(version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true, env = "DREAMGRAPH_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform a dream into world-model JSON
    Transform {
        /// Dream text (read from stdin when omitted)
        text: Option<String>,
        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Show normalized text and token sequences
    Tokens {
        /// Dream text (read from stdin when omitted)
        text: Option<String>,
    },
    /// Classify words against the vocabulary
    Classify {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Print the effective configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.clone()).context("Failed to load configuration")?;
    init_tracing(&config.logging);

    let output = run(cli.command, &config)?;
    println!("{output}");

    Ok(())
}

/// Logs go to stderr; stdout carries only command output
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "dreamgraph={0},dreamgraph_extractor={0}",
            logging.level
        ))
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(logging.include_location)
        .with_line_number(logging.include_location);

    if logging.json_format {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(command: Commands, config: &AppConfig) -> anyhow::Result<String> {
    match command {
        Commands::Transform { text, pretty } => {
            let dream = read_dream(text)?;
            let pipeline = DreamPipeline::from_config(config)?;
            let world = pipeline.transform(&dream);

            tracing::info!(
                "Dream produced {} entities and {} relationships",
                world.entities.len(),
                world.relationships.len()
            );

            let json = if pretty {
                world.to_json_pretty()?
            } else {
                world.to_json()?
            };
            Ok(json)
        }
        Commands::Tokens { text } => {
            let dream = read_dream(text)?;
            let pipeline = DreamPipeline::from_config(config)?;
            let tokens = pipeline.tokenize(&dream);

            let report = serde_json::json!({
                "normalized": pipeline.normalize(&dream),
                "full": tokens.full,
                "filtered": tokens.filtered,
            });
            Ok(serde_json::to_string_pretty(&report)?)
        }
        Commands::Classify { words } => {
            let pipeline = DreamPipeline::from_config(config)?;
            let lines: Vec<String> = words
                .iter()
                .map(|word| {
                    let normalized = pipeline.normalize(word.trim());
                    format!("{}\t{}", word, pipeline.classify(&normalized))
                })
                .collect();
            Ok(lines.join("\n"))
        }
        Commands::Config => Ok(config.to_toml()?),
    }
}

/// Argument text, or all of stdin. Blank input is rejected here,
/// before the pipeline runs.
fn read_dream(text: Option<String>) -> anyhow::Result<String> {
    let dream = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read dream from stdin")?;
            buffer
        }
    };

    let dream = dream.trim();
    if dream.is_empty() {
        bail!(EMPTY_DREAM_MESSAGE);
    }

    Ok(dream.to_string())
}
