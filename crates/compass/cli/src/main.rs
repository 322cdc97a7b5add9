//! Compass CLI - run and verify work-style assessments from the terminal
//!
//! - List the question sequence a seed produces
//! - Run a full assessment from scripted answers
//! - Rescore a stored result record to prove it reproduces
//! - Show the effective configuration

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use config::CliConfig;
use error::CliResult;
use output::{print_error, print_single, OutputFormat};

/// Compass CLI application
#[derive(Parser)]
#[command(name = "compass")]
#[command(about = "Compass - staged work-style assessments", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "COMPASS_CONFIG")]
    config: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short, long, default_value = "table")]
    output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// List the question sequence derived from a seed
    Questions {
        /// Seed (number or text); defaults to config, then the clock
        #[arg(short, long)]
        seed: Option<String>,
    },

    /// Run a full assessment from scripted answers
    Run {
        /// Seed (number or text); defaults to config, then the clock
        #[arg(short, long)]
        seed: Option<String>,

        /// Answer file (A/B tokens or a JSON array), `-` for stdin
        #[arg(short, long, default_value = "-")]
        answers: String,

        /// Questions per stage, overriding the config file
        #[arg(long)]
        stage_size: Option<usize>,
    },

    /// Rescore a stored result record (JSON), `-` for stdin
    Score {
        #[arg(default_value = "-")]
        record: String,
    },

    /// Show configuration
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so structured output stays clean
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

async fn execute(cli: Cli) -> CliResult<()> {
    let mut config = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Questions { seed } => {
            commands::questions::execute(seed.as_deref(), &config, cli.output)
        }
        Commands::Run {
            seed,
            answers,
            stage_size,
        } => {
            if let Some(size) = stage_size {
                config.assessment.stage_size = size;
            }
            commands::run::execute(seed.as_deref(), &answers, &config, cli.output).await
        }
        Commands::Score { record } => commands::score::execute(&record, &config, cli.output),
        Commands::Config => match cli.output {
            OutputFormat::Table => {
                print!("{}", config.to_toml_string()?);
                Ok(())
            }
            format => print_single(&config, format),
        },
    }
}
