//! # Mintage CLI Library
//!
//! Argument parsing, logging setup and command dispatch for the `mintage`
//! binary. Lives in a library so commands can be tested without a process.
//!
//! ## Module Organization
//! ```text
//! mintage_cli/
//! ├── lib.rs              ◄─── You are here (CLI parsing & dispatch)
//! ├── config.rs           ◄─── Environment configuration
//! ├── error.rs            ◄─── CliError
//! └── commands/
//!     ├── mod.rs          ◄─── Shared logging / report helpers
//!     ├── demo.rs         ◄─── Batch demo over sample amounts
//!     ├── parse.rs        ◄─── Amounts from argv
//!     ├── interactive.rs  ◄─── Line-by-line stdin reader
//!     └── workflow.rs     ◄─── Workflow JSON records
//! ```
//!
//! stdout carries results only; logs go to stderr.

pub mod commands;
pub mod config;
pub mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::CliConfig;
use error::CliResult;

#[derive(Debug, Parser)]
#[command(
    name = "mintage",
    version,
    about = "Normalize free-form money text to minor units"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Normalize a fixed list of sample amounts
    Demo,
    /// Normalize the given amounts
    Parse {
        /// Amounts such as '$1,234.56' or '€1.234,56'
        #[arg(required = true, allow_hyphen_values = true)]
        amounts: Vec<String>,
        /// Print one JSON result object per amount
        #[arg(long)]
        json: bool,
    },
    /// Read amounts line by line from stdin until it closes
    Interactive,
    /// Add budget fields to workflow JSON records
    Workflow {
        /// Read records from this file instead of stdin
        #[arg(long, short)]
        input: Option<PathBuf>,
    },
}

/// Parses arguments, sets up logging and runs the chosen command.
pub async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    init_tracing();

    let config = CliConfig::load()?;
    debug!(?config, "Configuration loaded");

    execute(cli.command, &config).await
}

/// Runs one command against the process stdin/stdout.
pub async fn execute(command: Commands, config: &CliConfig) -> CliResult<()> {
    let mut stdout = tokio::io::stdout();

    match command {
        Commands::Demo => commands::demo::run_demo(&mut stdout, config).await,
        Commands::Parse { amounts, json } => {
            commands::parse::run_parse(&amounts, json, &mut stdout, config).await
        }
        Commands::Interactive => {
            let stdin = BufReader::new(tokio::io::stdin());
            commands::interactive::run_interactive(stdin, &mut stdout, config)
                .await
                .map(|_| ())
        }
        Commands::Workflow { input: Some(path) } => {
            info!(?path, "Reading workflow records");
            let file = tokio::fs::File::open(&path).await?;
            commands::workflow::run_workflow(file, &mut stdout, config)
                .await
                .map(|_| ())
        }
        Commands::Workflow { input: None } => {
            commands::workflow::run_workflow(tokio::io::stdin(), &mut stdout, config)
                .await
                .map(|_| ())
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=mintage_cli=debug` - Show each normalization
/// - Default: warnings, plus INFO for this crate
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,mintage_cli=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
