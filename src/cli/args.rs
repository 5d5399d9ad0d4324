use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::constants::DEFAULT_BATCH_CONCURRENCY;

#[derive(Parser, Debug)]
#[command(name = "rutabot")]
#[command(version)]
#[command(about = "Ask about bus routes, schedules and stops in plain Spanish", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory API base URL (overrides config)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Bearer token for the directory API (overrides config)
    #[arg(long)]
    pub token: Option<String>,

    /// Per-request timeout in milliseconds (overrides config)
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Resolve a single utterance and exit
    #[arg(short, long)]
    pub query: Option<String>,

    /// Output format for --query and batch
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    /// Write the chat transcript as JSON here on exit
    #[arg(long)]
    pub transcript: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize configuration
    Init,
    /// Start a chat session (default)
    Chat,
    /// Resolve every line of a file
    Batch {
        /// File with one utterance per line
        file: PathBuf,
        /// Maximum utterances resolved at once
        #[arg(long, default_value_t = DEFAULT_BATCH_CONCURRENCY)]
        concurrency: usize,
    },
    /// List routes, optionally filtered by region
    Routes {
        #[arg(short, long)]
        region: Option<String>,
    },
    /// List the stops of a route
    Stops {
        /// Route id
        route: String,
    },
    /// Check that the directory is reachable
    Status,
    /// Show version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    Text,
    /// JSON structured output
    Json,
}
