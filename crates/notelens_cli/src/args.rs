//! Command line arguments for the `notelens` probe.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// NoteLens - structural statistics and front matter for markdown notes
#[derive(Parser, Debug, Clone)]
#[command(name = "notelens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct NotelensArgs {
    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Log level (trace|debug|info|warn|error); defaults by build mode
    #[arg(long, env = "NOTELENS_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off without it
    #[arg(long, env = "NOTELENS_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Count characters, words, lines and paragraphs
    Stats(InputArgs),

    /// Split a note into front matter and body
    Split(InputArgs),

    /// Show every derived projection of a note
    Insights(InputArgs),
}

/// Input selection shared by all commands
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Note file to read; stdin when omitted or `-`
    pub path: Option<PathBuf>,
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}
