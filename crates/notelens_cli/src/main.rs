//! `notelens` command line probe.
//!
//! # Responsibility
//! - Run the core analyzers over a note file or stdin.
//! - Keep output deterministic for scripting and quick sanity checks.

mod args;
mod commands;

use args::NotelensArgs;
use clap::Parser;
use commands::{execute_command, log_dir_arg, CliError, CliResult};
use notelens_core::{default_log_level, init_logging};
use std::process;

fn main() {
    let args = NotelensArgs::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: &NotelensArgs) -> CliResult<()> {
    if let Some(dir) = &args.log_dir {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, &log_dir_arg(dir)?).map_err(CliError::Logging)?;
    }

    let stdout = std::io::stdout();
    execute_command(args, &mut stdout.lock())
}
