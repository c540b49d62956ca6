//! Command execution for the `notelens` probe.
//!
//! # Responsibility
//! - Read note text from a file or stdin.
//! - Run core analyzers and render human or JSON output.

use crate::args::{Command, InputArgs, NotelensArgs, OutputFormat};
use log::info;
use notelens_core::{
    derive_note_insights, split_front_matter_and_body, FrontMatterSplit, Note, NoteInsights,
    TextStatistics,
};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

pub type CliResult<T> = Result<T, CliError>;

/// Failure surfaced to the terminal with exit code 1.
#[derive(Debug)]
pub enum CliError {
    /// Reading input or writing output failed.
    Io {
        target: String,
        source: std::io::Error,
    },
    /// Logging bootstrap rejected the configuration.
    Logging(String),
    Json(serde_json::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { target, source } => write!(f, "{target}: {source}"),
            Self::Logging(message) => write!(f, "logging init failed: {message}"),
            Self::Json(err) => write!(f, "json encoding failed: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Logging(_) => None,
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Runs one parsed command, writing its report to `out`.
pub fn execute_command(args: &NotelensArgs, out: &mut impl Write) -> CliResult<()> {
    let report = match &args.command {
        Command::Stats(input) => {
            let text = read_input(input)?;
            let stats = TextStatistics::compute(&text);
            info!(
                "event=cli_stats module=cli status=ok char_count={}",
                stats.char_count
            );
            render(args, &stats, render_stats_human)?
        }
        Command::Split(input) => {
            let text = read_input(input)?;
            let split = split_front_matter_and_body(&text);
            info!(
                "event=cli_split module=cli status=ok has_front_matter={}",
                split.has_front_matter()
            );
            render(args, &split, render_split_human)?
        }
        Command::Insights(input) => {
            let note = Note::new(read_input(input)?);
            let insights = derive_note_insights(&note);
            info!(
                "event=cli_insights module=cli status=ok highlights={}",
                insights.highlights.len()
            );
            render(args, &insights, render_insights_human)?
        }
    };

    writeln!(out, "{report}").map_err(|source| CliError::Io {
        target: "stdout".to_string(),
        source,
    })
}

fn render<T: Serialize>(
    args: &NotelensArgs,
    value: &T,
    human: fn(&T) -> String,
) -> CliResult<String> {
    match args.output_format {
        OutputFormat::Human => Ok(human(value)),
        OutputFormat::Json if args.pretty => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Json => Ok(serde_json::to_string(value)?),
    }
}

/// Reads the whole input selected by `input`.
pub fn read_input(input: &InputArgs) -> CliResult<String> {
    match input.path.as_deref() {
        Some(path) if path != Path::new("-") => read_file(path),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| CliError::Io {
                    target: "stdin".to_string(),
                    source,
                })?;
            Ok(text)
        }
    }
}

fn read_file(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        target: path.display().to_string(),
        source,
    })
}

/// Resolves the log directory into the absolute string core expects.
pub fn log_dir_arg(dir: &Path) -> CliResult<String> {
    let absolute: PathBuf = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|source| CliError::Io {
                target: "current directory".to_string(),
                source,
            })?
            .join(dir)
    };
    Ok(absolute.display().to_string())
}

fn render_stats_human(stats: &TextStatistics) -> String {
    format!(
        "characters: {}\nwords: {}\nwords (no punctuation): {}\nlines: {}\nparagraphs: {}",
        stats.char_count,
        stats.word_count_with_punctuation,
        stats.word_count_without_punctuation,
        stats.line_count,
        stats.paragraph_count
    )
}

fn render_split_human(split: &FrontMatterSplit) -> String {
    if split.has_front_matter() {
        format!("{}\n\n{}", split.front_matter, split.body)
    } else {
        format!("(no front matter)\n\n{}", split.body)
    }
}

fn render_insights_human(insights: &NoteInsights) -> String {
    let mut report = render_stats_human(&insights.stats);
    report.push_str(&format!(
        "\nfront matter: {}\nhighlights: {}",
        if insights.front_matter.is_empty() {
            "no"
        } else {
            "yes"
        },
        insights.highlights.len()
    ));
    for span in &insights.highlights {
        report.push_str(&format!("\n  - {}", span.text));
    }
    if let Some(text) = &insights.preview.preview_text {
        report.push_str(&format!("\npreview: {text}"));
    }
    if let Some(image) = &insights.preview.preview_image {
        report.push_str(&format!("\npreview image: {image}"));
    }
    report
}
