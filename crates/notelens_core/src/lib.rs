//! Core text analysis for NoteLens.
//! This crate owns every derived projection shown next to a note.

pub mod logging;
pub mod markdown;
pub mod model;
pub mod service;
pub mod text;

pub use logging::{
    default_log_level, init_logging, init_logging_with, logging_status, LoggingConfig,
};
pub use markdown::highlight::{
    find_highlights, render_highlights_html, strip_highlight_markers, HighlightSpan,
};
pub use markdown::preview::{derive_markdown_preview, MarkdownPreview};
pub use model::note::{Note, NoteId, NoteValidationError};
pub use service::insight_service::{derive_note_insights, NoteInsightService, NoteInsights};
pub use text::front_matter::{
    find_front_matter_range, split_front_matter_and_body, FrontMatterSplit,
};
pub use text::stats::TextStatistics;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
