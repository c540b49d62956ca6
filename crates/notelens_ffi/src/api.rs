//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the note analyzers to Dart via FRB as sync calls.
//! - Flatten core values into FFI-friendly integer/string envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Counts and offsets saturate at `u32::MAX` instead of wrapping.

use log::debug;
use notelens_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    render_highlights_html, split_front_matter_and_body, TextStatistics,
};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Statistics envelope shown in the editor footer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoteTextStats {
    /// UTF-16 code units, matching Dart `String.length`.
    pub char_count: u32,
    pub word_count_with_punctuation: u32,
    pub word_count_without_punctuation: u32,
    pub line_count: u32,
    pub paragraph_count: u32,
}

impl From<TextStatistics> for NoteTextStats {
    fn from(value: TextStatistics) -> Self {
        Self {
            char_count: saturate(value.char_count),
            word_count_with_punctuation: saturate(value.word_count_with_punctuation),
            word_count_without_punctuation: saturate(value.word_count_without_punctuation),
            line_count: saturate(value.line_count),
            paragraph_count: saturate(value.paragraph_count),
        }
    }
}

/// Front-matter split envelope for the markdown preview screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFrontMatterSplit {
    /// Raw block including delimiters; empty when absent.
    pub front_matter: String,
    pub body: String,
    /// Byte offset where the block starts, when present.
    pub range_start: Option<u32>,
    /// Byte offset just past the closing delimiter, when present.
    pub range_end: Option<u32>,
}

/// Computes text statistics for the current editor content.
///
/// # FFI contract
/// - Sync call, pure CPU work proportional to content length.
/// - Never panics; blank content yields all-zero counts.
#[flutter_rust_bridge::frb(sync)]
pub fn note_text_stats(content: String) -> NoteTextStats {
    let stats = TextStatistics::compute(&content);
    debug!(
        "event=note_text_stats module=ffi status=ok char_count={}",
        stats.char_count
    );
    stats.into()
}

/// Splits note content into front matter and body.
///
/// # FFI contract
/// - Sync call, linear-time matching.
/// - Never panics; content without front matter is returned untouched.
#[flutter_rust_bridge::frb(sync)]
pub fn note_split_front_matter(content: String) -> NoteFrontMatterSplit {
    let split = split_front_matter_and_body(&content);
    NoteFrontMatterSplit {
        range_start: split.range.as_ref().map(|range| saturate(range.start)),
        range_end: split.range.as_ref().map(|range| saturate(range.end)),
        front_matter: split.front_matter,
        body: split.body,
    }
}

/// Rewrites `==text==` highlights as `<mark>` inline HTML for the renderer.
///
/// # FFI contract
/// - Sync call.
/// - Never panics; text without highlights is returned unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn note_render_highlights(content: String) -> String {
    render_highlights_html(&content)
}

fn saturate(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, note_render_highlights, note_split_front_matter,
        note_text_stats, ping, saturate, NoteTextStats,
    };
    use notelens_core::split_front_matter_and_body;

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let log_dir = std::env::temp_dir().join("notelens-ffi-level-check");
        let log_dir = log_dir.to_str().expect("utf-8 temp path").to_string();
        let error = init_logging("verbose".to_string(), log_dir);
        assert!(error.contains("unsupported log level"), "unexpected error: {error}");
    }

    #[test]
    fn note_text_stats_maps_core_counts() {
        let stats = note_text_stats("你好, world".to_string());
        assert_eq!(
            stats,
            NoteTextStats {
                char_count: 9,
                word_count_with_punctuation: 4,
                word_count_without_punctuation: 3,
                line_count: 1,
                paragraph_count: 1,
            }
        );
        assert_eq!(note_text_stats(" \n ".to_string()), NoteTextStats::default());
    }

    #[test]
    fn note_split_front_matter_reports_byte_range() {
        let content = "---\ntitle: X\n---\nBody text".to_string();
        let split = note_split_front_matter(content.clone());
        assert_eq!(split.range_start, Some(0));
        assert_eq!(split.range_end, Some(16));

        let core = split_front_matter_and_body(&content);
        assert_eq!(split.front_matter, core.front_matter);
        assert_eq!(split.body, core.body);
    }

    #[test]
    fn note_split_front_matter_keeps_plain_content_untouched() {
        let split = note_split_front_matter(" plain \n".to_string());
        assert_eq!(split.front_matter, "");
        assert_eq!(split.body, " plain \n");
        assert_eq!(split.range_start, None);
        assert_eq!(split.range_end, None);
    }

    #[test]
    fn note_render_highlights_wraps_marks() {
        assert_eq!(
            note_render_highlights("see ==this==".to_string()),
            "see <mark>this</mark>"
        );
    }

    #[test]
    fn saturate_caps_at_u32_max() {
        assert_eq!(saturate(7), 7);
        assert_eq!(saturate(usize::MAX), u32::MAX);
    }
}
