//! List preview derivation for note bodies.
//!
//! # Invariants
//! - `preview_text` holds at most 100 chars and no markdown symbols.
//! - `preview_image` is the first markdown image path, if any.

use crate::markdown::highlight::strip_highlight_markers;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

const PREVIEW_MAX_CHARS: usize = 100;

static MARKDOWN_IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[[^\]]*]\(([^)]+)\)").expect("valid image regex"));
static MARKDOWN_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));
static MARKDOWN_SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\*_`#>~\-\[\]\(\)!]+"#).expect("valid markdown symbol regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Markdown-derived preview projection for note lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownPreview {
    /// Sanitized summary text.
    pub preview_text: Option<String>,
    /// First markdown image path.
    pub preview_image: Option<String>,
}

/// Derives preview fields from a markdown body.
///
/// Rules:
/// - `preview_image`: first markdown image path.
/// - `preview_text`: images dropped, links reduced to labels, highlight
///   markers and markdown symbols removed, whitespace collapsed, first
///   100 chars retained.
pub fn derive_markdown_preview(body: &str) -> MarkdownPreview {
    let preview_image = MARKDOWN_IMAGE_RE
        .captures(body)
        .and_then(|caps| caps.get(1).map(|m| m.as_str().trim().to_string()))
        .filter(|value| !value.is_empty());

    let without_images = MARKDOWN_IMAGE_RE.replace_all(body, " ");
    let without_links = MARKDOWN_LINK_RE.replace_all(&without_images, "$1");
    let without_highlights = strip_highlight_markers(&without_links);
    let without_symbols = MARKDOWN_SYMBOL_RE.replace_all(&without_highlights, " ");
    let normalized = WHITESPACE_RE.replace_all(&without_symbols, " ");
    let trimmed = normalized.trim();
    let preview_text = if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(PREVIEW_MAX_CHARS).collect())
    };

    MarkdownPreview {
        preview_text,
        preview_image,
    }
}
