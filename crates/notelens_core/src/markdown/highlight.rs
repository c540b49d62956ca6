//! `==text==` highlight extension.
//!
//! # Invariants
//! - Inner text is non-empty, single-line, contains no `=` and neither
//!   starts nor ends with whitespace.
//! - Spans are leftmost and non-overlapping.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::ops::Range;

static HIGHLIGHT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"==([^\s=](?:[^=\n]*[^\s=])?)==").expect("valid highlight regex")
});

/// One highlighted run found in markdown text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSpan {
    /// Byte range of the run including both `==` markers.
    pub range: Range<usize>,
    /// Text between the markers.
    pub text: String,
}

/// Finds every highlight span in `text`, in order.
pub fn find_highlights(text: &str) -> Vec<HighlightSpan> {
    HIGHLIGHT_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let inner = caps.get(1)?;
            Some(HighlightSpan {
                range: whole.range(),
                text: inner.as_str().to_string(),
            })
        })
        .collect()
}

/// Rewrites every highlight span as `<mark>…</mark>` inline HTML.
pub fn render_highlights_html(text: &str) -> String {
    HIGHLIGHT_RE
        .replace_all(text, "<mark>$1</mark>")
        .into_owned()
}

/// Drops highlight markers, keeping the inner text.
pub fn strip_highlight_markers(text: &str) -> String {
    HIGHLIGHT_RE.replace_all(text, "$1").into_owned()
}

#[cfg(test)]
mod tests {
    use super::{find_highlights, render_highlights_html, strip_highlight_markers};

    #[test]
    fn finds_single_span_with_marker_range() {
        let spans = find_highlights("a ==b== c");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].range, 2..7);
        assert_eq!(spans[0].text, "b");
    }

    #[test]
    fn rejects_padded_or_multiline_inner_text() {
        assert!(find_highlights("== b==").is_empty());
        assert!(find_highlights("==b ==").is_empty());
        assert!(find_highlights("==a\nb==").is_empty());
        assert!(find_highlights("====").is_empty());
    }

    #[test]
    fn renders_and_strips_multiple_spans() {
        let text = "==one== and ==two words==";
        assert_eq!(
            render_highlights_html(text),
            "<mark>one</mark> and <mark>two words</mark>"
        );
        assert_eq!(strip_highlight_markers(text), "one and two words");
    }
}
