//! YAML front-matter detection and splitting.
//!
//! # Responsibility
//! - Locate a leading `---` delimited block at the very start of a note.
//! - Split note text into raw front matter and trimmed body.
//!
//! # Invariants
//! - The opening `---` must sit at byte offset 0 and be followed by `\n`.
//! - The block ends at the first following line that is exactly `---`.
//! - Absence of front matter is a normal outcome: the whole input becomes
//!   the body, untrimmed.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::ops::Range;

// `\A` anchors at offset 0 regardless of multi-line mode; the lazy inner
// run stops at the first closing line. The regex engine runs in linear time.
static FRONT_MATTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)\A---\n(?s:.*?)^---$").expect("valid front matter regex"));

/// Result of splitting a note into front matter and body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontMatterSplit {
    /// Raw block including both delimiter lines, or empty when absent.
    pub front_matter: String,
    /// Remaining content. Trimmed only when front matter was found.
    pub body: String,
    /// Byte range of the block in the source text, when present.
    pub range: Option<Range<usize>>,
}

impl FrontMatterSplit {
    /// Returns whether a front-matter block was found.
    pub fn has_front_matter(&self) -> bool {
        self.range.is_some()
    }
}

/// Returns the byte range of the leading front-matter block, if any.
///
/// The range covers both delimiter lines but not the newline after the
/// closing `---`.
pub fn find_front_matter_range(text: &str) -> Option<Range<usize>> {
    FRONT_MATTER_RE.find(text).map(|found| found.range())
}

/// Splits `text` into front matter and body.
///
/// Returns `("", text)` unchanged when no anchored block exists.
pub fn split_front_matter_and_body(text: &str) -> FrontMatterSplit {
    match find_front_matter_range(text) {
        Some(range) => FrontMatterSplit {
            front_matter: text[range.clone()].to_string(),
            body: text[range.end..].trim().to_string(),
            range: Some(range),
        },
        None => FrontMatterSplit {
            front_matter: String::new(),
            body: text.to_string(),
            range: None,
        },
    }
}
