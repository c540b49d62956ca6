//! Markdown-derived projections over a note body.
//!
//! # Responsibility
//! - Detect and render the `==text==` highlight extension.
//! - Derive list previews (`preview_text`, `preview_image`).
//!
//! # Invariants
//! - Inputs are note bodies with front matter already removed.

pub mod highlight;
pub mod preview;
