//! Plain-text analyzers over raw note content.
//!
//! # Responsibility
//! - Derive structural statistics from note text.
//! - Separate a leading YAML front-matter block from the note body.
//!
//! # Invariants
//! - Every analyzer is a pure, total function of its input string.
//! - Results are transient projections and are never persisted.

pub mod front_matter;
pub mod stats;
