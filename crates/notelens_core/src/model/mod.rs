//! Domain model for notes handed to the analyzers.
//!
//! # Responsibility
//! - Define the note entity that supplies `content` to derived projections.
//!
//! # Invariants
//! - Every note is identified by a stable, non-nil `NoteId`.
//! - Derived values (statistics, split, preview) are never stored on the note.

pub mod note;
