//! Note entity.
//!
//! # Responsibility
//! - Carry the raw markdown content the presentation layer edits.
//! - Validate identity on construction and deserialization.
//!
//! # Invariants
//! - `id` is never the nil UUID.
//! - `content` is stored verbatim; no normalization happens here.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a note.
pub type NoteId = Uuid;

/// Validation failure for note construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// The nil UUID cannot identify a note.
    NilId,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "note id must not be the nil uuid"),
        }
    }
}

impl Error for NoteValidationError {}

/// Raw markdown note as handed over by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NoteWire")]
pub struct Note {
    pub id: NoteId,
    /// Markdown source, optionally starting with a front-matter block.
    pub content: String,
    /// Unix epoch milliseconds of the last edit, when known.
    pub updated_at: Option<i64>,
}

impl Note {
    /// Creates a note with a generated id.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            updated_at: None,
        }
    }

    /// Creates a note with a caller-provided id.
    ///
    /// Used when identity already exists in the note store.
    ///
    /// # Errors
    /// - Returns [`NoteValidationError::NilId`] for the nil UUID.
    pub fn with_id(id: NoteId, content: impl Into<String>) -> Result<Self, NoteValidationError> {
        let note = Self {
            id,
            content: content.into(),
            updated_at: None,
        };
        note.validate()?;
        Ok(note)
    }

    /// Checks note invariants.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.id.is_nil() {
            return Err(NoteValidationError::NilId);
        }
        Ok(())
    }

    /// Replaces the content and stamps the edit time.
    pub fn edit(&mut self, content: impl Into<String>, updated_at: i64) {
        self.content = content.into();
        self.updated_at = Some(updated_at);
    }
}

#[derive(Deserialize)]
struct NoteWire {
    id: NoteId,
    content: String,
    #[serde(default)]
    updated_at: Option<i64>,
}

impl TryFrom<NoteWire> for Note {
    type Error = NoteValidationError;

    fn try_from(value: NoteWire) -> Result<Self, Self::Error> {
        let note = Self {
            id: value.id,
            content: value.content,
            updated_at: value.updated_at,
        };
        note.validate()?;
        Ok(note)
    }
}
