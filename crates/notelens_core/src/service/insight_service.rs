//! Note insight projection service.
//!
//! # Responsibility
//! - Compose statistics, front-matter split, highlights and preview into one
//!   read-only projection of a note.
//! - Skip recomputation when a note's content has not changed.
//!
//! # Invariants
//! - Statistics cover the full note content; highlights and preview cover
//!   the body only.
//! - Log events carry metadata only, never note content.

use crate::markdown::highlight::{find_highlights, HighlightSpan};
use crate::markdown::preview::{derive_markdown_preview, MarkdownPreview};
use crate::model::note::{Note, NoteId};
use crate::text::front_matter::split_front_matter_and_body;
use crate::text::stats::TextStatistics;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;

/// Derived, display-only projection of one note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteInsights {
    pub note_id: NoteId,
    /// Statistics over the full content, front matter included.
    pub stats: TextStatistics,
    /// Raw front-matter block, empty when absent.
    pub front_matter: String,
    pub body: String,
    pub highlights: Vec<HighlightSpan>,
    pub preview: MarkdownPreview,
}

/// Derives insights for one note without caching.
pub fn derive_note_insights(note: &Note) -> NoteInsights {
    let stats = TextStatistics::compute(&note.content);
    let split = split_front_matter_and_body(&note.content);
    let highlights = find_highlights(&split.body);
    let preview = derive_markdown_preview(&split.body);

    NoteInsights {
        note_id: note.id,
        stats,
        front_matter: split.front_matter,
        body: split.body,
        highlights,
        preview,
    }
}

struct CachedInsights {
    content: String,
    insights: NoteInsights,
}

/// Insight facade that recomputes a note projection only after edits.
///
/// The cache keeps one entry per note id it has seen and is never evicted
/// on its own. Callers must call [`NoteInsightService::forget`] when a note
/// is deleted or closed for good.
#[derive(Default)]
pub struct NoteInsightService {
    cache: HashMap<NoteId, CachedInsights>,
    hits: u64,
    recomputations: u64,
}

impl NoteInsightService {
    /// Creates a service with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns insights for `note`, reusing the last projection when the
    /// content is unchanged.
    pub fn insights_for(&mut self, note: &Note) -> &NoteInsights {
        let started_at = Instant::now();
        let cached = self
            .cache
            .get(&note.id)
            .is_some_and(|entry| entry.content == note.content);

        if cached {
            self.hits += 1;
        } else {
            self.recomputations += 1;
            let insights = derive_note_insights(note);
            self.cache.insert(
                note.id,
                CachedInsights {
                    content: note.content.clone(),
                    insights,
                },
            );
        }

        // Entry was either present or inserted above.
        let entry = &self.cache[&note.id];
        debug!(
            "event=note_insights module=service status=ok cached={} char_count={} duration_us={}",
            cached,
            entry.insights.stats.char_count,
            started_at.elapsed().as_micros()
        );
        &entry.insights
    }

    /// Drops the cached projection for a note, e.g. after deletion.
    pub fn forget(&mut self, note_id: NoteId) -> bool {
        self.cache.remove(&note_id).is_some()
    }

    /// Number of notes with a cached projection.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Lookups answered from the cache without recomputing.
    pub fn cache_hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that derived a fresh projection.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}
