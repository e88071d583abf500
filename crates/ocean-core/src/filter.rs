//! Note list filtering (search query + tag).

use serde::{Deserialize, Serialize};

use crate::models::{is_all_tag, Note, TAG_ALL};

/// Current filter panel values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    /// Free-text query matched against title and content
    pub query: String,
    /// Selected tag; `"All"` or empty means no restriction
    pub tag: String,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            query: String::new(),
            tag: TAG_ALL.to_string(),
        }
    }
}

impl Filters {
    /// Merge a partial update into these filters
    pub fn merge(&mut self, update: FilterUpdate) {
        if let Some(query) = update.query {
            self.query = query;
        }
        if let Some(tag) = update.tag {
            self.tag = tag;
        }
    }

    /// Whether a single note passes both predicates
    #[must_use]
    pub fn matches(&self, note: &Note) -> bool {
        note_matches_query(note, &self.query.to_lowercase()) && note_matches_tag(note, &self.tag)
    }
}

/// Partial filter change reported by the filter panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub query: Option<String>,
    pub tag: Option<String>,
}

impl FilterUpdate {
    /// Update only the query
    #[must_use]
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            tag: None,
        }
    }

    /// Update only the tag
    #[must_use]
    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            query: None,
            tag: Some(tag.into()),
        }
    }
}

/// Filter notes by case-insensitive text query and tag.
///
/// The result keeps the input order.
#[must_use]
pub fn filter_notes(notes: &[Note], filters: &Filters) -> Vec<Note> {
    let query = filters.query.to_lowercase();

    notes
        .iter()
        .filter(|note| note_matches_query(note, &query))
        .filter(|note| note_matches_tag(note, &filters.tag))
        .cloned()
        .collect()
}

fn note_matches_query(note: &Note, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    note.title.to_lowercase().contains(query) || note.content.to_lowercase().contains(query)
}

fn note_matches_tag(note: &Note, tag: &str) -> bool {
    is_all_tag(tag) || note.has_tag(tag)
}
