//! Note model

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::tag::{has_tag, parse_tags};

/// Title shown for notes whose title is empty
pub const UNTITLED: &str = "Untitled";

/// Display format for last-modified labels (local time)
const TIMESTAMP_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Server-assigned note identifier.
///
/// The service owns the id format, so this is an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Wrap a server-assigned id
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A timestamp as sent by the service: RFC 3339 text or Unix milliseconds.
///
/// Kept verbatim; parsing only happens for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Millis(i64),
    Text(String),
}

impl Timestamp {
    /// Current time as an RFC 3339 timestamp
    #[must_use]
    pub fn now() -> Self {
        Self::Text(Utc::now().to_rfc3339())
    }

    /// Parse into a UTC instant, if the value is a recognizable timestamp
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Millis(ms) => DateTime::from_timestamp_millis(*ms),
            Self::Text(raw) => {
                let raw = raw.trim();
                DateTime::parse_from_rfc3339(raw)
                    .map(|value| value.with_timezone(&Utc))
                    .ok()
                    .or_else(|| {
                        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                            .ok()
                            .map(|naive| naive.and_utc())
                    })
            }
        }
    }

    /// Local-time label; empty when the value cannot be parsed
    #[must_use]
    pub fn display_label(&self) -> String {
        self.to_datetime().map_or_else(String::new, |value| {
            value
                .with_timezone(&Local)
                .format(TIMESTAMP_DISPLAY_FORMAT)
                .to_string()
        })
    }
}

/// A note as exchanged with the notes service.
///
/// `id` is `None` only for an unsaved draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(default)]
    pub id: Option<NoteId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    /// Ordered, not deduplicated
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

impl Note {
    /// Create an unsaved draft with empty fields.
    ///
    /// Both timestamps are set to now; the service assigns the real values on save.
    #[must_use]
    pub fn draft() -> Self {
        let now = Timestamp::now();
        Self {
            id: None,
            title: String::new(),
            content: String::new(),
            tags: Vec::new(),
            created_at: Some(now.clone()),
            updated_at: Some(now),
        }
    }

    /// Whether this note has not been persisted yet
    #[must_use]
    pub const fn is_draft(&self) -> bool {
        self.id.is_none()
    }

    /// Title for display, falling back to "Untitled"
    #[must_use]
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }

    /// `updatedAt`, falling back to `createdAt`
    #[must_use]
    pub fn last_modified(&self) -> Option<&Timestamp> {
        self.updated_at.as_ref().or(self.created_at.as_ref())
    }

    /// Formatted last-modified label; empty if missing or unparseable
    #[must_use]
    pub fn last_modified_label(&self) -> String {
        self.last_modified()
            .map(Timestamp::display_label)
            .unwrap_or_default()
    }

    /// Case-insensitive tag membership
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        has_tag(&self.tags, tag)
    }

    /// Tags joined for the comma-separated editor field
    #[must_use]
    pub fn tags_text(&self) -> String {
        self.tags.join(", ")
    }
}

/// Body of create and update requests
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePayload {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<&Note> for NotePayload {
    fn from(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            tags: note.tags.clone(),
        }
    }
}

/// Normalized editor contents handed to the shell on save
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    /// `None` for a note that has never been saved
    pub id: Option<NoteId>,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl NoteDraft {
    /// Build a draft from raw form fields.
    ///
    /// The title is trimmed, tags are parsed from the comma-separated field and
    /// content is kept untouched.
    #[must_use]
    pub fn from_form(
        id: Option<NoteId>,
        title: &str,
        tags: &str,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.trim().to_string(),
            content: content.into(),
            tags: parse_tags(tags),
        }
    }

    /// Request body for this draft
    #[must_use]
    pub fn payload(&self) -> NotePayload {
        NotePayload {
            title: self.title.clone(),
            content: self.content.clone(),
            tags: self.tags.clone(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
