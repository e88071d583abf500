//! Data models for Ocean Notes

mod note;
mod tag;

pub use note::{Note, NoteDraft, NoteId, NotePayload, Timestamp, UNTITLED};
pub use tag::{has_tag, is_all_tag, parse_tags, TAG_ALL, TAG_CATALOG};
