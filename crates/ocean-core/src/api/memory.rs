//! In-process notes backend.
//!
//! Behaves like the notes service (new notes are prepended, ids and
//! timestamps are assigned on write) without any network. Failures can be
//! injected to exercise error paths.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::NotesBackend;
use crate::error::{Error, Result};
use crate::models::{Note, NoteId, NotePayload, Timestamp};

#[derive(Debug, Default)]
pub struct InMemoryBackend {
    notes: Mutex<Vec<Note>>,
    failures: Mutex<VecDeque<Error>>,
    next_id: AtomicU64,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-populated with notes, kept in the given order
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: Mutex::new(notes),
            ..Self::default()
        }
    }

    /// Make the next call fail with `error`. Queued failures are consumed in order.
    pub fn fail_next(&self, error: Error) {
        self.lock_failures().push_back(error);
    }

    /// Snapshot of the stored notes
    pub fn notes(&self) -> Vec<Note> {
        self.lock_notes().clone()
    }

    fn take_failure(&self) -> Result<()> {
        self.lock_failures().pop_front().map_or(Ok(()), Err)
    }

    fn assign_id(&self) -> NoteId {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        NoteId::new(format!("mem-{id}"))
    }

    fn lock_notes(&self) -> std::sync::MutexGuard<'_, Vec<Note>> {
        self.notes
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn lock_failures(&self) -> std::sync::MutexGuard<'_, VecDeque<Error>> {
        self.failures
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl NotesBackend for InMemoryBackend {
    async fn list(&self) -> Result<Vec<Note>> {
        self.take_failure()?;
        Ok(self.notes())
    }

    async fn get(&self, id: &NoteId) -> Result<Note> {
        self.take_failure()?;
        self.lock_notes()
            .iter()
            .find(|note| note.id.as_ref() == Some(id))
            .cloned()
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    async fn create(&self, payload: &NotePayload) -> Result<Note> {
        self.take_failure()?;
        let now = Timestamp::now();
        let note = Note {
            id: Some(self.assign_id()),
            title: payload.title.clone(),
            content: payload.content.clone(),
            tags: payload.tags.clone(),
            created_at: Some(now.clone()),
            updated_at: Some(now),
        };
        self.lock_notes().insert(0, note.clone());
        Ok(note)
    }

    async fn update(&self, id: &NoteId, payload: &NotePayload) -> Result<Note> {
        self.take_failure()?;
        let mut notes = self.lock_notes();
        let note = notes
            .iter_mut()
            .find(|note| note.id.as_ref() == Some(id))
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        note.title.clone_from(&payload.title);
        note.content.clone_from(&payload.content);
        note.tags.clone_from(&payload.tags);
        note.updated_at = Some(Timestamp::now());
        Ok(note.clone())
    }

    async fn delete(&self, id: &NoteId) -> Result<()> {
        self.take_failure()?;
        let mut notes = self.lock_notes();
        let before = notes.len();
        notes.retain(|note| note.id.as_ref() != Some(id));
        if notes.len() == before {
            return Err(Error::NotFound(id.to_string()));
        }
        Ok(())
    }
}
