//! Application shell: canonical client state and its transitions.
//!
//! [`ShellState::apply`] takes one [`Event`] (a user intent or the completion
//! of an API call) and returns the effects the host must carry out: API
//! requests to issue, regions to re-render, notifications to show, and
//! confirmation prompts. The state machine itself performs no I/O.

mod driver;

use crate::error::Error;
use crate::filter::{filter_notes, FilterUpdate, Filters};
use crate::models::{Note, NoteDraft, NoteId, NotePayload};
use crate::notify::Notification;

pub use driver::{execute, Shell};

/// A named user or system action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Initial load at startup
    Load,
    /// Manual reload from the header
    Refresh,
    ChangeFilter(FilterUpdate),
    NewNoteDraft,
    SelectNote(NoteId),
    SaveNote(NoteDraft),
    /// First phase of deletion; asks the UI for confirmation
    RequestDelete(NoteId),
    /// Second phase of deletion, after the user confirmed
    ConfirmDelete(NoteId),
    CancelDelete,
}

/// Why the collection is being fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    Startup,
    Manual,
}

/// A call the host must issue against the notes backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    List(LoadOrigin),
    Create(NotePayload),
    Update(NoteId, NotePayload),
    Delete(NoteId),
}

/// Result of an [`ApiRequest`], fed back into the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Listed(LoadOrigin, Result<Vec<Note>, Error>),
    Created(Result<Note, Error>),
    Updated(Result<Note, Error>),
    Deleted(NoteId, Result<(), Error>),
}

impl Completion {
    /// Completion for a request that could not be issued at all
    pub fn failed(request: ApiRequest, error: Error) -> Self {
        match request {
            ApiRequest::List(origin) => Self::Listed(origin, Err(error)),
            ApiRequest::Create(_) => Self::Created(Err(error)),
            ApiRequest::Update(..) => Self::Updated(Err(error)),
            ApiRequest::Delete(id) => Self::Deleted(id, Err(error)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Intent(Intent),
    Completed(Completion),
}

impl From<Intent> for Event {
    fn from(intent: Intent) -> Self {
        Self::Intent(intent)
    }
}

impl From<Completion> for Event {
    fn from(completion: Completion) -> Self {
        Self::Completed(completion)
    }
}

/// UI region that must be redrawn from the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    List,
    Detail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The loading flag changed
    SetLoading(bool),
    Render(Region),
    Notify(Notification),
    Request(ApiRequest),
    /// Ask the user to confirm deleting this note
    ConfirmDelete(NoteId),
}

/// The note shown in the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveNote {
    /// A note in the collection, tracked by id
    Persisted(NoteId),
    /// An unsaved draft; never part of the collection
    Draft(Note),
}

/// What the list view renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    pub notes: Vec<Note>,
    pub active_id: Option<NoteId>,
}

/// What the detail view renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailView {
    pub note: Option<Note>,
    /// Bumped on every detail render so editors reset their fields
    pub revision: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ShellState {
    notes: Vec<Note>,
    filters: Filters,
    active: Option<ActiveNote>,
    in_flight: usize,
    pending_delete: Option<NoteId>,
    detail_revision: u64,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Authoritative collection, in service order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub const fn filters(&self) -> &Filters {
        &self.filters
    }

    pub const fn active(&self) -> Option<&ActiveNote> {
        self.active.as_ref()
    }

    /// Whether any load, save or delete is in flight
    pub const fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Note awaiting delete confirmation
    pub const fn pending_delete(&self) -> Option<&NoteId> {
        self.pending_delete.as_ref()
    }

    /// Collection narrowed by the current filters
    pub fn filtered_notes(&self) -> Vec<Note> {
        filter_notes(&self.notes, &self.filters)
    }

    /// The note currently in the editor, resolved against the collection
    pub fn active_note(&self) -> Option<Note> {
        match self.active.as_ref()? {
            ActiveNote::Persisted(id) => self.find(id).cloned(),
            ActiveNote::Draft(draft) => Some(draft.clone()),
        }
    }

    pub fn active_id(&self) -> Option<&NoteId> {
        match self.active.as_ref()? {
            ActiveNote::Persisted(id) => Some(id),
            ActiveNote::Draft(_) => None,
        }
    }

    pub fn list_view(&self) -> ListView {
        ListView {
            notes: self.filtered_notes(),
            active_id: self.active_id().cloned(),
        }
    }

    pub fn detail_view(&self) -> DetailView {
        DetailView {
            note: self.active_note(),
            revision: self.detail_revision,
        }
    }

    /// Apply one event and return the effects to carry out, in order.
    pub fn apply(&mut self, event: impl Into<Event>) -> Vec<Effect> {
        let mut effects = Vec::new();
        match event.into() {
            Event::Intent(intent) => self.on_intent(intent, &mut effects),
            Event::Completed(completion) => self.on_completion(completion, &mut effects),
        }
        effects
    }

    fn on_intent(&mut self, intent: Intent, effects: &mut Vec<Effect>) {
        match intent {
            Intent::Load => self.start_load(LoadOrigin::Startup, effects),
            Intent::Refresh => self.start_load(LoadOrigin::Manual, effects),
            Intent::ChangeFilter(update) => {
                self.filters.merge(update);
                effects.push(Effect::Render(Region::List));
            }
            Intent::NewNoteDraft => {
                self.active = Some(ActiveNote::Draft(Note::draft()));
                self.render_detail(effects);
            }
            Intent::SelectNote(id) => {
                self.active = self.find(&id).map(|_| ActiveNote::Persisted(id));
                self.render_detail(effects);
            }
            Intent::SaveNote(draft) => {
                self.begin_request(effects);
                let payload = draft.payload();
                let request = match draft.id {
                    Some(id) => ApiRequest::Update(id, payload),
                    None => ApiRequest::Create(payload),
                };
                effects.push(Effect::Request(request));
            }
            Intent::RequestDelete(id) => {
                self.pending_delete = Some(id.clone());
                effects.push(Effect::ConfirmDelete(id));
            }
            Intent::ConfirmDelete(id) => {
                self.pending_delete = None;
                self.begin_request(effects);
                effects.push(Effect::Request(ApiRequest::Delete(id)));
            }
            Intent::CancelDelete => {
                self.pending_delete = None;
            }
        }
    }

    fn on_completion(&mut self, completion: Completion, effects: &mut Vec<Effect>) {
        match completion {
            Completion::Listed(origin, Ok(notes)) => {
                tracing::info!("Loaded {} notes", notes.len());
                self.notes = notes;
                let active_missing = matches!(
                    &self.active,
                    Some(ActiveNote::Persisted(id)) if self.find(id).is_none()
                );
                if active_missing {
                    self.active = None;
                }
                effects.push(Effect::Render(Region::List));
                self.render_detail(effects);
                if origin == LoadOrigin::Manual {
                    effects.push(Effect::Notify(Notification::info("Notes refreshed")));
                }
            }
            Completion::Listed(_, Err(error)) => {
                tracing::error!("Failed to load notes: {}", error);
                effects.push(Effect::Notify(Notification::error(format!(
                    "Failed to load notes: {error}"
                ))));
            }
            Completion::Updated(Ok(note)) => {
                let Some(id) = note.id.clone() else {
                    let error = Error::Decode("updated note has no id".to_string());
                    save_failed(&error, effects);
                    self.end_request(effects);
                    return;
                };
                if let Some(slot) = self.notes.iter_mut().find(|n| n.id.as_ref() == Some(&id)) {
                    *slot = note;
                }
                self.active = Some(ActiveNote::Persisted(id));
                effects.push(Effect::Notify(Notification::success("Note updated")));
                effects.push(Effect::Render(Region::List));
                self.render_detail(effects);
            }
            Completion::Created(Ok(note)) => {
                let Some(id) = note.id.clone() else {
                    let error = Error::Decode("created note has no id".to_string());
                    save_failed(&error, effects);
                    self.end_request(effects);
                    return;
                };
                self.notes.insert(0, note);
                self.active = Some(ActiveNote::Persisted(id));
                effects.push(Effect::Notify(Notification::success("Note created")));
                effects.push(Effect::Render(Region::List));
                self.render_detail(effects);
            }
            Completion::Created(Err(error)) | Completion::Updated(Err(error)) => {
                save_failed(&error, effects);
            }
            Completion::Deleted(id, Ok(())) => {
                self.notes.retain(|note| note.id.as_ref() != Some(&id));
                if self.active_id() == Some(&id) {
                    self.active = None;
                }
                effects.push(Effect::Render(Region::List));
                self.render_detail(effects);
                effects.push(Effect::Notify(Notification::success("Note deleted")));
            }
            Completion::Deleted(id, Err(error)) => {
                tracing::error!("Failed to delete note {}: {}", id, error);
                effects.push(Effect::Notify(Notification::error(format!(
                    "Delete failed: {error}"
                ))));
            }
        }
        self.end_request(effects);
    }

    fn start_load(&mut self, origin: LoadOrigin, effects: &mut Vec<Effect>) {
        self.begin_request(effects);
        effects.push(Effect::Request(ApiRequest::List(origin)));
    }

    fn begin_request(&mut self, effects: &mut Vec<Effect>) {
        self.in_flight += 1;
        if self.in_flight == 1 {
            effects.push(Effect::SetLoading(true));
        }
    }

    fn end_request(&mut self, effects: &mut Vec<Effect>) {
        if self.in_flight == 0 {
            return;
        }
        self.in_flight -= 1;
        if self.in_flight == 0 {
            effects.push(Effect::SetLoading(false));
        }
    }

    fn render_detail(&mut self, effects: &mut Vec<Effect>) {
        self.detail_revision += 1;
        effects.push(Effect::Render(Region::Detail));
    }

    fn find(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id.as_ref() == Some(id))
    }
}

fn save_failed(error: &Error, effects: &mut Vec<Effect>) {
    tracing::error!("Failed to save note: {}", error);
    effects.push(Effect::Notify(Notification::error(format!(
        "Save failed: {error}"
    ))));
}
