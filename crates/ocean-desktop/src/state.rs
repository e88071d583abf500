//! Application state management
//!
//! The shell state machine lives in a signal; components read the list and
//! detail snapshots, which are refreshed only when the shell asks for a render.

use dioxus::prelude::*;

use ocean_core::api::NotesApi;
use ocean_core::notify::{Notification, NotificationInbox, NOTIFICATION_TTL};
use ocean_core::shell::{
    execute, Completion, DetailView, Effect, Event, Intent, ListView, Region, ShellState,
};
use ocean_core::{Error, NoteId};

/// A notification currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Canonical client state
    pub shell: Signal<ShellState>,
    /// Snapshot rendered by the note list
    pub list_view: Signal<ListView>,
    /// Snapshot rendered by the note editor
    pub detail_view: Signal<DetailView>,
    /// Whether a load, save or delete is in flight
    pub loading: Signal<bool>,
    /// Note awaiting delete confirmation
    pub confirm_delete: Signal<Option<NoteId>>,
    /// Visible notifications, oldest first
    pub toasts: Signal<Vec<Toast>>,
    toast_seq: Signal<u64>,
    /// Notes service client; `None` if it could not be constructed
    api: Signal<Option<NotesApi>>,
    /// Errors reported by the API client, drained after each request
    inbox: Signal<NotificationInbox>,
}

impl AppState {
    /// Create the state signals. Must be called from a component.
    pub fn new(api: Option<NotesApi>, inbox: NotificationInbox) -> Self {
        Self {
            shell: Signal::new(ShellState::new()),
            list_view: Signal::new(ListView::default()),
            detail_view: Signal::new(DetailView::default()),
            loading: Signal::new(false),
            confirm_delete: Signal::new(None),
            toasts: Signal::new(Vec::new()),
            toast_seq: Signal::new(0),
            api: Signal::new(api),
            inbox: Signal::new(inbox),
        }
    }

    /// Dispatch a user intent to the shell
    pub fn dispatch(self, intent: Intent) {
        tracing::debug!("Dispatching {:?}", intent);
        self.apply(intent);
    }

    fn apply(self, event: impl Into<Event>) {
        let mut shell = self.shell;
        let effects = shell.write().apply(event);
        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(self, effect: Effect) {
        let mut state = self;
        match effect {
            Effect::SetLoading(value) => state.loading.set(value),
            Effect::Render(Region::List) => {
                let view = state.shell.peek().list_view();
                state.list_view.set(view);
            }
            Effect::Render(Region::Detail) => {
                let view = state.shell.peek().detail_view();
                state.detail_view.set(view);
            }
            Effect::Notify(notification) => state.notify(notification),
            Effect::ConfirmDelete(id) => state.confirm_delete.set(Some(id)),
            Effect::Request(request) => {
                let api = state.api.peek().clone();
                spawn(async move {
                    let completion = match api {
                        Some(api) => execute(&api, request).await,
                        None => Completion::failed(
                            request,
                            Error::Config("notes client is not available".to_string()),
                        ),
                    };
                    state.flush_inbox();
                    state.apply(completion);
                });
            }
        }
    }

    /// Show a notification and schedule its dismissal
    pub fn notify(self, notification: Notification) {
        let mut state = self;
        let id = *state.toast_seq.peek() + 1;
        state.toast_seq.set(id);
        state.toasts.write().push(Toast { id, notification });

        spawn(async move {
            tokio::time::sleep(NOTIFICATION_TTL).await;
            state.dismiss(id);
        });
    }

    /// Remove a notification early
    pub fn dismiss(self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|toast| toast.id != id);
    }

    fn flush_inbox(self) {
        let pending = self.inbox.peek().drain();
        for notification in pending {
            self.notify(notification);
        }
    }
}
