//! Runs shell transitions against a notes backend.

use std::collections::VecDeque;

use super::{ApiRequest, Completion, Effect, Event, Intent, ShellState};
use crate::api::NotesBackend;

/// Issue one API request and wrap its outcome as a [`Completion`].
pub async fn execute<B: NotesBackend + ?Sized>(backend: &B, request: ApiRequest) -> Completion {
    match request {
        ApiRequest::List(origin) => Completion::Listed(origin, backend.list().await),
        ApiRequest::Create(payload) => Completion::Created(backend.create(&payload).await),
        ApiRequest::Update(id, payload) => {
            Completion::Updated(backend.update(&id, &payload).await)
        }
        ApiRequest::Delete(id) => {
            let result = backend.delete(&id).await;
            Completion::Deleted(id, result)
        }
    }
}

/// Shell state bound to a backend.
///
/// `dispatch` runs an intent to completion: requests are executed in order
/// and their completions applied before returning.
#[derive(Debug)]
pub struct Shell<B> {
    state: ShellState,
    backend: B,
}

impl<B: NotesBackend> Shell<B> {
    pub fn new(backend: B) -> Self {
        Self {
            state: ShellState::new(),
            backend,
        }
    }

    pub const fn state(&self) -> &ShellState {
        &self.state
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Apply `intent`, execute every request it triggers, and return the
    /// remaining effects (renders, notifications, prompts) in order.
    pub async fn dispatch(&mut self, intent: Intent) -> Vec<Effect> {
        let mut queue = VecDeque::from([Event::from(intent)]);
        let mut emitted = Vec::new();

        while let Some(event) = queue.pop_front() {
            for effect in self.state.apply(event) {
                match effect {
                    Effect::Request(request) => {
                        let completion = execute(&self.backend, request).await;
                        queue.push_back(completion.into());
                    }
                    other => emitted.push(other),
                }
            }
        }

        emitted
    }
}
