//! Home view - main application screen

use dioxus::prelude::*;

use crate::components::{ConfirmDialog, Header, NoteEditor, NoteList, Sidebar, Toasts, Toolbar};
use crate::state::AppState;

/// Home view component - the main application screen
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let pending_delete = (state.confirm_delete)();

    rsx! {
        div {
            class: "home-container",
            style: "display: flex; flex-direction: column; height: 100vh;",

            Header {}

            div {
                class: "app-body",
                style: "flex: 1; display: flex; overflow: hidden;",

                Sidebar {}

                div {
                    class: "main-content",
                    style: "flex: 1; display: flex; flex-direction: column;",

                    Toolbar {}

                    div {
                        class: "content-area",
                        style: "flex: 1; display: flex; overflow: hidden;",

                        NoteList {}
                        NoteEditor {}
                    }
                }
            }

            if let Some(note_id) = pending_delete {
                ConfirmDialog { note_id }
            }

            Toasts {}
        }
    }
}
