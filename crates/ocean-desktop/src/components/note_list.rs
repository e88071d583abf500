//! Note list component

use dioxus::prelude::*;

use ocean_core::shell::Intent;

use super::NoteCard;
use crate::state::AppState;
use crate::theme::palette;

/// List of filtered notes with selection and delete actions
#[component]
pub fn NoteList() -> Element {
    let state = use_context::<AppState>();
    let view = (state.list_view)();
    let colors = palette();

    rsx! {
        div {
            class: "note-list",
            style: "
                width: 300px;
                border-right: 1px solid {colors.border};
                overflow-y: auto;
                background: {colors.bg_primary};
            ",

            if view.notes.is_empty() {
                div {
                    class: "empty",
                    style: "
                        padding: 20px;
                        text-align: center;
                        color: {colors.text_muted};
                    ",
                    "No notes found. Create a new one."
                }
            } else {
                for note in view.notes {
                    if let Some(note_id) = note.id.clone() {
                        {
                            let is_selected = view.active_id.as_ref() == Some(&note_id);
                            let select_id = note_id.clone();
                            let delete_id = note_id.clone();

                            rsx! {
                                NoteCard {
                                    key: "{note_id}",
                                    title: note.display_title().to_string(),
                                    tags: note.tags.clone(),
                                    modified: note.last_modified_label(),
                                    is_selected,
                                    onselect: move |_| {
                                        state.dispatch(Intent::SelectNote(select_id.clone()));
                                    },
                                    ondelete: move |_| {
                                        state.dispatch(Intent::RequestDelete(delete_id.clone()));
                                    },
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
