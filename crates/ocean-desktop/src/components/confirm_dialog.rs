//! Delete confirmation dialog

use dioxus::prelude::*;

use ocean_core::shell::Intent;
use ocean_core::NoteId;

use crate::state::AppState;
use crate::theme::palette;

/// Modal asking the user to confirm a pending delete
#[component]
pub fn ConfirmDialog(note_id: NoteId) -> Element {
    let mut state = use_context::<AppState>();
    let colors = palette();

    let confirm_id = note_id.clone();
    let on_confirm = move |_| {
        state.confirm_delete.set(None);
        state.dispatch(Intent::ConfirmDelete(confirm_id.clone()));
    };

    let on_cancel = move |_| {
        state.confirm_delete.set(None);
        state.dispatch(Intent::CancelDelete);
    };

    rsx! {
        div {
            class: "modal-backdrop",
            style: "
                position: fixed;
                inset: 0;
                background: rgba(17, 24, 39, 0.4);
                display: flex;
                align-items: center;
                justify-content: center;
                z-index: 1000;
            ",
            onclick: on_cancel,

            div {
                class: "modal",
                style: "
                    background: {colors.bg_primary};
                    border-radius: 10px;
                    padding: 20px 24px;
                    min-width: 300px;
                    box-shadow: 0 20px 40px rgba(17, 24, 39, 0.2);
                ",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),

                h3 {
                    style: "margin: 0 0 8px 0; color: {colors.text_primary};",
                    "Delete this note?"
                }
                p {
                    style: "margin: 0 0 16px 0; font-size: 13px; color: {colors.text_secondary};",
                    "This cannot be undone."
                }

                div {
                    style: "display: flex; justify-content: flex-end; gap: 8px;",
                    button {
                        class: "btn",
                        style: "
                            padding: 6px 14px;
                            border: 1px solid {colors.border};
                            border-radius: 6px;
                            background: {colors.bg_primary};
                            color: {colors.text_primary};
                            cursor: pointer;
                        ",
                        onclick: on_cancel,
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        style: "
                            padding: 6px 14px;
                            border: none;
                            border-radius: 6px;
                            background: {colors.error};
                            color: {colors.accent_text};
                            cursor: pointer;
                        ",
                        onclick: on_confirm,
                        "Delete"
                    }
                }
            }
        }
    }
}
