//! Toolbar component with actions

use dioxus::prelude::*;

use ocean_core::shell::Intent;

use crate::state::AppState;
use crate::theme::palette;

/// Toolbar with the new-note action
#[component]
pub fn Toolbar() -> Element {
    let state = use_context::<AppState>();
    let colors = palette();

    let create_note = move |_| {
        tracing::info!("Starting a new draft");
        state.dispatch(Intent::NewNoteDraft);
    };

    rsx! {
        div {
            class: "toolbar",
            style: "
                display: flex;
                padding: 10px 16px;
                border-bottom: 1px solid {colors.border};
                background: {colors.bg_primary};
            ",

            button {
                class: "btn btn-primary",
                style: "
                    padding: 6px 14px;
                    border: none;
                    border-radius: 6px;
                    background: {colors.accent};
                    color: {colors.accent_text};
                    cursor: pointer;
                ",
                onclick: create_note,
                "+ New Note"
            }
        }
    }
}
