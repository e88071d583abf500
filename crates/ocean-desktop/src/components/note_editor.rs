//! Note editor component

use dioxus::document;
use dioxus::prelude::*;

use ocean_core::models::NoteDraft;
use ocean_core::shell::Intent;
use ocean_core::NoteId;

use crate::state::AppState;
use crate::theme::palette;

/// Window-level Ctrl+S / Cmd+S listener that reports each press back to Rust
const INSTALL_SAVE_SHORTCUT: &str = r#"
if (window.__oceanSaveShortcut) {
    window.removeEventListener("keydown", window.__oceanSaveShortcut);
}
window.__oceanSaveShortcut = (event) => {
    if ((event.ctrlKey || event.metaKey) && event.key.toLowerCase() === "s") {
        event.preventDefault();
        dioxus.send(true);
    }
};
window.addEventListener("keydown", window.__oceanSaveShortcut);
"#;

const REMOVE_SAVE_SHORTCUT: &str = r#"
if (window.__oceanSaveShortcut) {
    window.removeEventListener("keydown", window.__oceanSaveShortcut);
    window.__oceanSaveShortcut = undefined;
}
"#;

/// Editor for the active note, or a placeholder when nothing is selected.
///
/// Fields are reset from the shell whenever it re-renders the detail view.
/// Saving hands a normalized draft to the shell; the editor never mutates
/// notes itself.
#[component]
pub fn NoteEditor() -> Element {
    let state = use_context::<AppState>();
    let view = (state.detail_view)();
    let colors = palette();

    // Local form state
    let mut title = use_signal(String::new);
    let mut tags = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut note_id = use_signal(|| None::<NoteId>);
    let mut last_revision = use_signal(|| None::<u64>);

    // Reset fields when the shell re-renders the detail view
    use_effect(move || {
        let view = (state.detail_view)();
        if Some(view.revision) == *last_revision.peek() {
            return;
        }
        last_revision.set(Some(view.revision));
        match view.note {
            Some(note) => {
                title.set(note.title.clone());
                tags.set(note.tags_text());
                content.set(note.content.clone());
                note_id.set(note.id);
            }
            None => {
                title.set(String::new());
                tags.set(String::new());
                content.set(String::new());
                note_id.set(None);
            }
        }
    });

    let save = move || {
        if *state.loading.peek() {
            tracing::debug!("Save ignored while a request is in flight");
            return;
        }
        let draft = NoteDraft::from_form(note_id(), &title.read(), &tags.read(), content());
        state.dispatch(Intent::SaveNote(draft));
    };

    let Some(_) = view.note else {
        return rsx! {
            div {
                class: "note-editor empty",
                style: "
                    flex: 1;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: {colors.text_muted};
                    background: {colors.bg_secondary};
                ",
                div {
                    class: "placeholder",
                    "Select a note from the list or create a new one."
                }
            }
        };
    };

    let loading = (state.loading)();
    let input_style = format!(
        "width: 100%; box-sizing: border-box; padding: 8px 12px; border: 1px solid {}; \
         border-radius: 6px; background: {}; color: {}; outline: none;",
        colors.border, colors.bg_primary, colors.text_primary
    );

    rsx! {
        div {
            class: "note-editor",
            style: "
                flex: 1;
                display: flex;
                flex-direction: column;
                gap: 12px;
                padding: 16px;
                background: {colors.bg_primary};
            ",

            SaveShortcut { onsave: move |()| save() }

            input {
                id: "title",
                r#type: "text",
                placeholder: "Title",
                value: "{title}",
                oninput: move |evt| title.set(evt.value()),
                style: "{input_style} font-size: 18px; font-weight: 600;",
            }

            input {
                id: "tags",
                r#type: "text",
                placeholder: "Tags (comma separated)",
                value: "{tags}",
                oninput: move |evt| tags.set(evt.value()),
                style: "{input_style}",
            }

            textarea {
                id: "content",
                placeholder: "Start typing...",
                value: "{content}",
                oninput: move |evt| content.set(evt.value()),
                style: "{input_style} flex: 1; resize: none; line-height: 1.6; font-family: inherit;",
            }

            div {
                class: "editor-actions",
                style: "display: flex; justify-content: flex-end;",
                button {
                    class: "btn btn-primary",
                    disabled: loading,
                    style: "
                        padding: 6px 14px;
                        border: none;
                        border-radius: 6px;
                        background: {colors.accent};
                        color: {colors.accent_text};
                        cursor: pointer;
                    ",
                    onclick: move |_| save(),
                    "Save"
                }
            }
        }
    }
}

/// Registers the save shortcut on the window while mounted, so it works
/// wherever focus is.
#[component]
fn SaveShortcut(onsave: EventHandler<()>) -> Element {
    use_future(move || async move {
        let mut listener = document::eval(INSTALL_SAVE_SHORTCUT);
        while listener.recv::<bool>().await.is_ok() {
            onsave.call(());
        }
        tracing::debug!("Save shortcut listener closed");
    });

    use_drop(|| {
        let _ = document::eval(REMOVE_SAVE_SHORTCUT);
    });

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_shortcut_listens_on_window_for_ctrl_and_cmd() {
        assert!(INSTALL_SAVE_SHORTCUT.contains(r#"window.addEventListener("keydown""#));
        assert!(INSTALL_SAVE_SHORTCUT.contains("event.ctrlKey || event.metaKey"));
        assert!(INSTALL_SAVE_SHORTCUT.contains("event.preventDefault()"));
    }

    #[test]
    fn test_save_shortcut_removal_targets_installed_handler() {
        assert!(REMOVE_SAVE_SHORTCUT
            .contains(r#"window.removeEventListener("keydown", window.__oceanSaveShortcut)"#));
    }
}
