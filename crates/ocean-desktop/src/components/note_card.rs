//! Note card component

use dioxus::prelude::*;

use crate::theme::palette;

/// A single note row rendered in the note list.
#[component]
pub fn NoteCard(
    title: String,
    tags: Vec<String>,
    modified: String,
    is_selected: bool,
    onselect: EventHandler<MouseEvent>,
    ondelete: EventHandler<MouseEvent>,
) -> Element {
    let colors = palette();

    let bg = if is_selected {
        colors.bg_tertiary
    } else {
        colors.bg_primary
    };
    let border_left = if is_selected {
        format!("3px solid {}", colors.accent)
    } else {
        "3px solid transparent".to_string()
    };

    rsx! {
        div {
            class: if is_selected { "note-item active" } else { "note-item" },
            style: "
                display: flex;
                align-items: center;
                gap: 8px;
                padding: 12px 16px;
                border-bottom: 1px solid {colors.border_light};
                border-left: {border_left};
                cursor: pointer;
                background: {bg};
                transition: background 0.15s;
            ",
            onclick: move |evt| onselect.call(evt),

            div {
                class: "note-item-main",
                style: "flex: 1; min-width: 0;",

                div {
                    class: "note-title",
                    style: "
                        font-weight: 500;
                        margin-bottom: 4px;
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                        color: {colors.text_primary};
                    ",
                    "{title}"
                }

                div {
                    class: "note-meta",
                    style: "display: flex; justify-content: space-between; gap: 8px;",

                    div {
                        class: "tags",
                        style: "display: flex; flex-wrap: wrap; gap: 4px;",
                        for (index, tag) in tags.iter().enumerate() {
                            span {
                                key: "{index}",
                                class: "tag",
                                style: "
                                    font-size: 11px;
                                    padding: 1px 6px;
                                    border-radius: 999px;
                                    background: {colors.bg_secondary};
                                    color: {colors.accent};
                                    border: 1px solid {colors.border};
                                ",
                                "{tag}"
                            }
                        }
                    }

                    div {
                        class: "time",
                        style: "font-size: 11px; color: {colors.text_muted}; white-space: nowrap;",
                        "{modified}"
                    }
                }
            }

            button {
                class: "btn btn-danger btn-sm",
                style: "
                    padding: 4px 8px;
                    border: none;
                    border-radius: 4px;
                    background: {colors.error};
                    color: {colors.accent_text};
                    font-size: 12px;
                    cursor: pointer;
                ",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    ondelete.call(evt);
                },
                "Delete"
            }
        }
    }
}
