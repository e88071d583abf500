//! Sidebar with the search and tag filters

use dioxus::prelude::*;

use ocean_core::filter::FilterUpdate;
use ocean_core::models::TAG_CATALOG;
use ocean_core::shell::Intent;

use crate::state::AppState;
use crate::theme::palette;

/// Filter inputs. Reports every change straight to the shell; filtering
/// itself happens there.
#[component]
pub fn Sidebar() -> Element {
    let state = use_context::<AppState>();
    let colors = palette();
    let filters = state.shell.read().filters().clone();

    rsx! {
        aside {
            class: "sidebar",
            style: "
                width: 220px;
                background: {colors.bg_primary};
                border-right: 1px solid {colors.border};
                padding: 16px;
                overflow-y: auto;
                display: flex;
                flex-direction: column;
                gap: 16px;
            ",

            div {
                class: "sidebar-section",
                SectionLabel { text: "Search" }
                input {
                    r#type: "text",
                    placeholder: "Search notes...",
                    value: "{filters.query}",
                    oninput: move |evt| {
                        state.dispatch(Intent::ChangeFilter(FilterUpdate::query(evt.value())));
                    },
                    style: "
                        width: 100%;
                        box-sizing: border-box;
                        padding: 8px 12px;
                        border: 1px solid {colors.border};
                        border-radius: 6px;
                        background: {colors.bg_primary};
                        color: {colors.text_primary};
                        outline: none;
                    ",
                }
            }

            div {
                class: "sidebar-section",
                SectionLabel { text: "Tag" }
                select {
                    value: "{filters.tag}",
                    onchange: move |evt| {
                        state.dispatch(Intent::ChangeFilter(FilterUpdate::tag(evt.value())));
                    },
                    style: "
                        width: 100%;
                        padding: 8px 10px;
                        border: 1px solid {colors.border};
                        border-radius: 6px;
                        background: {colors.bg_primary};
                        color: {colors.text_primary};
                    ",
                    for tag in TAG_CATALOG {
                        option {
                            key: "{tag}",
                            value: "{tag}",
                            selected: filters.tag == tag,
                            "{tag}"
                        }
                    }
                }
            }

            p {
                class: "hint",
                style: "font-size: 12px; color: {colors.text_muted}; margin: 0;",
                "Tip: Use comma-separated tags in the editor."
            }
        }
    }
}

#[component]
fn SectionLabel(text: &'static str) -> Element {
    let colors = palette();

    rsx! {
        label {
            style: "
                display: block;
                font-size: 12px;
                font-weight: 600;
                margin-bottom: 6px;
                color: {colors.text_secondary};
            ",
            "{text}"
        }
    }
}
