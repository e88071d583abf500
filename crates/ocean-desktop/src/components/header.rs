//! Header bar with brand and refresh action

use dioxus::prelude::*;

use ocean_core::shell::Intent;

use crate::state::AppState;
use crate::theme::palette;

const DOCS_URL: &str = "https://v1.openapi.design/";

#[component]
pub fn Header() -> Element {
    let state = use_context::<AppState>();
    let colors = palette();
    let loading = (state.loading)();

    rsx! {
        header {
            class: "app-header",
            style: "
                display: flex;
                align-items: center;
                justify-content: space-between;
                padding: 10px 16px;
                background: {colors.bg_primary};
                border-bottom: 1px solid {colors.border};
            ",

            div {
                class: "brand",
                style: "display: flex; align-items: center; gap: 8px;",
                div {
                    style: "
                        width: 24px;
                        height: 24px;
                        border-radius: 6px;
                        background: linear-gradient(135deg, {colors.accent}, {colors.highlight});
                    ",
                }
                span {
                    style: "font-weight: 600; font-size: 16px;",
                    "Ocean Notes"
                }
            }

            div {
                class: "header-actions",
                style: "display: flex; gap: 8px; align-items: center;",

                button {
                    class: "btn btn-ghost",
                    disabled: loading,
                    style: "
                        padding: 6px 12px;
                        border: 1px solid {colors.border};
                        border-radius: 6px;
                        background: transparent;
                        color: {colors.text_primary};
                        cursor: pointer;
                    ",
                    onclick: move |_| state.dispatch(Intent::Refresh),
                    "Refresh"
                }

                a {
                    class: "btn btn-amber",
                    href: DOCS_URL,
                    target: "_blank",
                    rel: "noreferrer",
                    style: "
                        padding: 6px 12px;
                        border-radius: 6px;
                        background: {colors.highlight};
                        color: {colors.accent_text};
                        text-decoration: none;
                    ",
                    "Docs"
                }
            }
        }
    }
}
