//! Main application component

use dioxus::prelude::*;

use ocean_core::api::NotesApi;
use ocean_core::config::ClientConfig;
use ocean_core::notify::NotificationInbox;
use ocean_core::shell::Intent;

use crate::state::AppState;
use crate::theme::palette;
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    let state = use_context_provider(|| {
        let config = ClientConfig::from_env();
        let inbox = NotificationInbox::new();
        let api = match NotesApi::from_config(&config, inbox.error_sink()) {
            Ok(api) => {
                tracing::info!("Notes API base URL: '{}'", api.base_url());
                Some(api)
            }
            Err(e) => {
                tracing::error!("Failed to create notes client: {}", e);
                None
            }
        };
        AppState::new(api, inbox)
    });

    let mut initialized = use_signal(|| false);

    // Initial load (only once)
    use_effect(move || {
        if initialized() {
            return;
        }
        initialized.set(true); // Mark immediately to prevent a second load
        state.dispatch(Intent::Load);
    });

    let colors = palette();
    let loading_class = if (state.loading)() {
        "app-container is-loading"
    } else {
        "app-container"
    };

    rsx! {
        div {
            class: "{loading_class}",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_secondary};
                color: {colors.text_primary};
            ",
            Home {}
        }
    }
}
