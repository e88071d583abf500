//! Notification toasts

use dioxus::prelude::*;

use ocean_core::notify::NotificationKind;

use crate::state::AppState;
use crate::theme::palette;

const TOAST_STYLES: &str = r#"
.toast-container {
    position: fixed;
    right: 16px;
    bottom: 16px;
    z-index: 9999;
    display: flex;
    flex-direction: column;
    gap: 8px;
    max-width: 360px;
}
.toast {
    border-radius: 8px;
    border: 1px solid #dbe3ef;
    border-left-width: 4px;
    background: #ffffff;
    box-shadow: 0 10px 30px rgba(17, 24, 39, 0.12);
    padding: 10px 12px;
    color: #111827;
    display: flex;
    gap: 10px;
    align-items: flex-start;
}
.toast-close {
    border: none;
    background: transparent;
    cursor: pointer;
    color: #9ca3af;
    font-size: 14px;
}
"#;

fn kind_name(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "success",
        NotificationKind::Error => "error",
        NotificationKind::Info => "info",
    }
}

/// Stack of visible notifications. Each dismisses itself after a few
/// seconds, or earlier from its close button.
#[component]
pub fn Toasts() -> Element {
    let state = use_context::<AppState>();
    let colors = palette();
    let toasts = (state.toasts)();

    rsx! {
        style { "{TOAST_STYLES}" }

        div {
            class: "toast-container",
            for toast in toasts {
                {
                    let accent = match toast.notification.kind {
                        NotificationKind::Success => colors.success,
                        NotificationKind::Error => colors.error,
                        NotificationKind::Info => colors.info,
                    };
                    let id = toast.id;

                    rsx! {
                        div {
                            key: "{id}",
                            class: "toast",
                            "data-type": kind_name(toast.notification.kind),
                            style: "border-left-color: {accent};",
                            span {
                                style: "flex: 1; font-size: 13px;",
                                "{toast.notification.message}"
                            }
                            button {
                                class: "toast-close",
                                title: "Dismiss",
                                onclick: move |_| state.dismiss(id),
                                "×"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_name_matches_style_selectors() {
        assert_eq!(kind_name(NotificationKind::Success), "success");
        assert_eq!(kind_name(NotificationKind::Error), "error");
        assert_eq!(kind_name(NotificationKind::Info), "info");
    }
}
