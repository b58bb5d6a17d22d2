//! Loading indicators.

use dioxus::prelude::*;

/// Inline loading line of the gallery; shows `message` instead of the
/// spinner once loading failed.
#[component]
pub fn LoadingIndicator(#[props(default)] message: String) -> Element {
    let failed = !message.is_empty();

    rsx! {
        div {
            id: "loading",
            class: if failed { "loading failed" } else { "loading" },
            if failed {
                "{message}"
            } else {
                span { class: "spinner", "aria-hidden": "true" }
                " Loading prompts..."
            }
        }
    }
}

/// Full-area overlay covering the wiki frame while it loads
#[component]
pub fn LoadingOverlay(visible: bool) -> Element {
    rsx! {
        div {
            id: "loadingOverlay",
            class: if visible { "loading-overlay visible" } else { "loading-overlay" },
            "aria-hidden": if visible { "false" } else { "true" },
            span { class: "spinner" }
        }
    }
}
