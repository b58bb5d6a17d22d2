//! Back-to-top control.

use dioxus::prelude::*;
use promptgallery_ui::{class_list, ButtonVariant};

#[component]
pub fn BackToTop(visible: bool, onclick: EventHandler<()>) -> Element {
    let class = class_list(
        ButtonVariant::Ghost.class(),
        Some(if visible { "back-to-top visible" } else { "back-to-top" }),
    );

    rsx! {
        button {
            id: "backToTop",
            class: "{class}",
            r#type: "button",
            "aria-label": "Back to top",
            onclick: move |_| onclick.call(()),
            "↑"
        }
    }
}
