//! Copy Button Component
//!
//! Copies a prompt and flashes success or failure on the button itself.

use dioxus::prelude::*;
use promptgallery_core::clipboard::{revert_after, CopyButtonState};
use promptgallery_ui::{class_list, ButtonVariant};

use crate::clipboard::copy_to_clipboard;

#[component]
pub fn CopyButton(
    /// Text copied on click
    text: String,
) -> Element {
    let mut state = use_signal(CopyButtonState::default);

    let on_copy = move |_| {
        let text = text.clone();
        spawn(async move {
            let outcome = copy_to_clipboard(&text).await;
            let generation = state.write().on_outcome(&outcome);
            revert_after(generation, |generation| state.write().revert(generation)).await;
        });
    };

    let feedback = state.read().feedback();
    let class = class_list(ButtonVariant::Primary.class(), Some(feedback.class()));

    rsx! {
        button {
            id: "copyBtn",
            class: "{class}",
            onclick: on_copy,
            span { class: "copy-icon", "{feedback.icon()}" }
            span { class: "copy-text", "{feedback.text()}" }
        }
    }
}
