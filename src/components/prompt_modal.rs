//! Prompt Detail Modal
//!
//! Full view of one record: image, title, complete prompt, all tags and a
//! copy button. Closes on the close button or a backdrop click; Escape is
//! handled by the page.

use dioxus::prelude::*;
use promptgallery_core::gallery::modal_tags;
use promptgallery_core::{CloseTrigger, PromptRecord};
use promptgallery_ui::{CloseButton, TagList};

use super::CopyButton;

/// Prompt Detail Modal
///
/// # Example
///
/// ```rust,ignore
/// if let Some(record) = store.read().selected_record().cloned() {
///     rsx! {
///         PromptModal {
///             record: record,
///             on_close: move |trigger| store.write().close_modal(trigger),
///         }
///     }
/// }
/// ```
#[component]
pub fn PromptModal(
    /// Record to show
    record: PromptRecord,
    /// Callback when the modal is dismissed
    on_close: EventHandler<CloseTrigger>,
) -> Element {
    let tags = modal_tags(&record);

    rsx! {
        div {
            id: "modal",
            class: "modal active",
            role: "dialog",
            "aria-modal": "true",
            onclick: move |_| on_close.call(CloseTrigger::Backdrop),

            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),

                CloseButton { onclick: move |_| on_close.call(CloseTrigger::CloseButton) }

                img {
                    id: "modalImage",
                    class: "modal-image",
                    src: "{record.image}",
                    alt: "{record.title}",
                }

                div { class: "modal-info",
                    h2 { id: "modalTitle", class: "modal-title", "{record.title}" }
                    TagList { tags: tags, class: "modal-tags".to_string() }
                    pre { id: "modalPrompt", class: "modal-prompt", "{record.prompt}" }
                    CopyButton { text: record.prompt.clone() }
                }
            }
        }
    }
}
