//! Prompt Card Component
//!
//! One gallery card: image, title and the first few category tags.

use dioxus::prelude::*;
use promptgallery_core::{CardView, RecordId};
use promptgallery_ui::TagList;

#[component]
pub fn PromptCard(
    /// Card contents
    card: CardView,
    /// Click handler (receives the record id)
    on_open: EventHandler<RecordId>,
) -> Element {
    let id = card.id.clone();

    rsx! {
        div {
            class: "card",
            "data-id": "{card.id}",
            onclick: move |_| on_open.call(id.clone()),

            img {
                class: "card-image",
                src: "{card.image}",
                alt: "{card.title}",
                loading: "lazy",
            }
            div { class: "card-content",
                h3 { class: "card-title", "{card.title}" }
                TagList { tags: card.tags.clone() }
            }
        }
    }
}
