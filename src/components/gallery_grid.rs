//! Gallery Grid Component
//!
//! Card grid plus the "no results" notice. Exactly one of the two is
//! visible for any view.

use dioxus::prelude::*;
use promptgallery_core::{GalleryView, RecordId};

use super::PromptCard;

#[component]
pub fn GalleryGrid(view: GalleryView, on_open: EventHandler<RecordId>) -> Element {
    let cards = match &view {
        GalleryView::Cards(cards) => cards.clone(),
        GalleryView::NoResults => Vec::new(),
    };

    rsx! {
        div {
            id: "gallery",
            class: if view.shows_gallery() { "gallery" } else { "gallery hidden" },
            for card in cards.into_iter() {
                PromptCard {
                    key: "{card.id}",
                    card: card,
                    on_open: on_open,
                }
            }
        }
        div {
            id: "noResults",
            class: if view.shows_no_results() { "no-results" } else { "no-results hidden" },
            p { "🔍 No prompts match your search" }
            p { class: "no-results-hint", "Try another keyword or pick a different category" }
        }
    }
}
