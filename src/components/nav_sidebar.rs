//! Wiki Sidebar Component
//!
//! Flat list of nav entries, indented by level, with one active entry.

use dioxus::prelude::*;
use promptgallery_core::NavEntry;

use crate::app::Route;

/// Left padding for an entry at `level`
fn indent(level: u8) -> String {
    format!("padding-left: {}rem;", 1.25 + f32::from(level) * 1.0)
}

#[component]
pub fn NavSidebar(
    entries: Vec<NavEntry>,
    #[props(!optional)]
    active: Option<usize>,
    on_select: EventHandler<usize>,
) -> Element {
    rsx! {
        aside { class: "wiki-sidebar",
            h2 { class: "wiki-sidebar-title", "📚 Wiki" }
            div { class: "wiki-sidebar-back",
                Link { to: Route::Gallery {}, "← Back to gallery" }
            }
            nav { id: "wikiNav",
                for (index, entry) in entries.into_iter().enumerate() {
                    button {
                        key: "{index}",
                        class: if active == Some(index) { "nav-item active" } else { "nav-item" },
                        style: indent(entry.level),
                        title: "{entry.url}",
                        onclick: move |_| on_select.call(index),
                        "{entry.text}"
                    }
                }
            }
        }
    }
}
