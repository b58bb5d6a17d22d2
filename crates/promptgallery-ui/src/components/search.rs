//! Search Bar Component
//!
//! Text search with an explicit search button and the result count.

use dioxus::prelude::*;

/// Result count text, e.g. `"12 prompts"`
pub fn count_label(count: usize) -> String {
    match count {
        1 => "1 prompt".to_string(),
        n => format!("{} prompts", n),
    }
}

/// Properties for the SearchBar component
#[derive(Clone, PartialEq, Props)]
pub struct SearchBarProps {
    /// Current search value
    pub value: String,
    /// Called on every keystroke
    pub oninput: EventHandler<String>,
    /// Called when the search button is pressed
    pub onsearch: EventHandler<()>,
    /// Number of prompts currently shown
    pub count: usize,
    /// Placeholder text
    #[props(default = "Search prompts, titles or categories...".to_string())]
    pub placeholder: String,
}

#[component]
pub fn SearchBar(props: SearchBarProps) -> Element {
    rsx! {
        div { class: "search-bar",
            div { class: "search-input-wrapper",
                span { class: "search-icon", "\u{1F50D}" }
                input {
                    id: "searchInput",
                    class: "search-input",
                    r#type: "search",
                    placeholder: "{props.placeholder}",
                    value: "{props.value}",
                    oninput: move |e| props.oninput.call(e.value()),
                }
                button {
                    id: "searchBtn",
                    class: "search-btn",
                    onclick: move |_| props.onsearch.call(()),
                    "Search"
                }
            }
            span { id: "promptCount", class: "prompt-count", "{count_label(props.count)}" }
        }
    }
}
