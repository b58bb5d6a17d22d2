//! Category Bar Component
//!
//! Horizontal, collapsible row of category filter tags. The first
//! entries of the catalog are shown until the bar is expanded.

use dioxus::prelude::*;
use promptgallery_core::catalog::{self, Category};

use super::button::{class_list, ButtonVariant};

/// Label of the expand/collapse toggle
pub fn toggle_label(expanded: bool) -> &'static str {
    if expanded {
        "🔼 Less"
    } else {
        "🔽 More"
    }
}

/// Text of one category tag, e.g. `"📷 Photography"`
pub fn category_label(category: &Category) -> String {
    if category.icon.is_empty() {
        category.name.to_string()
    } else {
        format!("{} {}", category.icon, category.name)
    }
}

/// Properties for the CategoryBar component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryBarProps {
    /// Id of the active category (`"all"` for none)
    pub active: String,
    /// Whether the full catalog is shown
    pub expanded: bool,
    /// Handler called with the selected category id
    pub on_select: EventHandler<String>,
    /// Handler called when the toggle is clicked
    pub on_toggle: EventHandler<()>,
}

/// Displays the category filter bar
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CategoryBar {
///         active: store.read().filter().active_category.as_id().to_string(),
///         expanded: store.read().categories_expanded(),
///         on_select: move |id: String| store.write().select_category(&id),
///         on_toggle: move |_| store.write().toggle_categories(),
///     }
/// }
/// ```
#[component]
pub fn CategoryBar(props: CategoryBarProps) -> Element {
    let categories = catalog::visible_categories(props.expanded);

    rsx! {
        div {
            id: "categories",
            class: "categories",
            role: "radiogroup",
            "aria-label": "Category selection",
            for category in categories.iter() {
                {
                    let is_active = props.active == category.id;
                    let class = class_list(ButtonVariant::Tag.class(), is_active.then_some("active"));
                    let id = category.id;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{id}",
                            class: "{class}",
                            role: "radio",
                            "aria-checked": if is_active { "true" } else { "false" },
                            "data-category": "{id}",
                            onclick: move |_| on_select.call(id.to_string()),
                            "{category_label(category)}"
                        }
                    }
                }
            }
            if catalog::needs_toggle() {
                button {
                    id: "categoryToggle",
                    class: class_list(ButtonVariant::Tag.class(), Some("toggle-btn")),
                    onclick: move |_| props.on_toggle.call(()),
                    "{toggle_label(props.expanded)}"
                }
            }
        }
    }
}
