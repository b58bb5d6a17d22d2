//! Category tag chip shown on cards and in the detail modal.

use dioxus::prelude::*;
use promptgallery_core::TagView;

#[derive(Clone, PartialEq, Props)]
pub struct CategoryTagProps {
    pub tag: TagView,
    /// `card-tag` on cards, `modal-tag` in the modal
    #[props(default = "card-tag".to_string())]
    pub class: String,
}

#[component]
pub fn CategoryTag(props: CategoryTagProps) -> Element {
    rsx! {
        span {
            class: "{props.class}",
            "data-category": "{props.tag.id}",
            "{props.tag.label()}"
        }
    }
}

/// A row of tags
#[component]
pub fn TagList(tags: Vec<TagView>, #[props(default = "card-tags".to_string())] class: String) -> Element {
    let tag_class = if class == "modal-tags" { "modal-tag" } else { "card-tag" };

    rsx! {
        div { class: "{class}",
            for (i, tag) in tags.into_iter().enumerate() {
                CategoryTag {
                    key: "{i}",
                    tag: tag,
                    class: tag_class.to_string(),
                }
            }
        }
    }
}
