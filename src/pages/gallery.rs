//! Gallery page - browse, filter and open prompts.
//!
//! The page scrolls inside its own container so scroll offsets can be read
//! from the mounted element. While the detail modal is open that container
//! stops scrolling; the lock follows the modal state, so every way of
//! closing the modal releases it.

use std::rc::Rc;

use dioxus::prelude::*;
use promptgallery_core::scroll::{back_to_top_visible, HeaderTracker};
use promptgallery_core::{CloseTrigger, LoadState, RecordId};
use promptgallery_ui::{CategoryBar, LoadingIndicator, SearchBar};

use crate::components::{BackToTop, GalleryGrid, NavLocation, PromptModal, SiteHeader};
use crate::context::use_store;

#[component]
pub fn Gallery() -> Element {
    let mut store = use_store();
    let mut search_text = use_signal(|| store.peek().filter().search_term.clone());
    let mut header = use_signal(HeaderTracker::new);
    let mut show_back_to_top = use_signal(|| false);
    let mut scroll_root: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut top_anchor: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let on_input = move |value: String| {
        search_text.set(value.clone());
        store.write().set_search(value);
    };

    let on_search = move |_: ()| {
        store.write().set_search(search_text());
    };

    let on_select_category = move |id: String| {
        let mut s = store.write();
        s.set_search(search_text());
        s.select_category(&id);
    };

    let on_open = move |id: RecordId| {
        store.write().open_modal(&id);
    };

    let on_close = move |trigger: CloseTrigger| {
        store.write().close_modal(trigger);
    };

    let on_scroll = move |_: ScrollEvent| async move {
        let Some(root) = scroll_root() else {
            return;
        };
        if let Ok(offset) = root.get_scroll_offset().await {
            header.write().on_scroll(offset.y);
            show_back_to_top.set(back_to_top_visible(offset.y));
        }
    };

    let on_back_to_top = move |_: ()| {
        spawn(async move {
            if let Some(anchor) = top_anchor() {
                let _ = anchor.scroll_to(ScrollBehavior::Smooth).await;
            }
        });
    };

    let on_keydown = move |e: KeyboardEvent| {
        if e.key() == Key::Escape {
            store.write().close_modal(CloseTrigger::Escape);
        }
    };

    let s = store.read();
    let locked = s.modal().scroll_locked();
    let active = s.filter().active_category.as_id().to_string();
    let expanded = s.categories_expanded();
    let count = s.visible_count();
    let load_state = s.load_state().clone();
    let view = s.gallery_view();
    let selected = s.selected_record().cloned();
    drop(s);

    rsx! {
        div {
            class: if locked { "page-scroll scroll-locked" } else { "page-scroll" },
            tabindex: "0",
            onmounted: move |e| scroll_root.set(Some(e.data())),
            onscroll: on_scroll,
            onkeydown: on_keydown,

            div { onmounted: move |e| top_anchor.set(Some(e.data())) }

            SiteHeader {
                current: NavLocation::Gallery,
                hidden: header.read().is_hidden(),
                SearchBar {
                    value: search_text(),
                    oninput: on_input,
                    onsearch: on_search,
                    count: count,
                }
                CategoryBar {
                    active: active,
                    expanded: expanded,
                    on_select: on_select_category,
                    on_toggle: move |_| store.write().toggle_categories(),
                }
            }

            main { class: "gallery-main",
                match load_state {
                    LoadState::Loading => rsx! { LoadingIndicator {} },
                    LoadState::Failed(message) => rsx! { LoadingIndicator { message: message } },
                    LoadState::Ready => rsx! { GalleryGrid { view: view, on_open: on_open } },
                }
            }

            if let Some(record) = selected {
                PromptModal { record: record, on_close: on_close }
            }

            BackToTop { visible: show_back_to_top(), onclick: on_back_to_top }
        }
    }
}
