//! Wiki viewer - external wiki in a frame with a sidebar.
//!
//! The frame content is cross-origin: the page only sees its load event.
//! Every load arms a safety timeout so the overlay never stays up when
//! that event is lost.

use dioxus::prelude::*;
use promptgallery_core::nav::{expire_after, FrameLoad, NavController};
use promptgallery_ui::LoadingOverlay;

use crate::components::NavSidebar;
use crate::context::use_config;

/// Clear the overlay for `load` once the timeout elapses, unless a newer
/// load or the frame's own load event got there first.
fn arm_timeout(mut nav: Signal<NavController>, load: &FrameLoad) {
    let load = load.clone();
    spawn(async move {
        expire_after(&load, |generation| nav.write().timeout_elapsed(generation)).await;
    });
}

#[component]
pub fn Wiki() -> Element {
    let config = use_config();
    let mut nav = use_signal(|| NavController::new(config.wiki.entries.clone()));
    let mut frame_src = use_signal(String::new);

    // Initial load of the home page
    use_hook(move || {
        let load = nav.write().load_home(&config.wiki.home_url);
        tracing::info!("Opening wiki at {}", load.url);
        frame_src.set(load.url.clone());
        arm_timeout(nav, &load);
    });

    let on_select = move |index: usize| {
        let stamp = chrono::Utc::now().timestamp_millis();
        let Some(load) = nav.write().select(index, stamp) else {
            return;
        };
        tracing::info!(forced = load.forced, "Navigating wiki to {}", load.url);
        frame_src.set(load.url.clone());
        arm_timeout(nav, &load);
    };

    let state = nav.read();
    let entries = state.entries().to_vec();
    let active = state.active();
    let loading = state.is_loading();
    drop(state);

    rsx! {
        div { class: "wiki-layout",
            NavSidebar { entries: entries, active: active, on_select: on_select }

            div { class: "wiki-content",
                iframe {
                    id: "contentFrame",
                    class: if loading { "content-frame loading" } else { "content-frame" },
                    src: "{frame_src}",
                    onload: move |_| nav.write().frame_loaded(),
                }
                LoadingOverlay { visible: loading }
            }
        }
    }
}
