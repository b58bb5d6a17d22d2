use dioxus::prelude::*;
use promptgallery_core::GalleryStore;

use crate::context::get_config;
use crate::pages::{Gallery, Wiki};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Prompt gallery with search, categories and detail modal
/// - `/wiki` - Wiki viewer with sidebar and embedded frame
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Gallery {},
    #[route("/wiki")]
    Wiki {},
}

/// Root application component.
///
/// Provides global styles, configuration, the gallery store, and routing.
/// The record collection is loaded once here.
#[component]
pub fn App() -> Element {
    let config = use_context_provider(get_config);
    let mut store: Signal<GalleryStore> = use_signal(GalleryStore::new);
    use_context_provider(|| store);

    use_hook(move || {
        let source = config.source.clone();
        spawn(async move {
            match source.load().await {
                Ok(records) => store.write().set_records(records),
                Err(e) => {
                    tracing::error!("Failed to load prompts from {}: {}", source, e);
                    store.write().fail_loading();
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
