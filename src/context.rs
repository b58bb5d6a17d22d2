//! Shared state providers for Prompt Gallery.
//!
//! The gallery store and the resolved configuration are provided once by
//! `App` and read by pages and components through `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = use_store();
//! store.write().set_search("neon");
//! let count = store.read().visible_count();
//! ```

use dioxus::prelude::*;
use promptgallery_core::{GalleryConfig, GalleryStore};

/// Get the configuration resolved from the command line.
pub fn get_config() -> GalleryConfig {
    crate::get_config()
}

/// Hook to access the gallery store from context.
///
/// All gallery state (records, filter, category bar, modal) lives here.
pub fn use_store() -> Signal<GalleryStore> {
    use_context::<Signal<GalleryStore>>()
}

/// Hook to access the resolved configuration.
pub fn use_config() -> GalleryConfig {
    use_context::<GalleryConfig>()
}
