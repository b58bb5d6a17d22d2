//! Prompt Gallery Core Library
//!
//! Everything the gallery and wiki viewer decide, without any UI:
//!
//! - **Filtering**: search text and category selection over the record set
//! - **Views**: cards, tags and the "no results" state
//! - **Modal**: open/closed detail state with a derived scroll lock
//! - **Clipboard**: primary/fallback copy with time-limited feedback
//! - **Navigation**: frame URL tracking for the wiki viewer
//!
//! ## Quick Start
//!
//! ```ignore
//! use promptgallery_core::{GalleryStore, RecordSource};
//!
//! let records = RecordSource::parse("data/prompts.json").load().await?;
//! let mut store = GalleryStore::with_records(records);
//!
//! store.set_search("neon");
//! store.select_category("poster");
//! println!("{} prompts match", store.visible_count());
//! ```

pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod filter;
pub mod gallery;
pub mod importer;
pub mod logging;
pub mod modal;
pub mod nav;
pub mod scroll;
pub mod source;
pub mod store;
pub mod types;

// Re-exports
pub use catalog::{Category, ALL_CATEGORY, CATALOG};
pub use clipboard::{
    copy_text, ClipboardError, ClipboardWriter, CopyButtonState, CopyFeedback, CopyOutcome,
};
pub use config::{GalleryConfig, WikiConfig};
pub use error::{GalleryError, GalleryResult};
pub use filter::{filter_records, CategoryFilter, FilterState};
pub use gallery::{render_gallery, CardView, GalleryView, TagView};
pub use importer::MarkdownImporter;
pub use modal::{CloseTrigger, ModalController, ModalState};
pub use nav::{FrameLoad, NavController};
pub use scroll::HeaderTracker;
pub use source::{LoadState, RecordSource};
pub use store::GalleryStore;
pub use types::*;
