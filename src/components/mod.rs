//! UI Components for Prompt Gallery.
//!
//! App-specific components; generic building blocks live in
//! `promptgallery-ui`.

mod back_to_top;
mod copy_button;
mod gallery_grid;
mod nav_sidebar;
mod prompt_card;
mod prompt_modal;
mod site_header;

pub use back_to_top::BackToTop;
pub use copy_button::CopyButton;
pub use gallery_grid::GalleryGrid;
pub use nav_sidebar::NavSidebar;
pub use prompt_card::PromptCard;
pub use prompt_modal::PromptModal;
pub use site_header::{NavLocation, SiteHeader};
