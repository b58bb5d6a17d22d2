//! Page components for Prompt Gallery.

mod gallery;
mod wiki;

pub use gallery::Gallery;
pub use wiki::Wiki;
