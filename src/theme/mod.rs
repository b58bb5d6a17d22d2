//! Visual theme for Prompt Gallery.

mod styles;

pub use styles::GLOBAL_STYLES;
