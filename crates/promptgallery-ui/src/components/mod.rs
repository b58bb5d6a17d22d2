//! Reusable UI components

mod button;
mod category_bar;
mod loading;
mod search;
mod tag;

pub use button::*;
pub use category_bar::*;
pub use loading::*;
pub use search::*;
pub use tag::*;
