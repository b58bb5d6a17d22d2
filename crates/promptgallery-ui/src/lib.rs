//! Prompt Gallery UI Components
//!
//! Reusable Dioxus components shared by the gallery and wiki pages. They
//! are stateless: every value comes in through props, every change goes out
//! through an `EventHandler`.
//!
//! Record fields are always bound as text or attribute values, never as raw
//! markup.

pub mod components;

pub use components::*;
