//! Application configuration.
//!
//! Resolved once at startup from command-line flags; nothing is persisted.

use std::path::Path;

use crate::error::{GalleryError, GalleryResult};
use crate::source::RecordSource;
use crate::types::NavEntry;

/// Home page of the wiki viewer
pub const DEFAULT_WIKI_URL: &str = "https://en.wikipedia.org/wiki/Prompt_engineering";

/// Built-in sidebar of the wiki viewer
pub fn default_nav_entries() -> Vec<NavEntry> {
    vec![
        NavEntry::new(0, "Prompt engineering", DEFAULT_WIKI_URL),
        NavEntry::new(1, "History", format!("{}#History", DEFAULT_WIKI_URL)),
        NavEntry::new(1, "Text-to-image", format!("{}#Text-to-image", DEFAULT_WIKI_URL)),
        NavEntry::new(1, "Prompt injection", format!("{}#Prompt_injection", DEFAULT_WIKI_URL)),
        NavEntry::new(0, "Text-to-image model", "https://en.wikipedia.org/wiki/Text-to-image_model"),
        NavEntry::new(0, "Generative art", "https://en.wikipedia.org/wiki/Generative_art"),
    ]
}

/// Read a JSON list of nav entries.
pub fn load_nav_entries(path: &Path) -> GalleryResult<Vec<NavEntry>> {
    let content = std::fs::read_to_string(path)?;
    let entries: Vec<NavEntry> = serde_json::from_str(&content)?;
    if entries.is_empty() {
        return Err(GalleryError::Config(format!(
            "no navigation entries in {}",
            path.display()
        )));
    }
    Ok(entries)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiConfig {
    pub home_url: String,
    pub entries: Vec<NavEntry>,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            home_url: DEFAULT_WIKI_URL.to_string(),
            entries: default_nav_entries(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryConfig {
    pub source: RecordSource,
    pub wiki: WikiConfig,
}

impl GalleryConfig {
    /// Resolve from optional overrides
    pub fn resolve(
        source: Option<&str>,
        wiki_url: Option<&str>,
        wiki_nav: Option<&Path>,
    ) -> GalleryResult<Self> {
        let mut config = Self::default();
        if let Some(source) = source {
            config.source = RecordSource::parse(source);
        }
        if let Some(url) = wiki_url {
            config.wiki.home_url = url.to_string();
        }
        if let Some(path) = wiki_nav {
            config.wiki.entries = load_nav_entries(path)?;
        }
        Ok(config)
    }
}
