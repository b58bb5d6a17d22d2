//! Record collection loading.
//!
//! The collection is fetched once per page load. HTTP sources get a
//! `v=<millis>` query parameter on every request so caches never serve a
//! stale copy; local files are read directly. There is no retry.

use std::path::PathBuf;

use crate::error::{GalleryError, GalleryResult};
use crate::types::PromptRecord;

/// Default location of the record collection
pub const DEFAULT_SOURCE: &str = "data/prompts.json";

/// Message shown in place of the loading indicator when loading fails
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load prompts, please refresh";

/// Where the record collection comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSource {
    Http(String),
    File(PathBuf),
}

impl RecordSource {
    /// `http://` and `https://` locations are fetched, anything else is a path.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            RecordSource::Http(location.to_string())
        } else {
            RecordSource::File(PathBuf::from(location))
        }
    }

    /// Load and decode the collection.
    pub async fn load(&self) -> GalleryResult<Vec<PromptRecord>> {
        let body = match self {
            RecordSource::Http(url) => {
                let url = cache_busted_url(url, chrono::Utc::now().timestamp_millis());
                tracing::debug!(%url, "Fetching prompts");
                let response = reqwest::get(&url).await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(GalleryError::HttpStatus {
                        status: status.as_u16(),
                        url,
                    });
                }
                response.text().await?
            }
            RecordSource::File(path) => {
                tracing::debug!(path = %path.display(), "Reading prompts");
                tokio::fs::read_to_string(path).await?
            }
        };
        let records = parse_records(&body)?;
        tracing::info!(count = records.len(), source = %self, "Loaded prompts");
        Ok(records)
    }
}

impl Default for RecordSource {
    fn default() -> Self {
        RecordSource::parse(DEFAULT_SOURCE)
    }
}

impl std::fmt::Display for RecordSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordSource::Http(url) => write!(f, "{}", url),
            RecordSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Append `v=<stamp>` to a URL, keeping any existing query and fragment.
pub fn cache_busted_url(url: &str, stamp: i64) -> String {
    let (head, fragment) = match url.split_once('#') {
        Some((head, fragment)) => (head, Some(fragment)),
        None => (url, None),
    };
    let separator = if head.contains('?') { '&' } else { '?' };
    match fragment {
        Some(fragment) => format!("{}{}v={}#{}", head, separator, stamp, fragment),
        None => format!("{}{}v={}", head, separator, stamp),
    }
}

/// Decode a JSON array of records.
pub fn parse_records(json: &str) -> GalleryResult<Vec<PromptRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Loading state of the gallery page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}
