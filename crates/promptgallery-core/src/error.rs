//! Error types for Prompt Gallery

use thiserror::Error;

/// Main error type for Prompt Gallery operations
#[derive(Error, Debug)]
pub enum GalleryError {
    /// Fetching the record collection over HTTP failed
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// Reading a local record collection failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The record collection is not a JSON array of records
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A markdown import pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration could not be resolved
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type alias using GalleryError
pub type GalleryResult<T> = Result<T, GalleryError>;
