//! Error types for the torrent index scraper
//!
//! Provides a single error enum with human-readable messages that
//! serializes as its display string.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all scraper operations
#[derive(Error, Debug)]
pub enum TpbError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server answered with an unexpected status code
    #[error("Unexpected HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    /// Page does not exist on the server (HTTP 404)
    #[error("Page not found: {0}")]
    NotFound(String),

    /// Rate limited by server (HTTP 429)
    #[error("Rate limited - too many requests")]
    RateLimited,

    /// Failed to parse HTML content
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),

    /// Search query was empty or otherwise unusable
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Option value not recognized by the site
    #[error("Unknown {kind}: {value}")]
    UnknownValue { kind: &'static str, value: String },

    /// Operation exists on the command line but has no implementation
    #[error("{0}: not implemented")]
    NotImplemented(&'static str),
}

impl Serialize for TpbError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, TpbError>;
