use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Where the raw price series lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceSource {
    /// `http://` or `https://` endpoint serving the JSON document
    Http(String),
    /// JSON document on the local filesystem
    File(PathBuf),
}

impl PriceSource {
    /// Interpret a location string: URLs go over HTTP, anything else is a path
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        let lower = location.to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            PriceSource::Http(location.to_string())
        } else {
            PriceSource::File(PathBuf::from(location))
        }
    }
}

impl fmt::Display for PriceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceSource::Http(url) => write!(f, "{}", url),
            PriceSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Failure to obtain a usable price series
#[derive(Debug, Error)]
pub enum LoadError {
    /// File missing or unreadable, transport failure, non-success status
    #[error("price source unreachable: {0}")]
    Unreachable(String),
    /// Payload is not a well-formed ascending sequence of price records
    #[error("malformed price data: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Malformed(err.to_string())
    }
}
