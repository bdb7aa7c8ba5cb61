use reqwest::StatusCode;
use thiserror::Error;

/// A raw version string whose major segment cannot be extracted
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Malformed version '{raw}': {reason}")]
pub struct MalformedVersionError {
    pub raw: String,
    pub reason: String,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(reqwest::Error),

    #[error("Invalid index URL: {0}")]
    InvalidUrl(String),

    #[error("Request timed out: {0}")]
    Timeout(reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(StatusCode),

    #[error("Empty response body (status {0})")]
    EmptyBody(StatusCode),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout(e)
        } else {
            FetchError::Network(e)
        }
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid search response: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}

/// Errors raised by an index client while fetching versions
#[derive(Debug, Error)]
pub enum IndexError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    MalformedVersion(#[from] MalformedVersionError),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    MalformedVersion(#[from] MalformedVersionError),

    #[error("Cache lock poisoned")]
    LockPoisoned,
}

impl From<IndexError> for CatalogError {
    fn from(e: IndexError) -> Self {
        match e {
            IndexError::Fetch(e) => CatalogError::Fetch(e),
            IndexError::Parse(e) => CatalogError::Parse(e),
            IndexError::MalformedVersion(e) => CatalogError::MalformedVersion(e),
        }
    }
}
