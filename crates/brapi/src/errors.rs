//! brapi.dev adapter errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrapiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("brapi.dev rate limit exceeded")]
    RateLimited,

    #[error("brapi.dev returned HTTP {0}")]
    Http(reqwest::StatusCode),

    #[error("Failed to parse brapi.dev response: {0}")]
    Parse(String),

    #[error("brapi.dev returned no data: {0}")]
    MissingData(String),
}

impl From<BrapiError> for marketcache_core::Error {
    fn from(e: BrapiError) -> Self {
        marketcache_core::Error::Provider(e.to_string())
    }
}
