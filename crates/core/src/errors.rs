//! Core error types for the marketcache crates.
//!
//! This module defines storage- and transport-agnostic error types. Concrete
//! collaborators (HTTP clients, database adapters) convert their own errors
//! into these at the boundary.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for market data retrieval.
///
/// Critical-path failures (store reads, upstream fetches) propagate as one
/// of these variants carrying the underlying message. Background backfill
/// failures are logged at their own boundary and never surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// A local store read or write failed.
    #[error("Store operation failed: {0}")]
    Store(String),

    /// The upstream provider returned an error (network, HTTP, decode).
    /// Retry/backoff is the provider collaborator's responsibility.
    #[error("Upstream provider error: {0}")]
    Provider(String),

    /// Input validation failed before any I/O was attempted.
    #[error("Input validation failed: {0}")]
    Validation(String),

    /// Anything that does not fit the categories above.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Returns true when the error originated upstream rather than locally.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Error::Provider(_))
    }
}
