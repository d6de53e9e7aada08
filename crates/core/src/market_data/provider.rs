//! Upstream provider client contract.

use async_trait::async_trait;

use super::model::{DailyQuote, StockSummary};
use super::range::QuoteRange;
use crate::errors::Result;

/// Contract for the external, rate-limited, authoritative data provider.
///
/// Implementations own their transport, authentication and retry/backoff
/// policy; transient failures reach this core as [`Error::Provider`]
/// (crate::errors::Error::Provider) carrying the underlying message.
#[async_trait]
pub trait UpstreamProvider: Send + Sync {
    /// Fetches a ticker's daily quote history over an upstream-legal range.
    ///
    /// Callers are expected to pass a range already resolved through
    /// [`QuoteRange::compatible_for`].
    async fn quote_history(&self, ticker: &str, range: QuoteRange) -> Result<Vec<DailyQuote>>;

    /// Fetches the full tradable-stock list.
    async fn all_stocks(&self) -> Result<Vec<StockSummary>>;
}
