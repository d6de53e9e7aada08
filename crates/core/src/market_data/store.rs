//! Local store gateway traits.
//!
//! These traits abstract the persistence layer for price points and stock
//! summaries. The engines depend only on these contracts; concrete adapters
//! (or [`InMemoryStore`](super::memory::InMemoryStore)) are injected.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::{PricePoint, StockSummary};
use crate::errors::Result;

/// Storage interface for daily price points.
#[async_trait]
pub trait PriceStore: Send + Sync {
    /// Reads all stored points for `ticker` with `from <= date <= today`,
    /// fully materialized so the caller can evaluate freshness.
    async fn prices_since(&self, ticker: &str, from: NaiveDate) -> Result<Vec<PricePoint>>;

    /// Appends a backfill batch for `ticker`, deduplicating on write.
    ///
    /// Implementations must discard points dated at or before the ticker's
    /// newest stored date, and must insert the remainder as an unordered
    /// best-effort batch: a duplicate-key conflict on one point (a lost race
    /// with a concurrent backfill) must not abort the remaining inserts.
    ///
    /// Returns the number of points actually inserted.
    async fn append_prices(&self, ticker: &str, points: Vec<PricePoint>) -> Result<usize>;
}

/// Storage interface for stock summary snapshots.
#[async_trait]
pub trait StockStore: Send + Sync {
    /// Searches cached summaries updated within the cache TTL whose ticker,
    /// name or sector contains any of `terms` (case-insensitive), applying
    /// `page`/`page_size` server-side (skip = page_size * (page - 1)).
    async fn search_stocks(
        &self,
        terms: &[String],
        page: u32,
        page_size: u32,
    ) -> Result<Vec<StockSummary>>;

    /// Replace-by-ticker upsert: each incoming summary overwrites any
    /// existing row with the same ticker, whole-row, no field merge.
    ///
    /// Returns the number of summaries written.
    async fn upsert_stocks(&self, stocks: Vec<StockSummary>) -> Result<usize>;
}
