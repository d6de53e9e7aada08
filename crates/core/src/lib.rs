//! # marketcache-core
//!
//! Cache-aside retrieval layer for financial market data: quote history and
//! stock search served from an abstract local store, with fallback to a
//! rate-limited upstream provider and non-blocking deduplicated backfill.
//!
//! The store gateways ([`PriceStore`], [`StockStore`]) and the upstream
//! client ([`UpstreamProvider`]) are capability traits; concrete adapters
//! are injected so persistence and transport can be swapped without
//! touching engine logic.

pub mod errors;
pub mod market_data;
pub mod output;

pub use errors::{Error, Result};
pub use market_data::{
    DailyQuote, HealthState, InMemoryStore, PricePoint, PriceStore, ProbeResult, QuoteRange,
    QuoteService, SearchQuery, StockSearchService, StockStore, StockSummary, UpstreamHealthProber,
    UpstreamProvider,
};
pub use output::{Output, OutputStatus, QuoteStream, StockStream};
