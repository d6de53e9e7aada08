//! Market data retrieval: the cache-aside core.
//!
//! - [`model`] - Domain models (price points, stock summaries, queries)
//! - [`range`] - Lookback ranges and upstream compatibility resolution
//! - [`store`] - Local store gateway traits
//! - [`memory`] - In-memory reference store
//! - [`provider`] - Upstream provider client trait
//! - [`quotes`] - Quote retrieval engine
//! - [`search`] - Stock search engine
//! - [`health`] - TTL-memoized upstream health prober
//! - [`constants`] - Freshness windows, TTLs, paging defaults
//!
//! # Architecture
//!
//! ```text
//! QuoteService / StockSearchService
//!        |                 \
//!   PriceStore/StockStore   UpstreamProvider
//!   (injected gateway)      (injected client, e.g. marketcache-brapi)
//! ```
//!
//! The engines consult the store first, fall back to the provider on a miss
//! or staleness, respond immediately with a filtered view of the fetch, and
//! schedule a detached deduplicated backfill write.

pub mod constants;
pub mod health;
pub mod memory;
pub mod model;
pub mod provider;
pub mod quotes;
pub mod range;
pub mod search;
pub mod store;


pub use health::{HealthState, ProbeResult, UpstreamHealthProber};
pub use memory::InMemoryStore;
pub use model::{DailyQuote, PricePoint, SearchQuery, StockSummary};
pub use provider::UpstreamProvider;
pub use quotes::QuoteService;
pub use range::QuoteRange;
pub use search::StockSearchService;
pub use store::{PriceStore, StockStore};
