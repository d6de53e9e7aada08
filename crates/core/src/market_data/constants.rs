use std::time::Duration;

/// Freshness window for stored price points. The newest stored point must be
/// at most this many calendar days old for the store to serve a quote
/// request without an upstream refresh.
pub const FRESHNESS_WINDOW_DAYS: i64 = 3;

/// Cache TTL for stock summaries. Summaries older than this are invisible to
/// the search path and force an upstream refetch.
///
/// Note: independent of [`FRESHNESS_WINDOW_DAYS`]; the two are deliberately
/// not derived from each other.
pub const STOCK_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// TTL for the memoized upstream health probe result.
pub const HEALTH_PROBE_TTL: Duration = Duration::from_secs(60 * 60);

/// Tickers the upstream grants every range to, regardless of plan.
pub const REFERENCE_TICKERS: [&str; 4] = ["PETR4", "MGLU3", "VALE3", "ITUB4"];

/// Ticker used by the health prober for its minimal upstream request.
pub const HEALTH_PROBE_TICKER: &str = "PETR4";

/// Pagination defaults for stock search
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
