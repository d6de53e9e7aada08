//! Wire models for the brapi.dev API.
//!
//! Shapes mirror the JSON the API actually sends; mapping into domain types
//! happens in the client so parse failures stay distinguishable from
//! missing-data conditions.

use serde::Deserialize;

/// Response from `GET /quote/{tickers}`.
#[derive(Debug, Deserialize)]
pub(crate) struct QuoteResponse {
    #[serde(default)]
    pub results: Vec<QuoteResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuoteResult {
    pub symbol: String,
    /// Present when the request carried `range` and `interval`.
    #[serde(default)]
    pub historical_data_price: Vec<HistoricalPrice>,
}

/// One daily candle. Prices arrive as JSON numbers; closes can be null on
/// non-trading entries.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HistoricalPrice {
    /// Unix timestamp (seconds) of the trading day.
    pub date: i64,
    #[serde(default)]
    pub close: Option<f64>,
    #[serde(default)]
    pub adjusted_close: Option<f64>,
}

/// Response from `GET /quote/list`.
#[derive(Debug, Deserialize)]
pub(crate) struct StockListResponse {
    #[serde(default)]
    pub stocks: Vec<ListedStock>,
}

/// One listed instrument. Field names follow the API, `market_cap`
/// included, which is snake_case while the rest is flat lowercase.
#[derive(Debug, Deserialize)]
pub(crate) struct ListedStock {
    pub stock: String,
    pub name: String,
    #[serde(default)]
    pub close: Option<f64>,
    #[serde(default)]
    pub change: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
}
