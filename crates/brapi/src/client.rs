//! brapi.dev HTTP client.
//!
//! Implements [`UpstreamProvider`] against the public brapi.dev API:
//!
//! - History: `GET /quote/{ticker}?range={code}&interval=1d`
//! - Listing: `GET /quote/list?sortBy=change&sortOrder=desc`
//!
//! An optional API token is sent as a `token` query parameter; without it
//! the upstream enforces the free-plan range restrictions the range
//! resolver already accounts for.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

use marketcache_core::{DailyQuote, QuoteRange, Result, StockSummary, UpstreamProvider};

use crate::errors::BrapiError;
use crate::models::{QuoteResponse, StockListResponse};

const BASE_URL: &str = "https://brapi.dev/api";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`BrapiClient`].
#[derive(Debug, Clone)]
pub struct BrapiConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl Default for BrapiConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            token: None,
            timeout: REQUEST_TIMEOUT,
        }
    }
}

/// brapi.dev provider for Brazilian exchange quotes and listings.
pub struct BrapiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl BrapiClient {
    /// Client for the free plan, no token.
    pub fn new() -> Self {
        Self::with_config(BrapiConfig::default())
    }

    /// Client with an optional API token.
    pub fn with_token(token: Option<String>) -> Self {
        Self::with_config(BrapiConfig {
            token,
            ..BrapiConfig::default()
        })
    }

    pub fn with_config(config: BrapiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url,
            token: config.token,
        }
    }

    /// Fetches and decodes one API endpoint, classifying rate limiting and
    /// HTTP failures before parse errors.
    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> std::result::Result<T, BrapiError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.client.get(&url).query(query);
        if let Some(token) = &self.token {
            request = request.query(&[("token", token.as_str())]);
        }

        let response = request.send().await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(BrapiError::RateLimited);
        }
        if !response.status().is_success() {
            return Err(BrapiError::Http(response.status()));
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| BrapiError::Parse(e.to_string()))
    }
}

impl Default for BrapiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UpstreamProvider for BrapiClient {
    async fn quote_history(&self, ticker: &str, range: QuoteRange) -> Result<Vec<DailyQuote>> {
        let path = format!("/quote/{}", ticker);
        let response: QuoteResponse = self
            .fetch(&path, &[("range", range.as_str()), ("interval", "1d")])
            .await?;

        let result = response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| BrapiError::MissingData(format!("no results for {}", ticker)))?;

        let mut quotes = Vec::with_capacity(result.historical_data_price.len());
        for candle in result.historical_data_price {
            let Some(date) = DateTime::from_timestamp(candle.date, 0) else {
                warn!(
                    "Skipping candle for {}: invalid timestamp {}",
                    result.symbol, candle.date
                );
                continue;
            };

            // Non-trading entries carry null closes; they hold no quote.
            let Some(close) = candle.close.and_then(Decimal::from_f64_retain) else {
                continue;
            };
            let adjclose = candle
                .adjusted_close
                .and_then(Decimal::from_f64_retain)
                .unwrap_or(close);

            quotes.push(DailyQuote {
                date: date.date_naive(),
                close,
                adjclose,
            });
        }

        debug!(
            "brapi returned {} candles for {} over {}",
            quotes.len(),
            result.symbol,
            range
        );
        Ok(quotes)
    }

    async fn all_stocks(&self) -> Result<Vec<StockSummary>> {
        let response: StockListResponse = self
            .fetch(
                "/quote/list",
                &[("sortBy", "change"), ("sortOrder", "desc")],
            )
            .await?;

        let updated_at = Utc::now();
        let mut stocks = Vec::with_capacity(response.stocks.len());
        for listed in response.stocks {
            let Some(price) = listed.close.and_then(Decimal::from_f64_retain) else {
                warn!("Skipping listing {}: no usable close price", listed.stock);
                continue;
            };

            stocks.push(StockSummary {
                ticker: listed.stock.to_uppercase(),
                name: listed.name,
                sector: listed.sector,
                price,
                change_percent: listed
                    .change
                    .and_then(Decimal::from_f64_retain)
                    .unwrap_or(Decimal::ZERO),
                market_cap: listed.market_cap.and_then(Decimal::from_f64_retain),
                volume: listed.volume.and_then(Decimal::from_f64_retain),
                logo_url: listed.logo.unwrap_or_default(),
                updated_at,
            });
        }

        debug!("brapi listed {} stocks", stocks.len());
        Ok(stocks)
    }
}
