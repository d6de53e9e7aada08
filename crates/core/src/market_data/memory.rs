//! In-memory reference implementation of the store gateways.
//!
//! Implements the exact write-deduplication and upsert semantics the
//! gateway traits require, so it doubles as a volatile cache for embedded
//! use and as the store used by the engine tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use super::constants::STOCK_CACHE_TTL;
use super::model::{PricePoint, StockSummary};
use super::store::{PriceStore, StockStore};
use crate::errors::Result;

/// Thread-safe in-memory price point and stock summary store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    // ticker -> date -> point; the BTreeMap keeps per-ticker dates ordered
    // so the newest stored date is a last_key_value lookup.
    prices: Mutex<HashMap<String, BTreeMap<NaiveDate, PricePoint>>>,
    stocks: Mutex<HashMap<String, StockSummary>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored price points across all tickers.
    pub fn price_count(&self) -> usize {
        self.prices
            .lock()
            .expect("price store lock poisoned")
            .values()
            .map(BTreeMap::len)
            .sum()
    }

    /// Number of stored stock summaries.
    pub fn stock_count(&self) -> usize {
        self.stocks.lock().expect("stock store lock poisoned").len()
    }
}

#[async_trait]
impl PriceStore for InMemoryStore {
    async fn prices_since(&self, ticker: &str, from: NaiveDate) -> Result<Vec<PricePoint>> {
        let today = Utc::now().date_naive();
        let prices = self.prices.lock().expect("price store lock poisoned");

        Ok(prices
            .get(&ticker.to_uppercase())
            .map(|by_date| {
                by_date
                    .range(from..=today)
                    .map(|(_, point)| point.clone())
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn append_prices(&self, ticker: &str, points: Vec<PricePoint>) -> Result<usize> {
        let ticker = ticker.to_uppercase();
        let mut prices = self.prices.lock().expect("price store lock poisoned");
        let by_date = prices.entry(ticker).or_default();

        let newest = by_date.last_key_value().map(|(date, _)| *date);

        let mut inserted = 0;
        for point in points {
            if newest.is_some_and(|max| point.date <= max) {
                continue;
            }
            // entry() tolerates duplicates inside the batch itself: first
            // write wins, later ones are skipped without aborting the rest.
            if let std::collections::btree_map::Entry::Vacant(slot) = by_date.entry(point.date) {
                slot.insert(point);
                inserted += 1;
            }
        }

        Ok(inserted)
    }
}

#[async_trait]
impl StockStore for InMemoryStore {
    async fn search_stocks(
        &self,
        terms: &[String],
        page: u32,
        page_size: u32,
    ) -> Result<Vec<StockSummary>> {
        let cutoff = Utc::now() - STOCK_CACHE_TTL;
        let stocks = self.stocks.lock().expect("stock store lock poisoned");

        let mut matched: Vec<StockSummary> = stocks
            .values()
            .filter(|stock| stock.updated_at >= cutoff && stock.matches_any(terms))
            .cloned()
            .collect();
        // Stable order so pagination is deterministic across calls.
        matched.sort_by(|a, b| a.ticker.cmp(&b.ticker));

        let skip = (page_size as usize) * ((page.max(1) as usize) - 1);
        Ok(matched
            .into_iter()
            .skip(skip)
            .take(page_size as usize)
            .collect())
    }

    async fn upsert_stocks(&self, incoming: Vec<StockSummary>) -> Result<usize> {
        let mut stocks = self.stocks.lock().expect("stock store lock poisoned");
        let count = incoming.len();
        for stock in incoming {
            stocks.insert(stock.ticker.to_uppercase(), stock);
        }
        Ok(count)
    }
}
