//! Quote retrieval engine.
//!
//! Serves quote-history reads cache-aside: a freshness check against the
//! local store, an upstream fetch on miss, and a detached backfill write
//! that never blocks or fails the caller.

use std::sync::Arc;

use chrono::{Duration, Utc};
use log::{debug, error, warn};

use super::constants::FRESHNESS_WINDOW_DAYS;
use super::model::{DailyQuote, PricePoint};
use super::provider::UpstreamProvider;
use super::range::QuoteRange;
use super::store::PriceStore;
use crate::errors::Result;
use crate::output::{Output, QuoteStream};

/// Cache-aside quote history retrieval.
pub struct QuoteService {
    store: Arc<dyn PriceStore>,
    provider: Arc<dyn UpstreamProvider>,
}

impl QuoteService {
    pub fn new(store: Arc<dyn PriceStore>, provider: Arc<dyn UpstreamProvider>) -> Self {
        Self { store, provider }
    }

    /// Returns the ticker's daily quotes over `range`, resolved to an
    /// upstream-compatible window.
    ///
    /// Stored data younger than the freshness window is served directly.
    /// Otherwise the maximum available range is fetched upstream in one call
    /// (the broadest backfill payload), the store refresh is scheduled in
    /// the background, and only the points inside the resolved range are
    /// returned.
    pub async fn get_quotes(&self, ticker: &str, range: QuoteRange) -> Output<QuoteStream> {
        let ticker = ticker.trim().to_uppercase();

        match self.get_quotes_inner(&ticker, range).await {
            Ok(quotes) => Output::ok(quotes),
            Err(e) => {
                error!(
                    "Quote retrieval failed for {} over {}: {}",
                    ticker, range, e
                );
                Output::unexpected_error(vec![e.to_string()])
            }
        }
    }

    async fn get_quotes_inner(&self, ticker: &str, range: QuoteRange) -> Result<QuoteStream> {
        let resolved = range.compatible_for(ticker);
        let start = resolved.start_date();

        let stored = self.store.prices_since(ticker, start).await?;

        let freshness_cutoff = Utc::now().date_naive() - Duration::days(FRESHNESS_WINDOW_DAYS);
        let up_to_date = stored.iter().any(|point| point.date >= freshness_cutoff);

        if up_to_date {
            debug!(
                "Serving {} stored points for {} (range {})",
                stored.len(),
                ticker,
                resolved
            );
            let quotes: QuoteStream = Box::new(stored.into_iter().map(DailyQuote::from));
            return Ok(quotes);
        }

        self.fetch_and_backfill(ticker, resolved).await
    }

    /// Upstream path: fetch the broadest range the upstream allows for this
    /// ticker, hand the full history to a detached backfill, and return only
    /// the slice the caller asked for.
    async fn fetch_and_backfill(&self, ticker: &str, resolved: QuoteRange) -> Result<QuoteStream> {
        let fetch_range = QuoteRange::Max.compatible_for(ticker);
        debug!(
            "Store stale or empty for {}; fetching upstream range {}",
            ticker, fetch_range
        );

        let history = self.provider.quote_history(ticker, fetch_range).await?;

        self.spawn_backfill(ticker.to_string(), history.clone());

        let start = resolved.start_date();
        let quotes: QuoteStream =
            Box::new(history.into_iter().filter(move |quote| quote.date >= start));
        Ok(quotes)
    }

    /// Detached best-effort store refresh. Runs to completion regardless of
    /// the caller's lifecycle; failures are logged and swallowed.
    fn spawn_backfill(&self, ticker: String, history: Vec<DailyQuote>) {
        if history.is_empty() {
            return;
        }

        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            let from = history.iter().map(|q| q.date).min();
            let to = history.iter().map(|q| q.date).max();
            debug!(
                "Backfilling {} prices for {} ({:?}..{:?})",
                history.len(),
                ticker,
                from,
                to
            );

            let points: Vec<PricePoint> = history
                .into_iter()
                .map(|q| PricePoint::new(ticker.clone(), q.date, q.close, q.adjclose))
                .collect();

            match store.append_prices(&ticker, points).await {
                Ok(inserted) => debug!("Backfill for {} inserted {} points", ticker, inserted),
                Err(e) => warn!("Backfill for {} failed: {}", ticker, e),
            }
        });
    }
}
