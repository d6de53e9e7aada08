//! Stock search engine.
//!
//! Cache-aside search over stock summaries: the TTL-bounded store page is
//! served when it has anything at all; otherwise one upstream call fetches
//! the entire tradable list, the whole list is upserted in the background
//! (warming the cache for unrelated future searches), and the requested
//! page is filtered out in memory and returned immediately.

use std::sync::Arc;

use log::{debug, error, warn};

use super::model::{SearchQuery, StockSummary};
use super::provider::UpstreamProvider;
use super::store::StockStore;
use crate::errors::Result;
use crate::output::{Output, StockStream};

/// Cache-aside stock search.
pub struct StockSearchService {
    store: Arc<dyn StockStore>,
    provider: Arc<dyn UpstreamProvider>,
}

impl StockSearchService {
    pub fn new(store: Arc<dyn StockStore>, provider: Arc<dyn UpstreamProvider>) -> Self {
        Self { store, provider }
    }

    /// Returns the requested page of stock summaries matching any of the
    /// query's terms, or [`Empty`](crate::output::OutputStatus::Empty) when
    /// nothing matches.
    pub async fn search(&self, query: SearchQuery) -> Output<StockStream> {
        match self.search_inner(&query).await {
            Ok(output) => output,
            Err(e) => {
                error!("Stock search failed for {:?}: {}", query.terms(), e);
                Output::unexpected_error(vec![e.to_string()])
            }
        }
    }

    async fn search_inner(&self, query: &SearchQuery) -> Result<Output<StockStream>> {
        let cached = self
            .store
            .search_stocks(query.terms(), query.page(), query.page_size())
            .await?;

        if !cached.is_empty() {
            debug!(
                "Serving {} cached summaries for {:?}",
                cached.len(),
                query.terms()
            );
            let stream: StockStream = Box::new(cached.into_iter());
            return Ok(Output::ok(stream));
        }

        // Cache miss: either nothing matches or everything is past TTL.
        let fetched = self.provider.all_stocks().await?;
        if fetched.is_empty() {
            return Ok(Output::empty());
        }

        // The entire list is cached regardless of the terms searched; one
        // upstream call amortizes across many future unrelated queries.
        self.spawn_upsert(fetched.clone());

        let page: Vec<StockSummary> = fetched
            .into_iter()
            .filter(|stock| stock.matches_any(query.terms()))
            .skip(query.offset())
            .take(query.page_size() as usize)
            .collect();

        if page.is_empty() {
            return Ok(Output::empty());
        }

        let stream: StockStream = Box::new(page.into_iter());
        Ok(Output::ok(stream))
    }

    /// Detached replace-by-ticker refresh of the summary cache. Failures are
    /// logged and swallowed; the caller's response never waits on it.
    fn spawn_upsert(&self, stocks: Vec<StockSummary>) {
        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            debug!("Upserting {} stock summaries into cache", stocks.len());
            match store.upsert_stocks(stocks).await {
                Ok(written) => debug!("Stock cache refresh wrote {} summaries", written),
                Err(e) => warn!("Stock cache refresh failed: {}", e),
            }
        });
    }
}
