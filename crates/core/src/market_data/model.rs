//! Market data domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::market_data::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

/// One day of trading data for one ticker, as persisted in the local store.
///
/// At most one point exists per (ticker, date) pair. Points are created only
/// by backfill writes and are never mutated afterwards; a later write for an
/// existing pair is discarded to preserve the provider-reported history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    /// Uppercase-normalized ticker symbol.
    pub ticker: String,
    /// Trading date, no time component.
    pub date: NaiveDate,
    pub close: Decimal,
    /// Close adjusted for splits and dividends.
    pub adjclose: Decimal,
    /// When this point was written into the store.
    pub ingested_at: DateTime<Utc>,
}

impl PricePoint {
    pub fn new(ticker: impl Into<String>, date: NaiveDate, close: Decimal, adjclose: Decimal) -> Self {
        Self {
            ticker: ticker.into().to_uppercase(),
            date,
            close,
            adjclose,
            ingested_at: Utc::now(),
        }
    }
}

/// A quote history result record: the caller-facing view of a price point.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyQuote {
    pub date: NaiveDate,
    pub close: Decimal,
    pub adjclose: Decimal,
}

impl From<PricePoint> for DailyQuote {
    fn from(point: PricePoint) -> Self {
        Self {
            date: point.date,
            close: point.close,
            adjclose: point.adjclose,
        }
    }
}

/// Current snapshot of a tradable instrument.
///
/// At most one summary exists per ticker; a refresh replaces the prior row
/// entirely, including `updated_at`, which is what search staleness is
/// evaluated against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockSummary {
    pub ticker: String,
    pub name: String,
    pub sector: Option<String>,
    pub price: Decimal,
    /// Daily percentage change.
    pub change_percent: Decimal,
    pub market_cap: Option<Decimal>,
    pub volume: Option<Decimal>,
    pub logo_url: String,
    pub updated_at: DateTime<Utc>,
}

impl StockSummary {
    /// Case-insensitive containment match over ticker, name and sector.
    /// Any single matching term suffices.
    pub fn matches_any(&self, terms: &[String]) -> bool {
        terms.iter().any(|term| {
            let term = term.to_lowercase();
            self.ticker.to_lowercase().contains(&term)
                || self.name.to_lowercase().contains(&term)
                || self
                    .sector
                    .as_deref()
                    .is_some_and(|sector| sector.to_lowercase().contains(&term))
        })
    }
}

/// Ephemeral stock search request. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    terms: Vec<String>,
    page: u32,
    page_size: u32,
}

impl SearchQuery {
    /// Builds a validated query. Blank terms are dropped; at least one
    /// non-blank term is required. Page and page size default to 1 and 10.
    pub fn new(
        terms: Vec<String>,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<Self> {
        let terms: Vec<String> = terms
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        if terms.is_empty() {
            return Err(Error::Validation(
                "search requires at least one non-blank term".to_string(),
            ));
        }

        let page = page.unwrap_or(DEFAULT_PAGE);
        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        if page < 1 {
            return Err(Error::Validation("page must be >= 1".to_string()));
        }
        if page_size < 1 {
            return Err(Error::Validation("page size must be >= 1".to_string()));
        }

        Ok(Self {
            terms,
            page,
            page_size,
        })
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of records to skip for the requested page (1-based paging).
    pub fn offset(&self) -> usize {
        (self.page_size as usize) * ((self.page as usize) - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn summary(ticker: &str, name: &str, sector: Option<&str>) -> StockSummary {
        StockSummary {
            ticker: ticker.to_string(),
            name: name.to_string(),
            sector: sector.map(str::to_string),
            price: dec!(10),
            change_percent: dec!(0.5),
            market_cap: None,
            volume: None,
            logo_url: "https://icons.example/stock.svg".to_string(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn matches_any_is_case_insensitive_across_fields() {
        let stock = summary("PETR4", "Petrobras", Some("Energy"));

        assert!(stock.matches_any(&["petr".to_string()]));
        assert!(stock.matches_any(&["BRAS".to_string()]));
        assert!(stock.matches_any(&["energy".to_string()]));
        assert!(stock.matches_any(&["zzz".to_string(), "petr4".to_string()]));
        assert!(!stock.matches_any(&["banco".to_string()]));
    }

    #[test]
    fn matches_any_tolerates_missing_sector() {
        let stock = summary("MGLU3", "Magazine Luiza", None);
        assert!(!stock.matches_any(&["retail".to_string()]));
        assert!(stock.matches_any(&["mglu".to_string()]));
    }

    #[test]
    fn search_query_drops_blank_terms_and_defaults_paging() {
        let query = SearchQuery::new(
            vec!["  petr ".to_string(), "".to_string(), "  ".to_string()],
            None,
            None,
        )
        .unwrap();

        assert_eq!(query.terms(), &["petr".to_string()]);
        assert_eq!(query.page(), 1);
        assert_eq!(query.page_size(), 10);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn search_query_rejects_empty_terms() {
        let result = SearchQuery::new(vec!["   ".to_string()], None, None);
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn search_query_rejects_zero_paging() {
        assert!(SearchQuery::new(vec!["a".to_string()], Some(0), None).is_err());
        assert!(SearchQuery::new(vec!["a".to_string()], None, Some(0)).is_err());
    }

    #[test]
    fn offset_skips_prior_pages() {
        let query = SearchQuery::new(vec!["banco".to_string()], Some(2), Some(1)).unwrap();
        assert_eq!(query.offset(), 1);

        let query = SearchQuery::new(vec!["banco".to_string()], Some(3), Some(25)).unwrap();
        assert_eq!(query.offset(), 50);
    }

    #[test]
    fn price_point_normalizes_ticker() {
        let point = PricePoint::new(
            "petr4",
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            dec!(30),
            dec!(29.5),
        );
        assert_eq!(point.ticker, "PETR4");
    }
}
