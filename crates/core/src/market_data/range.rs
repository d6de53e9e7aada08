//! Quote lookback ranges and upstream-range compatibility resolution.
//!
//! The upstream provider only accepts a fixed vocabulary of range codes and
//! only grants the longer ones to a small allow-list of reference tickers.
//! [`QuoteRange::compatible_for`] degrades any other request to the smallest
//! always-legal range that still covers it.

use chrono::{Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::market_data::constants::REFERENCE_TICKERS;

/// Supported lookback windows, ordered from shortest to longest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuoteRange {
    Day,
    FiveDays,
    Week,
    Month,
    Quarter,
    Semester,
    Year,
    TwoYears,
    FiveYears,
    Decade,
    YearToDate,
    Max,
}

/// Ranges the upstream accepts for any ticker without a paid plan.
const FREE_RANGES: [QuoteRange; 4] = [
    QuoteRange::Day,
    QuoteRange::FiveDays,
    QuoteRange::Month,
    QuoteRange::Quarter,
];

impl QuoteRange {
    /// The upstream-legal textual code for this range.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteRange::Day => "1d",
            QuoteRange::FiveDays => "5d",
            QuoteRange::Week => "7d",
            QuoteRange::Month => "1mo",
            QuoteRange::Quarter => "3mo",
            QuoteRange::Semester => "6mo",
            QuoteRange::Year => "1y",
            QuoteRange::TwoYears => "2y",
            QuoteRange::FiveYears => "5y",
            QuoteRange::Decade => "10y",
            QuoteRange::YearToDate => "ytd",
            QuoteRange::Max => "max",
        }
    }

    /// Approximate number of calendar days inside this range.
    ///
    /// `YearToDate` is evaluated against today's day-of-year; `Max` is
    /// unbounded.
    pub fn day_count(&self) -> i64 {
        const MONTH: i64 = 30;
        const YEAR: i64 = MONTH * 12;

        match self {
            QuoteRange::Day => 1,
            QuoteRange::FiveDays => 5,
            QuoteRange::Week => 7,
            QuoteRange::Month => MONTH,
            QuoteRange::Quarter => MONTH * 3,
            QuoteRange::Semester => MONTH * 6,
            QuoteRange::Year => YEAR,
            QuoteRange::TwoYears => YEAR * 2,
            QuoteRange::FiveYears => YEAR * 5,
            QuoteRange::Decade => YEAR * 10,
            QuoteRange::YearToDate => i64::from(Utc::now().date_naive().ordinal()),
            QuoteRange::Max => i64::MAX,
        }
    }

    /// The range's start date: today minus [`day_count`](Self::day_count),
    /// saturating at the calendar's lower bound for unbounded ranges.
    pub fn start_date(&self) -> NaiveDate {
        let today = Utc::now().date_naive();
        match self {
            QuoteRange::Max => NaiveDate::MIN,
            _ => today
                .checked_sub_signed(Duration::days(self.day_count()))
                .unwrap_or(NaiveDate::MIN),
        }
    }

    /// Resolves this range into one the upstream will accept for `ticker`.
    ///
    /// Free ranges and reference tickers pass through unchanged. Everything
    /// else degrades to the smallest free range whose day count still covers
    /// the request, falling back to [`QuoteRange::Quarter`].
    pub fn compatible_for(&self, ticker: &str) -> QuoteRange {
        if FREE_RANGES.contains(self) {
            return *self;
        }

        if REFERENCE_TICKERS.contains(&ticker) {
            return *self;
        }

        FREE_RANGES
            .iter()
            .copied()
            .find(|free| free.day_count() >= self.day_count())
            .unwrap_or(QuoteRange::Quarter)
    }
}

impl std::fmt::Display for QuoteRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
