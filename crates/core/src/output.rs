//! The produced interface: status-tagged results for the presentation layer.
//!
//! Callers must render "no results" differently from "service down", so an
//! empty query result is success-shaped ([`OutputStatus::Empty`]) rather
//! than an error. Failures carry a human-readable message list.

use crate::market_data::model::{DailyQuote, StockSummary};

/// Status of a produced [`Output`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStatus {
    /// Happy path; a payload is present.
    Ok,
    /// The query completed but matched nothing. Not a failure.
    Empty,
    /// A critical-path store or upstream error occurred.
    UnexpectedError,
}

/// Lazy, single-pass quote history payload. Produced fresh per call and not
/// restartable once consumed.
pub type QuoteStream = Box<dyn Iterator<Item = DailyQuote> + Send>;

/// Lazy, single-pass stock search payload.
pub type StockStream = Box<dyn Iterator<Item = StockSummary> + Send>;

/// Result envelope returned by the retrieval engines.
pub struct Output<T> {
    status: OutputStatus,
    value: Option<T>,
    messages: Vec<String>,
}

impl<T> Output<T> {
    /// Success with a payload.
    pub fn ok(value: T) -> Self {
        Self {
            status: OutputStatus::Ok,
            value: Some(value),
            messages: Vec::new(),
        }
    }

    /// Success-shaped empty result.
    pub fn empty() -> Self {
        Self {
            status: OutputStatus::Empty,
            value: None,
            messages: Vec::new(),
        }
    }

    /// Failure carrying the underlying error messages.
    pub fn unexpected_error(messages: Vec<String>) -> Self {
        Self {
            status: OutputStatus::UnexpectedError,
            value: None,
            messages,
        }
    }

    pub fn status(&self) -> OutputStatus {
        self.status
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, OutputStatus::Ok | OutputStatus::Empty)
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Success or failure messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Consumes the output, yielding the payload if one is present.
    pub fn into_value(self) -> Option<T> {
        self.value
    }
}

impl<T> std::fmt::Debug for Output<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Output")
            .field("status", &self.status)
            .field("has_value", &self.value.is_some())
            .field("messages", &self.messages)
            .finish()
    }
}
