//! TTL-memoized upstream health probe.
//!
//! Health endpoints may be polled aggressively; the prober bounds upstream
//! call volume by caching one probe result per TTL window, process-wide.

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::debug;
use tokio::sync::Mutex;

use super::constants::{HEALTH_PROBE_TICKER, HEALTH_PROBE_TTL};
use super::provider::UpstreamProvider;
use super::range::QuoteRange;
use rust_decimal::Decimal;

/// Upstream health classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthState {
    Healthy,
    /// Reserved for callers aggregating multiple probes; the upstream probe
    /// itself reports Healthy or Unhealthy.
    Degraded,
    Unhealthy,
}

/// Outcome of a health probe, with the upstream error attached when one
/// occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub state: HealthState,
    pub message: Option<String>,
}

impl ProbeResult {
    fn healthy() -> Self {
        Self {
            state: HealthState::Healthy,
            message: None,
        }
    }

    fn unhealthy(message: impl Into<String>) -> Self {
        Self {
            state: HealthState::Unhealthy,
            message: Some(message.into()),
        }
    }
}

struct CachedProbe {
    result: ProbeResult,
    probed_at: Instant,
}

/// Probes the upstream provider with a minimal quote request, memoizing the
/// result for [`HEALTH_PROBE_TTL`].
///
/// The cache mutex is held for the duration of a cache-miss probe, network
/// call included: concurrent callers serialize into at most one live
/// upstream call per TTL window.
pub struct UpstreamHealthProber {
    provider: Arc<dyn UpstreamProvider>,
    ttl: Duration,
    cached: Mutex<Option<CachedProbe>>,
}

impl UpstreamHealthProber {
    pub fn new(provider: Arc<dyn UpstreamProvider>) -> Self {
        Self::with_ttl(provider, HEALTH_PROBE_TTL)
    }

    /// Prober with a custom TTL. The TTL only bounds call volume; it has no
    /// correctness role.
    pub fn with_ttl(provider: Arc<dyn UpstreamProvider>, ttl: Duration) -> Self {
        Self {
            provider,
            ttl,
            cached: Mutex::new(None),
        }
    }

    /// Returns the cached probe result when younger than the TTL, otherwise
    /// performs one real upstream probe and caches it.
    pub async fn probe(&self) -> ProbeResult {
        let mut cached = self.cached.lock().await;

        if let Some(entry) = cached.as_ref() {
            if entry.probed_at.elapsed() < self.ttl {
                debug!("Health probe served from cache: {:?}", entry.result.state);
                return entry.result.clone();
            }
        }

        let result = self.probe_upstream().await;
        *cached = Some(CachedProbe {
            result: result.clone(),
            probed_at: Instant::now(),
        });
        result
    }

    /// One minimal upstream request: the reference ticker over the smallest
    /// range. A positive close is healthy; a structurally valid response
    /// without one is not.
    async fn probe_upstream(&self) -> ProbeResult {
        debug!("Probing upstream health via {}", HEALTH_PROBE_TICKER);

        match self
            .provider
            .quote_history(HEALTH_PROBE_TICKER, QuoteRange::Day)
            .await
        {
            Ok(history) => match history.last() {
                Some(quote) if quote.close > Decimal::ZERO => ProbeResult::healthy(),
                Some(quote) => ProbeResult::unhealthy(format!(
                    "upstream returned non-positive close {} for {}",
                    quote.close, HEALTH_PROBE_TICKER
                )),
                None => ProbeResult::unhealthy(format!(
                    "upstream returned no quotes for {}",
                    HEALTH_PROBE_TICKER
                )),
            },
            Err(e) => ProbeResult::unhealthy(e.to_string()),
        }
    }
}
