//! Exchange collaborator contract consumed by the selection pipeline.

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use crate::{BarSeries, Interval, Pair, UtcDateTime};

/// Per-pair fetch failure from the exchange.
///
/// Never aborts a refresh cycle: the orchestrator skips the affected pair
/// and continues. No retry is attempted within one cycle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    #[error("exchange unavailable: {0}")]
    Unavailable(String),
    #[error("rate limited: {0}")]
    RateLimited(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

pub type BarsFuture<'a> = Pin<Box<dyn Future<Output = Result<BarSeries, ExchangeError>> + Send + 'a>>;

/// Exchange connectivity surface the pipeline depends on.
///
/// Implementations must be `Send + Sync`; the provider holds one behind an
/// `Arc<dyn Exchange>`.
pub trait Exchange: Send + Sync {
    /// Whether the exchange can serve a full ticker snapshot in one call.
    fn supports_bulk_tickers(&self) -> bool;

    /// Resolve the quote currency of a pair, `None` for unknown markets.
    fn quote_currency(&self, pair: &Pair) -> Option<String>;

    /// Fetch historical candles for one pair from `since` onward.
    fn historic_bars<'a>(
        &'a self,
        pair: &'a Pair,
        interval: Interval,
        since: UtcDateTime,
    ) -> BarsFuture<'a>;
}
