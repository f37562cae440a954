//! Pairlist provider contract and collaborators.
//!
//! The host composes an ordered chain of [`PairListProvider`] implementations
//! and calls `generate` then `filter` once per bot iteration. This crate
//! ships one implementation, [`VolatilityPairList`].

use std::future::Future;
use std::pin::Pin;

use crate::{Pair, TickerMap};

mod volatility;

pub use volatility::VolatilityPairList;

pub type PairsFuture<'a> = Pin<Box<dyn Future<Output = Vec<Pair>> + Send + 'a>>;

/// Static blacklist / market-validity collaborator.
///
/// Applied on every invocation, independent of the refresh cycle.
pub trait PairListManager: Send + Sync {
    /// Drop blacklisted and inactive-market pairs, preserving order.
    fn verify_blacklist(&self, pairlist: Vec<Pair>) -> Vec<Pair>;
}

/// Host-facing contract implemented by every pairlist provider.
pub trait PairListProvider: Send + Sync {
    /// Provider name used in logs and startup messages.
    fn name(&self) -> &'static str;

    /// Whether the host must supply a full ticker snapshot to `generate`
    /// and `filter`.
    fn needs_tickers(&self) -> bool;

    /// Human-readable summary for startup logs.
    fn short_description(&self) -> String;

    /// Produce the pairlist for this iteration.
    ///
    /// `cached` is the previously generated list; providers with internal
    /// caching return it unchanged when still valid.
    fn generate<'a>(&'a self, cached: Vec<Pair>, tickers: &'a TickerMap) -> PairsFuture<'a>;

    /// Filter an upstream pairlist. Runs on every iteration.
    fn filter<'a>(&'a self, pairlist: Vec<Pair>, tickers: &'a TickerMap) -> PairsFuture<'a>;
}
