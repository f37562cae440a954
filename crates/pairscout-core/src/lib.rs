//! Core contracts for pairscout.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - Pairlist configuration surface and resolution
//! - Exchange and pairlist-manager collaborator traits
//! - The metric extraction, ranking/sampling, and refresh-gate pipeline
//! - The `VolatilityPairList` provider consumed by the trading host

pub mod config;
pub mod domain;
pub mod error;
pub mod exchange;
pub mod metrics;
pub mod pairlist;
pub mod refresh;
pub mod selection;

pub use config::{BotConfig, PairListSettings, SelectionConfig, SortKey};
pub use domain::{Bar, BarSeries, Interval, Pair, Ticker, TickerMap, UtcDateTime};
pub use error::{ConfigError, ValidationError};
pub use exchange::{BarsFuture, Exchange, ExchangeError};
pub use metrics::PairPerformance;
pub use pairlist::{PairListManager, PairListProvider, PairsFuture, VolatilityPairList};
pub use refresh::{Clock, RefreshGate, SystemClock};
pub use selection::{rank_and_sample, VolatilityBand, MAX_RANKED};
