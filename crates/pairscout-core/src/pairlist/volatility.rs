//! Volatility/momentum pairlist provider.
//!
//! Once per refresh period the full ticker universe is narrowed to
//! stake-currency markets, scored from recent candles, filtered on momentum
//! and a volatility band, ranked, and randomly sampled down to a selection
//! size fixed at construction. Between refreshes the cached list is returned
//! verbatim; the blacklist pass in `filter` runs every iteration regardless.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::config::{BotConfig, PairListSettings, SelectionConfig, SortKey};
use crate::exchange::Exchange;
use crate::metrics::{self, PairPerformance};
use crate::refresh::{Clock, RefreshGate, SystemClock};
use crate::selection::{rank_and_sample, VolatilityBand};
use crate::{ConfigError, Interval, Pair, Ticker, TickerMap};

use super::{PairListManager, PairListProvider, PairsFuture};

/// Mutable selection state, locked for the duration of one `generate` call.
#[derive(Debug)]
struct SelectionState {
    gate: RefreshGate,
    rng: fastrand::Rng,
}

/// Dynamic pairlist provider ranking stake-currency markets by volatility.
pub struct VolatilityPairList {
    exchange: Arc<dyn Exchange>,
    manager: Arc<dyn PairListManager>,
    clock: Arc<dyn Clock>,
    stake_currency: String,
    interval: Interval,
    number_assets: u32,
    sort_key: SortKey,
    min_value: f64,
    band: VolatilityBand,
    lookback: std::time::Duration,
    selection_size: usize,
    state: Mutex<SelectionState>,
}

impl VolatilityPairList {
    /// Construct with the system clock and an unseeded random source.
    pub fn new(
        exchange: Arc<dyn Exchange>,
        manager: Arc<dyn PairListManager>,
        bot: &BotConfig,
        settings: &PairListSettings,
    ) -> Result<Self, ConfigError> {
        Self::with_parts(
            exchange,
            manager,
            bot,
            settings,
            Arc::new(SystemClock),
            fastrand::Rng::new(),
        )
    }

    /// Construct with an injected clock and random source.
    ///
    /// Tests pass a manual clock and a seeded rng to make refresh timing and
    /// sampling deterministic.
    pub fn with_parts(
        exchange: Arc<dyn Exchange>,
        manager: Arc<dyn PairListManager>,
        bot: &BotConfig,
        settings: &PairListSettings,
        clock: Arc<dyn Clock>,
        mut rng: fastrand::Rng,
    ) -> Result<Self, ConfigError> {
        let config = SelectionConfig::resolve(settings)?;

        if !exchange.supports_bulk_tickers() {
            return Err(ConfigError::BulkTickersUnsupported);
        }

        // Fixed for the provider's lifetime; never re-drawn on refresh.
        let selection_size = rng.u32(config.selection_min..=config.selection_max) as usize;

        Ok(Self {
            exchange,
            manager,
            clock,
            stake_currency: bot.stake_currency.clone(),
            interval: bot.interval,
            number_assets: config.number_assets,
            sort_key: config.sort_key,
            min_value: config.min_value,
            band: config.band,
            lookback: config.lookback,
            selection_size,
            state: Mutex::new(SelectionState {
                gate: RefreshGate::new(config.refresh_period),
                rng,
            }),
        })
    }

    pub fn selection_size(&self) -> usize {
        self.selection_size
    }

    /// Narrow the ticker universe to stake-currency markets, applying the
    /// `min_value` volume floor when configured.
    fn select_universe(&self, tickers: &TickerMap) -> Vec<Pair> {
        tickers
            .values()
            .filter(|ticker| {
                self.exchange
                    .quote_currency(&ticker.symbol)
                    .is_some_and(|quote| quote == self.stake_currency)
            })
            .filter(|ticker| self.passes_min_value(ticker))
            .map(|ticker| ticker.symbol.clone())
            .collect()
    }

    fn passes_min_value(&self, ticker: &Ticker) -> bool {
        if self.min_value <= 0.0 {
            return true;
        }
        ticker
            .volume(self.sort_key)
            .is_some_and(|volume| volume >= self.min_value)
    }

    async fn generate_inner(&self, cached: Vec<Pair>, tickers: &TickerMap) -> Vec<Pair> {
        let mut state = self.state.lock().await;
        let now = self.clock.now();

        if !state.gate.try_refresh(now) {
            debug!(pairs = cached.len(), "pairlist cache still fresh");
            return cached;
        }

        // Rolling look-back anchor, recomputed at every refresh.
        let since = now.minus(self.lookback);
        let universe = self.select_universe(tickers);
        debug!(candidates = universe.len(), %since, "refreshing pairlist");

        let mut records: Vec<PairPerformance> = Vec::with_capacity(universe.len());
        for pair in &universe {
            match self.exchange.historic_bars(pair, self.interval, since).await {
                Ok(mut series) => {
                    series.drop_incomplete();
                    if let Some(record) = metrics::extract(&series) {
                        records.push(record);
                    }
                }
                Err(error) => {
                    debug!(%pair, %error, "skipping pair after failed candle fetch");
                }
            }
        }

        let selected = rank_and_sample(records, &self.band, self.selection_size, &mut state.rng);
        info!(pairs = selected.len(), "refreshed volatility pairlist");
        selected
    }

    fn filter_inner(&self, pairlist: Vec<Pair>) -> Vec<Pair> {
        let pairs = self.manager.verify_blacklist(pairlist);
        info!(wanted = self.selection_size, pairs = ?pairs, "searching pairs");
        pairs
    }
}

impl PairListProvider for VolatilityPairList {
    fn name(&self) -> &'static str {
        "VolatilityPairList"
    }

    fn needs_tickers(&self) -> bool {
        true
    }

    fn short_description(&self) -> String {
        format!(
            "{} - top {} volatility pairs.",
            self.name(),
            self.number_assets
        )
    }

    fn generate<'a>(&'a self, cached: Vec<Pair>, tickers: &'a TickerMap) -> PairsFuture<'a> {
        Box::pin(self.generate_inner(cached, tickers))
    }

    fn filter<'a>(&'a self, pairlist: Vec<Pair>, _tickers: &'a TickerMap) -> PairsFuture<'a> {
        Box::pin(async move { self.filter_inner(pairlist) })
    }
}
