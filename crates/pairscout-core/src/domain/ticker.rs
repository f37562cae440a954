use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::SortKey;
use crate::Pair;

/// Per-pair snapshot entry from the exchange's bulk ticker fetch.
///
/// Volume fields are optional; exchanges do not report all of them for every
/// market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker {
    pub symbol: Pair,
    #[serde(default)]
    pub ask_volume: Option<f64>,
    #[serde(default)]
    pub bid_volume: Option<f64>,
    #[serde(default)]
    pub quote_volume: Option<f64>,
}

impl Ticker {
    pub fn new(symbol: Pair) -> Self {
        Self {
            symbol,
            ask_volume: None,
            bid_volume: None,
            quote_volume: None,
        }
    }

    /// The volume field selected by the configured sort key.
    pub fn volume(&self, key: SortKey) -> Option<f64> {
        match key {
            SortKey::AskVolume => self.ask_volume,
            SortKey::BidVolume => self.bid_volume,
            SortKey::QuoteVolume => self.quote_volume,
        }
    }
}

/// Full ticker snapshot supplied by the host each invocation, keyed by pair.
pub type TickerMap = HashMap<Pair, Ticker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_volume_by_sort_key() {
        let mut ticker = Ticker::new(Pair::parse("BTC/USDT").expect("pair"));
        ticker.quote_volume = Some(1_000.0);
        assert_eq!(ticker.volume(SortKey::QuoteVolume), Some(1_000.0));
        assert_eq!(ticker.volume(SortKey::AskVolume), None);
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let ticker: Ticker = serde_json::from_str(
            r#"{"symbol": "ETH/USDT", "quoteVolume": 42.5, "askVolume": 1.0}"#,
        )
        .expect("ticker should deserialize");
        assert_eq!(ticker.symbol.as_str(), "ETH/USDT");
        assert_eq!(ticker.quote_volume, Some(42.5));
        assert_eq!(ticker.ask_volume, Some(1.0));
        assert_eq!(ticker.bid_volume, None);
    }
}
