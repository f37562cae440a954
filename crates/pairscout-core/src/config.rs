//! Pairlist configuration: raw serde surface and resolved settings.
//!
//! The host hands over its JSON pairlist block as [`PairListSettings`];
//! [`SelectionConfig::resolve`] validates it into the form the provider
//! actually runs with. Validation failures are fatal at construction.

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::selection::VolatilityBand;
use crate::{ConfigError, Interval};

pub const DEFAULT_MIN_VOLATILITY: f64 = 0.0005;
pub const DEFAULT_MAX_VOLATILITY: f64 = 0.01;
pub const DEFAULT_REFRESH_PERIOD_SECS: u64 = 7200;
pub const DEFAULT_LOOKBACK_DAYS: u64 = 3;
pub const DEFAULT_SELECTION_MIN: u32 = 10;
pub const DEFAULT_SELECTION_MAX: u32 = 25;

/// Ticker volume field used for the `min_value` floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum SortKey {
    #[serde(rename = "askVolume")]
    AskVolume,
    #[serde(rename = "bidVolume")]
    BidVolume,
    #[serde(rename = "quoteVolume")]
    QuoteVolume,
}

impl SortKey {
    pub const ALL: [Self; 3] = [Self::AskVolume, Self::BidVolume, Self::QuoteVolume];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AskVolume => "askVolume",
            Self::BidVolume => "bidVolume",
            Self::QuoteVolume => "quoteVolume",
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        Self::QuoteVolume
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "askVolume" => Ok(Self::AskVolume),
            "bidVolume" => Ok(Self::BidVolume),
            "quoteVolume" => Ok(Self::QuoteVolume),
            other => Err(ConfigError::InvalidSortKey {
                value: other.to_owned(),
            }),
        }
    }
}

/// Global bot settings inherited by every pairlist provider.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    pub stake_currency: String,
    pub interval: Interval,
}

/// Raw pairlist configuration block, as found in the host's JSON config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PairListSettings {
    pub number_assets: Option<u32>,
    pub sort_key: Option<String>,
    pub min_value: f64,
    pub min_volatility: f64,
    pub max_volatility: f64,
    pub selection_min: u32,
    pub selection_max: u32,
    pub refresh_period_secs: u64,
    pub lookback_days: u64,
}

impl Default for PairListSettings {
    fn default() -> Self {
        Self {
            number_assets: None,
            sort_key: None,
            min_value: 0.0,
            min_volatility: DEFAULT_MIN_VOLATILITY,
            max_volatility: DEFAULT_MAX_VOLATILITY,
            selection_min: DEFAULT_SELECTION_MIN,
            selection_max: DEFAULT_SELECTION_MAX,
            refresh_period_secs: DEFAULT_REFRESH_PERIOD_SECS,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
        }
    }
}

/// Validated pairlist configuration used by the provider.
#[derive(Debug, Clone)]
pub struct SelectionConfig {
    pub number_assets: u32,
    pub sort_key: SortKey,
    pub min_value: f64,
    pub band: VolatilityBand,
    pub selection_min: u32,
    pub selection_max: u32,
    pub refresh_period: Duration,
    pub lookback: Duration,
}

impl SelectionConfig {
    pub fn resolve(settings: &PairListSettings) -> Result<Self, ConfigError> {
        let number_assets = settings
            .number_assets
            .ok_or(ConfigError::MissingNumberAssets)?;
        if number_assets < 1 {
            return Err(ConfigError::InvalidNumberAssets {
                value: number_assets,
            });
        }

        let sort_key = match settings.sort_key.as_deref() {
            Some(value) => value.parse::<SortKey>()?,
            None => SortKey::default(),
        };
        if sort_key != SortKey::QuoteVolume {
            warn!(
                key = %sort_key,
                "DEPRECATED: using any sort key other than quoteVolume is deprecated"
            );
        }

        if settings.selection_min < 1 || settings.selection_min > settings.selection_max {
            return Err(ConfigError::InvalidSelectionRange {
                min: settings.selection_min,
                max: settings.selection_max,
            });
        }

        let band = VolatilityBand::new(settings.min_volatility, settings.max_volatility)?;

        Ok(Self {
            number_assets,
            sort_key,
            min_value: settings.min_value,
            band,
            selection_min: settings.selection_min,
            selection_max: settings.selection_max,
            refresh_period: Duration::from_secs(settings.refresh_period_secs),
            lookback: Duration::from_secs(settings.lookback_days * 24 * 3600),
        })
    }
}
