use thiserror::Error;

/// Validation errors raised by domain type constructors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("pair symbol cannot be empty")]
    EmptyPair,
    #[error("pair symbol length {len} exceeds max {max}")]
    PairTooLong { len: usize, max: usize },
    #[error("pair symbol contains invalid character '{ch}' at index {index}")]
    PairInvalidChar { ch: char, index: usize },

    #[error("invalid interval '{value}', expected one of 1m, 5m, 15m, 1h, 4h, 1d, 1w")]
    InvalidInterval { value: String },

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },
    #[error("unix timestamp {value} is out of range")]
    TimestampOutOfRange { value: i64 },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },

    #[error("bar high must be >= low")]
    InvalidBarRange,
    #[error("bar open/close must be within high/low range")]
    InvalidBarBounds,
}

/// Fatal configuration errors raised when constructing a pairlist provider.
///
/// The host is expected to abort startup on any of these.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("`number_assets` not specified, check the pairlist configuration")]
    MissingNumberAssets,
    #[error("`number_assets` must be at least 1, got {value}")]
    InvalidNumberAssets { value: u32 },
    #[error("sort key '{value}' is not one of askVolume, bidVolume, quoteVolume")]
    InvalidSortKey { value: String },
    #[error("selection range {min}..={max} is empty")]
    InvalidSelectionRange { min: u32, max: u32 },
    #[error("volatility band [{min}, {max}] is empty or not finite")]
    InvalidVolatilityBand { min: f64, max: f64 },
    #[error("exchange does not support bulk ticker fetch, required for dynamic pair selection")]
    BulkTickersUnsupported,
}
