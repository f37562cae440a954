use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const MAX_PAIR_LEN: usize = 24;

/// Normalized exchange pair symbol, e.g. `BTC/USDT`.
///
/// Treated as opaque by the pipeline; quote-currency resolution is delegated
/// to the exchange collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pair(String);

impl Pair {
    /// Parse and normalize a pair symbol to uppercase.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyPair);
        }

        let normalized = trimmed.to_ascii_uppercase();
        let len = normalized.chars().count();
        if len > MAX_PAIR_LEN {
            return Err(ValidationError::PairTooLong {
                len,
                max: MAX_PAIR_LEN,
            });
        }

        for (index, ch) in normalized.chars().enumerate() {
            let valid = ch.is_ascii_alphanumeric() || matches!(ch, '/' | '.' | '-' | '_' | ':');
            if !valid {
                return Err(ValidationError::PairInvalidChar { ch, index });
            }
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Pair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Pair {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Pair {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Pair> for String {
    fn from(value: Pair) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes_pair() {
        let parsed = Pair::parse(" btc/usdt ").expect("pair should parse");
        assert_eq!(parsed.as_str(), "BTC/USDT");
    }

    #[test]
    fn accepts_leading_digit() {
        let parsed = Pair::parse("1INCH/USDT").expect("pair should parse");
        assert_eq!(parsed.as_str(), "1INCH/USDT");
    }

    #[test]
    fn rejects_empty_pair() {
        let err = Pair::parse("   ").expect_err("must fail");
        assert!(matches!(err, ValidationError::EmptyPair));
    }

    #[test]
    fn rejects_invalid_chars() {
        let err = Pair::parse("BTC$USDT").expect_err("must fail");
        assert!(matches!(err, ValidationError::PairInvalidChar { .. }));
    }
}
