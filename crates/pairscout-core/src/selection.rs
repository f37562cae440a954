//! Ranking and bounded-randomness sampling of scored candidates.

use crate::metrics::PairPerformance;
use crate::{ConfigError, Pair};

/// Ranking ceiling applied after the filter cascade, before sampling.
pub const MAX_RANKED: usize = 25;

/// Closed volatility band candidates must fall inside to be ranked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolatilityBand {
    pub min: f64,
    pub max: f64,
}

impl VolatilityBand {
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ConfigError::InvalidVolatilityBand { min, max });
        }
        Ok(Self { min, max })
    }

    /// Both bounds inclusive. NaN never passes.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Filter, rank, truncate, and randomly sample scored candidates.
///
/// Retains records with strictly positive momentum and in-band volatility,
/// sorts by volatility descending (stable, so ties keep their incoming
/// order), keeps the top [`MAX_RANKED`], then shuffles and takes at most
/// `selection_size`. Fewer survivors than requested is not an error; the
/// result is simply shorter.
pub fn rank_and_sample(
    records: Vec<PairPerformance>,
    band: &VolatilityBand,
    selection_size: usize,
    rng: &mut fastrand::Rng,
) -> Vec<Pair> {
    let mut ranked: Vec<PairPerformance> = records
        .into_iter()
        .filter(|record| record.avg_rate_change > 0.0)
        .filter(|record| band.contains(record.avg_volatility))
        .collect();

    ranked.sort_by(|a, b| b.avg_volatility.total_cmp(&a.avg_volatility));
    ranked.truncate(MAX_RANKED);

    let mut pairs: Vec<Pair> = ranked.into_iter().map(|record| record.pair).collect();
    rng.shuffle(&mut pairs);
    pairs.truncate(selection_size);
    pairs
}
