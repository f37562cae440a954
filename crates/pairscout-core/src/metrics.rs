//! Per-pair summary statistics derived from a historical bar series.

use serde::Serialize;

use crate::{BarSeries, Pair};

/// Summary statistics for one candidate pair.
///
/// `avg_rate_change` is the mean single-period fractional close-to-close
/// change (can be negative). `avg_volatility` is the mean single-period true
/// range normalized by the previous close.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairPerformance {
    pub pair: Pair,
    pub avg_rate_change: f64,
    pub avg_volatility: f64,
}

/// Derive momentum and volatility means from a bar series.
///
/// Returns `None` when the series has fewer than two usable bars; a pair
/// without enough closed candles is silently excluded, never an error. NaN
/// inputs are not filtered and propagate into the means; such records fall
/// out of the volatility band downstream.
pub fn extract(series: &BarSeries) -> Option<PairPerformance> {
    let mut rate_sum = 0.0;
    let mut volatility_sum = 0.0;
    let mut count = 0usize;

    for window in series.bars.windows(2) {
        let prev_close = window[0].close;
        if prev_close <= 0.0 {
            continue;
        }
        let bar = &window[1];

        let rate_change = (bar.close - prev_close) / prev_close;
        let true_range = (bar.high - bar.low)
            .max((bar.high - prev_close).abs())
            .max((bar.low - prev_close).abs());

        rate_sum += rate_change;
        volatility_sum += true_range / prev_close;
        count += 1;
    }

    if count == 0 {
        return None;
    }

    Some(PairPerformance {
        pair: series.pair.clone(),
        avg_rate_change: rate_sum / count as f64,
        avg_volatility: volatility_sum / count as f64,
    })
}
