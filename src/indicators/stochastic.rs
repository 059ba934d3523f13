// =============================================================================
// Stochastic Oscillator (%K / %D)
// =============================================================================
//
//   %K = 100 * (C - L_n) / (H_n - L_n)   over rolling n-bar extremes
//   %D = rolling mean(d_period) of %K
//
// A zero-range window (H_n == L_n) leaves %K undefined (NaN); such rows are
// pruned downstream rather than patched with a sentinel.

use super::rolling::{rolling_max, rolling_mean, rolling_min};

/// %K and %D, aligned with the input.
#[derive(Debug, Clone)]
pub struct StochasticColumns {
    pub k: Vec<f64>,
    pub d: Vec<f64>,
}

/// Compute the stochastic oscillator over the given OHLC columns.
pub fn stochastic(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    k_period: usize,
    d_period: usize,
) -> StochasticColumns {
    let highest = rolling_max(highs, k_period);
    let lowest = rolling_min(lows, k_period);

    let k: Vec<f64> = (0..closes.len())
        .map(|i| {
            let range = highest[i] - lowest[i];
            if range != 0.0 {
                100.0 * (closes[i] - lowest[i]) / range
            } else {
                f64::NAN
            }
        })
        .collect();
    let d = rolling_mean(&k, d_period);

    StochasticColumns { k, d }
}
