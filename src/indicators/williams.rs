// =============================================================================
// Williams %R
// =============================================================================
//
//   %R = -100 * (H_n - C) / (H_n - L_n)   over rolling n-bar extremes
//
// Reads 0 at the top of the trailing range and -100 at the bottom. A
// zero-range window leaves the value undefined (NaN).

use super::rolling::{rolling_max, rolling_min};

/// Compute Williams %R over the given OHLC columns.
pub fn williams_r(highs: &[f64], lows: &[f64], closes: &[f64], period: usize) -> Vec<f64> {
    let highest = rolling_max(highs, period);
    let lowest = rolling_min(lows, period);

    (0..closes.len())
        .map(|i| {
            let range = highest[i] - lowest[i];
            if range != 0.0 {
                -100.0 * (highest[i] - closes[i]) / range
            } else {
                f64::NAN
            }
        })
        .collect()
}
