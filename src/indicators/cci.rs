// =============================================================================
// Commodity Channel Index (CCI) — robust-scale denominator
// =============================================================================
//
//   TP    = (H + L + C) / 3
//   CCI   = (TP - rolling-mean(period)(TP)) / (0.015 * scale)
//   scale = rolling median absolute deviation of TP, scaled by 1.4826 so it
//           is comparable to a standard deviation
//
// A zero scale (flat typical price across the whole window) is treated as
// CCI = 0 rather than a division blow-up.

use super::rolling::{rolling_mad_scale, rolling_mean};

/// Compute CCI(period) over the given OHLC columns.
pub fn cci(highs: &[f64], lows: &[f64], closes: &[f64], period: usize) -> Vec<f64> {
    let n = closes.len();
    let tp: Vec<f64> = (0..n)
        .map(|i| (highs[i] + lows[i] + closes[i]) / 3.0)
        .collect();

    let mean = rolling_mean(&tp, period);
    let scale = rolling_mad_scale(&tp, period);

    (0..n)
        .map(|i| {
            if mean[i].is_nan() || scale[i].is_nan() {
                f64::NAN
            } else if scale[i] == 0.0 {
                0.0
            } else {
                (tp[i] - mean[i]) / (0.015 * scale[i])
            }
        })
        .collect()
}
