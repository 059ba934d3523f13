// =============================================================================
// Relative Strength Index (RSI) — rolling-mean averages
// =============================================================================
//
// Per-bar gains and losses are split from the close-to-close delta, then
// averaged with a plain rolling mean over `period` bars (Cutler's variant,
// not Wilder's smoothing):
//
//   gain[i] = max(close[i] - close[i-1], 0)
//   loss[i] = max(close[i-1] - close[i], 0)
//   RS      = avg_gain / avg_loss
//   RSI     = 100 - 100 / (1 + RS)
//
// Zero-division tie-breaks:
//   - avg_loss == 0 with gains present  => RSI saturates at 100 (preserved,
//     no epsilon guard).
//   - avg_gain == avg_loss == 0 (flat)  => RSI = 50 (neutral).

/// Compute the RSI series for `closes`. Output has the same length as the
/// input, NaN until `period` deltas are available (first defined value at
/// index `period`).
pub fn rsi(closes: &[f64], period: usize) -> Vec<f64> {
    let n = closes.len();
    let mut out = vec![f64::NAN; n];
    if period == 0 || n < period + 1 {
        return out;
    }

    let mut gains = vec![f64::NAN; n];
    let mut losses = vec![f64::NAN; n];
    for i in 1..n {
        let delta = closes[i] - closes[i - 1];
        gains[i] = delta.max(0.0);
        losses[i] = (-delta).max(0.0);
    }

    let period_f = period as f64;
    for i in period..n {
        let window = (i + 1 - period)..=i;
        let avg_gain: f64 = gains[window.clone()].iter().sum::<f64>() / period_f;
        let avg_loss: f64 = losses[window].iter().sum::<f64>() / period_f;
        out[i] = rsi_from_averages(avg_gain, avg_loss);
    }
    out
}

/// Convert average gain / average loss into an RSI value.
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_gain.is_nan() || avg_loss.is_nan() {
        return f64::NAN;
    }
    if avg_loss == 0.0 && avg_gain == 0.0 {
        50.0
    } else if avg_loss == 0.0 {
        100.0
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - 100.0 / (1.0 + rs)
    }
}
