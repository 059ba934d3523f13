// =============================================================================
// True Range / Average True Range (ATR)
// =============================================================================
//
// True Range decomposes the full movement of a bar, gaps included:
//
//   TR[i] = max(H - L, |H - prevClose|, |L - prevClose|)
//
// The first bar has no prior close, so its TR degrades to the plain high-low
// range (NaN-skipping max). ATR is the rolling mean of TR over `period`
// bars; ATR% rescales it to a percentage of the close so volatility is
// comparable across price levels.

use super::rolling::rolling_mean;

/// Per-bar True Range series, aligned with the input.
pub fn true_range(highs: &[f64], lows: &[f64], closes: &[f64]) -> Vec<f64> {
    let n = highs.len();
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let hl = highs[i] - lows[i];
        if i == 0 {
            out.push(hl);
            continue;
        }
        let prev_close = closes[i - 1];
        let hc = (highs[i] - prev_close).abs();
        let lc = (lows[i] - prev_close).abs();
        out.push(hl.max(hc).max(lc));
    }
    out
}

/// ATR(period) = rolling mean of True Range. NaN until the window fills.
pub fn atr(highs: &[f64], lows: &[f64], closes: &[f64], period: usize) -> Vec<f64> {
    rolling_mean(&true_range(highs, lows, closes), period)
}

/// ATR as a percentage of the close: `100 * atr / close`.
pub fn atr_pct(atr: &[f64], closes: &[f64]) -> Vec<f64> {
    atr.iter()
        .zip(closes.iter())
        .map(|(a, c)| if *c != 0.0 { 100.0 * a / c } else { f64::NAN })
        .collect()
}
