// =============================================================================
// Ultimate Oscillator
// =============================================================================
//
// Blends buying pressure across three horizons:
//
//   BP      = C - min(L, prevC)
//   TR      = max(H - L, |H - prevC|, |L - prevC|)
//   avg_k   = rolling-sum(k)(BP) / rolling-sum(k)(TR)   for k in {7, 14, 28}
//   UO      = 100 * (4*avg7 + 2*avg14 + avg28) / 7
//
// BP needs a prior close, so the first bar is undefined and the oscillator
// becomes defined once the 28-bar sums fill. A zero TR sum leaves the value
// undefined.

use super::atr::true_range;
use super::rolling::rolling_sum;

/// Compute the Ultimate Oscillator over the given OHLC columns with the
/// standard 7/14/28 horizons.
pub fn ultimate_oscillator(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    short: usize,
    medium: usize,
    long: usize,
) -> Vec<f64> {
    let n = closes.len();

    let mut bp = vec![f64::NAN; n];
    for i in 1..n {
        bp[i] = closes[i] - lows[i].min(closes[i - 1]);
    }
    let tr = true_range(highs, lows, closes);

    let horizons = [
        (rolling_sum(&bp, short), rolling_sum(&tr, short)),
        (rolling_sum(&bp, medium), rolling_sum(&tr, medium)),
        (rolling_sum(&bp, long), rolling_sum(&tr, long)),
    ];

    (0..n)
        .map(|i| {
            let mut avgs = [0.0_f64; 3];
            for (slot, (bp_sum, tr_sum)) in avgs.iter_mut().zip(horizons.iter()) {
                let (b, t) = (bp_sum[i], tr_sum[i]);
                if b.is_nan() || t.is_nan() || t == 0.0 {
                    return f64::NAN;
                }
                *slot = b / t;
            }
            100.0 * (4.0 * avgs[0] + 2.0 * avgs[1] + avgs[2]) / 7.0
        })
        .collect()
}
