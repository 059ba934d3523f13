// =============================================================================
// Money Flow Index (MFI)
// =============================================================================
//
//   TP        = (H + L + C) / 3
//   raw flow  = TP * V
//   positive flow when TP rises vs the prior bar, otherwise negative flow
//   (the opposite side is booked as 0 for that bar)
//   MFI       = 100 - 100 / (1 + sum_n(positive) / sum_n(negative))
//
// A zero negative sum with inflow present saturates at 100; both sums zero
// (only possible with zero volume throughout the window) leaves the value
// undefined.

use super::rolling::rolling_sum;

/// Compute MFI(period) over the given OHLCV columns.
pub fn mfi(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    volumes: &[f64],
    period: usize,
) -> Vec<f64> {
    let n = closes.len();

    let tp: Vec<f64> = (0..n)
        .map(|i| (highs[i] + lows[i] + closes[i]) / 3.0)
        .collect();

    let mut positive = vec![f64::NAN; n];
    let mut negative = vec![f64::NAN; n];
    for i in 1..n {
        let flow = tp[i] * volumes[i];
        if tp[i] > tp[i - 1] {
            positive[i] = flow;
            negative[i] = 0.0;
        } else {
            positive[i] = 0.0;
            negative[i] = flow;
        }
    }

    let pos_sum = rolling_sum(&positive, period);
    let neg_sum = rolling_sum(&negative, period);

    (0..n)
        .map(|i| {
            let (p, m) = (pos_sum[i], neg_sum[i]);
            if p.is_nan() || m.is_nan() {
                f64::NAN
            } else if m == 0.0 && p == 0.0 {
                f64::NAN
            } else if m == 0.0 {
                100.0
            } else {
                100.0 - 100.0 / (1.0 + p / m)
            }
        })
        .collect()
}
