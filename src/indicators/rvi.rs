// =============================================================================
// Relative Vigor Index (RVI)
// =============================================================================
//
// Compares where bars close relative to their open, normalised by range:
//
//   num[i]  = SWMA(C - O)      SWMA = (x[i] + 2x[i-1] + 2x[i-2] + x[i-3]) / 6
//   den[i]  = SWMA(H - L)
//   RVI     = rolling-mean(period)(num) / rolling-mean(period)(den)
//   Signal  = rolling-mean(signal_period) of RVI
//
// A zero denominator (rangeless bars across the window) leaves the value
// undefined.

use super::rolling::rolling_mean;

/// RVI line and its signal line, aligned with the input.
#[derive(Debug, Clone)]
pub struct RviColumns {
    pub rvi: Vec<f64>,
    pub signal: Vec<f64>,
}

/// Compute RVI(period) and its signal over the given OHLC columns.
pub fn rvi(
    opens: &[f64],
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    period: usize,
    signal_period: usize,
) -> RviColumns {
    let n = closes.len();

    let co: Vec<f64> = (0..n).map(|i| closes[i] - opens[i]).collect();
    let hl: Vec<f64> = (0..n).map(|i| highs[i] - lows[i]).collect();

    let num = rolling_mean(&swma4(&co), period);
    let den = rolling_mean(&swma4(&hl), period);

    let line: Vec<f64> = (0..n)
        .map(|i| {
            if den[i].is_nan() || num[i].is_nan() || den[i] == 0.0 {
                f64::NAN
            } else {
                num[i] / den[i]
            }
        })
        .collect();
    let signal = rolling_mean(&line, signal_period);

    RviColumns { rvi: line, signal }
}

/// 4-bar symmetric weighted average with weights (1, 2, 2, 1) over bars
/// i, i-1, i-2, i-3. NaN for the first three positions.
fn swma4(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut out = vec![f64::NAN; n];
    for i in 3..n {
        out[i] =
            (values[i] + 2.0 * values[i - 1] + 2.0 * values[i - 2] + values[i - 3]) / 6.0;
    }
    out
}
