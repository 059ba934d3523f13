// =============================================================================
// Bollinger Bands (EMA mid-band variant)
// =============================================================================
//
//   mid   = EMA(period) of close
//   upper = mid + num_std * rolling sample std(period)
//   lower = mid - num_std * rolling sample std(period)
//   width = (upper - lower) / mid
//
// The mid-band is an EMA (defined from index 0); the band edges and width
// inherit the rolling std's warm-up NaN.

use super::ema::ema;
use super::rolling::rolling_std;

/// The four Bollinger columns, aligned with the input.
#[derive(Debug, Clone)]
pub struct BollingerColumns {
    pub upper: Vec<f64>,
    pub mid: Vec<f64>,
    pub lower: Vec<f64>,
    pub width: Vec<f64>,
}

/// Compute Bollinger Bands over `closes`.
pub fn bollinger(closes: &[f64], period: usize, num_std: f64) -> BollingerColumns {
    let mid = ema(closes, period);
    let std = rolling_std(closes, period);

    let n = closes.len();
    let mut upper = Vec::with_capacity(n);
    let mut lower = Vec::with_capacity(n);
    let mut width = Vec::with_capacity(n);

    for i in 0..n {
        let u = mid[i] + num_std * std[i];
        let l = mid[i] - num_std * std[i];
        upper.push(u);
        lower.push(l);
        width.push(if mid[i] != 0.0 {
            (u - l) / mid[i]
        } else {
            f64::NAN
        });
    }

    BollingerColumns {
        upper,
        mid,
        lower,
        width,
    }
}
