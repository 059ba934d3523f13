// =============================================================================
// Directional System (+DI / -DI / ADX) — raw directional movement variant
// =============================================================================
//
// This implementation uses RAW bar-to-bar deltas as directional movement,
// without the classic "larger move wins, negatives clamped" gate:
//
//   +DM[i] = H[i] - H[i-1]
//   -DM[i] = L[i] - L[i-1]
//   DI±    = 100 * rolling-mean(period)(DM±) / ATR(period)
//   DX     = 100 * |+DI - -DI| / (+DI + -DI)
//   ADX    = rolling-mean(period) of |DX|
//
// Raw deltas can be negative, so DI± can be negative too; DX takes the
// absolute value before the final smoothing.

use super::atr::atr;
use super::rolling::rolling_mean;

/// The three directional columns, aligned with the input.
#[derive(Debug, Clone)]
pub struct DirectionalColumns {
    pub plus_di: Vec<f64>,
    pub minus_di: Vec<f64>,
    pub adx: Vec<f64>,
}

/// Compute +DI, -DI, and ADX over the given OHLC columns.
pub fn directional_index(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    period: usize,
) -> DirectionalColumns {
    let n = highs.len();

    let mut plus_dm = vec![f64::NAN; n];
    let mut minus_dm = vec![f64::NAN; n];
    for i in 1..n {
        plus_dm[i] = highs[i] - highs[i - 1];
        minus_dm[i] = lows[i] - lows[i - 1];
    }

    let smoothed_plus = rolling_mean(&plus_dm, period);
    let smoothed_minus = rolling_mean(&minus_dm, period);
    let atr_series = atr(highs, lows, closes, period);

    let mut plus_di = Vec::with_capacity(n);
    let mut minus_di = Vec::with_capacity(n);
    let mut dx = Vec::with_capacity(n);

    for i in 0..n {
        let (pdi, mdi) = if atr_series[i] != 0.0 {
            (
                100.0 * smoothed_plus[i] / atr_series[i],
                100.0 * smoothed_minus[i] / atr_series[i],
            )
        } else {
            (f64::NAN, f64::NAN)
        };
        plus_di.push(pdi);
        minus_di.push(mdi);

        let di_sum = pdi + mdi;
        dx.push(if di_sum != 0.0 {
            (100.0 * (pdi - mdi).abs() / di_sum).abs()
        } else {
            f64::NAN
        });
    }

    let adx = rolling_mean(&dx, period);

    DirectionalColumns {
        plus_di,
        minus_di,
        adx,
    }
}
