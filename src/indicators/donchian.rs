// =============================================================================
// Donchian Channel
// =============================================================================
//
//   high = rolling max(period) of H
//   low  = rolling min(period) of L
//   mid  = (high + low) / 2

use super::rolling::{rolling_max, rolling_min};

/// The three Donchian columns, aligned with the input.
#[derive(Debug, Clone)]
pub struct DonchianColumns {
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub mid: Vec<f64>,
}

/// Compute the Donchian channel over the given high/low columns.
pub fn donchian(highs: &[f64], lows: &[f64], period: usize) -> DonchianColumns {
    let high = rolling_max(highs, period);
    let low = rolling_min(lows, period);
    let mid = high
        .iter()
        .zip(low.iter())
        .map(|(h, l)| (h + l) / 2.0)
        .collect();

    DonchianColumns { high, low, mid }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warm_up_boundary() {
        let highs: Vec<f64> = (0..30).map(|i| 101.0 + i as f64).collect();
        let lows: Vec<f64> = (0..30).map(|i| 99.0 + i as f64).collect();
        let out = donchian(&highs, &lows, 20);
        assert!(out.high[18].is_nan());
        assert!(!out.high[19].is_nan());
    }

    #[test]
    fn channel_ordering_holds() {
        let n = 80;
        let highs: Vec<f64> = (0..n).map(|i| 102.0 + (i as f64 * 0.4).sin() * 6.0).collect();
        let lows: Vec<f64> = (0..n).map(|i| 98.0 + (i as f64 * 0.4).sin() * 6.0).collect();
        let out = donchian(&highs, &lows, 20);
        for i in 19..n {
            assert!(out.high[i] >= out.low[i]);
            assert!(out.low[i] > 0.0);
            assert!((out.mid[i] - (out.high[i] + out.low[i]) / 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn tracks_extremes_of_the_window() {
        let highs: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
        let lows: Vec<f64> = (0..40).map(|i| 90.0 + i as f64).collect();
        let out = donchian(&highs, &lows, 20);
        // Rising tape: channel high is the newest high, low the oldest low.
        assert!((out.high[39] - 139.0).abs() < 1e-12);
        assert!((out.low[39] - 110.0).abs() < 1e-12);
        assert!((out.mid[39] - 124.5).abs() < 1e-12);
    }
}
