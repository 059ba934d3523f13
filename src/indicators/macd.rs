// =============================================================================
// Moving Average Convergence / Divergence (MACD)
// =============================================================================
//
//   MACD   = EMA(fast) - EMA(slow) of close
//   Signal = EMA(signal_period) of the MACD line
//
// Both lines inherit the EMA's first-value seeding and are therefore defined
// from index 0.

use super::ema::ema;

/// MACD line and its signal line, both aligned with the input.
#[derive(Debug, Clone)]
pub struct MacdColumns {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
}

/// Compute MACD(fast, slow) and its signal EMA over `closes`.
pub fn macd(closes: &[f64], fast: usize, slow: usize, signal_period: usize) -> MacdColumns {
    let fast_ema = ema(closes, fast);
    let slow_ema = ema(closes, slow);

    let line: Vec<f64> = fast_ema
        .iter()
        .zip(slow_ema.iter())
        .map(|(f, s)| f - s)
        .collect();
    let signal = ema(&line, signal_period);

    MacdColumns { macd: line, signal }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macd_lengths_match_input() {
        let closes: Vec<f64> = (1..=50).map(|x| x as f64).collect();
        let out = macd(&closes, 12, 26, 9);
        assert_eq!(out.macd.len(), 50);
        assert_eq!(out.signal.len(), 50);
    }

    #[test]
    fn macd_of_flat_series_is_zero() {
        let closes = vec![100.0; 60];
        let out = macd(&closes, 12, 26, 9);
        for (m, s) in out.macd.iter().zip(out.signal.iter()) {
            assert!(m.abs() < 1e-12);
            assert!(s.abs() < 1e-12);
        }
    }

    #[test]
    fn macd_positive_in_sustained_uptrend() {
        // Fast EMA sits above slow EMA once a ramp is established.
        let closes: Vec<f64> = (1..=120).map(|x| x as f64).collect();
        let out = macd(&closes, 12, 26, 9);
        let last = *out.macd.last().unwrap();
        let last_signal = *out.signal.last().unwrap();
        assert!(last > 0.0, "expected positive MACD, got {last}");
        assert!(last_signal > 0.0);
    }

    #[test]
    fn macd_negative_in_sustained_downtrend() {
        let closes: Vec<f64> = (1..=120).rev().map(|x| x as f64).collect();
        let out = macd(&closes, 12, 26, 9);
        assert!(*out.macd.last().unwrap() < 0.0);
    }

    #[test]
    fn macd_starts_at_zero() {
        // Both EMAs seed with the first close, so the difference starts at 0.
        let closes = vec![50.0, 51.0, 52.0];
        let out = macd(&closes, 12, 26, 9);
        assert!(out.macd[0].abs() < 1e-12);
        assert!(out.signal[0].abs() < 1e-12);
    }
}
