// =============================================================================
// On-Balance Volume (OBV)
// =============================================================================
//
// A running total driven by the close-to-close direction:
//
//   obv[0] = 0
//   obv[i] = obv[i-1] + V[i]   if C[i] > C[i-1]
//            obv[i-1] - V[i]   if C[i] < C[i-1]
//            obv[i-1]          otherwise
//
// Single forward pass carrying the previous cumulative value; defined for
// every row, including the first.

/// Compute the OBV series over closes and volumes.
pub fn obv(closes: &[f64], volumes: &[f64]) -> Vec<f64> {
    let n = closes.len();
    let mut out = Vec::with_capacity(n);
    if n == 0 {
        return out;
    }

    let mut acc = 0.0_f64;
    out.push(acc);
    for i in 1..n {
        if closes[i] > closes[i - 1] {
            acc += volumes[i];
        } else if closes[i] < closes[i - 1] {
            acc -= volumes[i];
        }
        out.push(acc);
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let out = obv(&[100.0], &[5_000.0]);
        assert_eq!(out, vec![0.0]);
    }

    #[test]
    fn accumulates_by_direction() {
        let closes = [100.0, 101.0, 100.5, 100.5, 102.0];
        let volumes = [1_000.0, 2_000.0, 3_000.0, 4_000.0, 5_000.0];
        let out = obv(&closes, &volumes);
        // +2000 (up), -3000 (down), unchanged (equal), +5000 (up).
        assert_eq!(out, vec![0.0, 2_000.0, -1_000.0, -1_000.0, 4_000.0]);
    }

    #[test]
    fn replay_is_deterministic() {
        let closes: Vec<f64> = (0..100).map(|i| 100.0 + (i as f64 * 0.9).sin() * 3.0).collect();
        let volumes: Vec<f64> = (0..100).map(|i| 1_000.0 + (i % 11) as f64 * 77.0).collect();
        let first = obv(&closes, &volumes);
        let second = obv(&closes, &volumes);
        assert_eq!(first, second);
    }

    #[test]
    fn flat_closes_stay_at_zero() {
        let out = obv(&[50.0; 20], &[9_999.0; 20]);
        assert!(out.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn length_matches_input() {
        let closes: Vec<f64> = (0..37).map(|i| i as f64).collect();
        let volumes = vec![10.0; 37];
        assert_eq!(obv(&closes, &volumes).len(), 37);
    }
}
