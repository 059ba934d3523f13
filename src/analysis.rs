// =============================================================================
// Enrichment Engine — OHLCV series to indicator table
// =============================================================================
//
// Computes every indicator column over the ENTIRE series (so rolling windows
// and recurrences warm up correctly), then prunes rows still carrying NaN
// warm-up values. Only the last surviving row feeds the scorer, but the full
// table is built so the recurrences see the complete history.
//
// Window sizes follow the standard configuration: SMA 50/200, EMA 20,
// RSI 14, MACD 12/26/9, Bollinger 20, ATR 14, directional system 14,
// stochastic 14/3, Williams 14, MFI 14, CCI 20, SuperTrend 10 x 3.0,
// Donchian 20, RVI 10/4, Ultimate 7/14/28. The 200-bar SMA dominates the
// warm-up, so no row survives pruning before 200 bars exist.

use chrono::NaiveDate;

use crate::errors::AnalyzeError;
use crate::indicators::{
    adx::directional_index,
    atr::{atr, atr_pct},
    bollinger::bollinger,
    cci::cci,
    donchian::donchian,
    ema::ema,
    macd::macd,
    mfi::mfi,
    obv::obv,
    rolling::rolling_mean,
    rsi::rsi,
    rvi::rvi,
    stochastic::stochastic,
    supertrend::supertrend,
    ultimate::ultimate_oscillator,
    williams::williams_r,
};
use crate::market_data::{Bar, SeriesColumns};

/// One bar of the enriched table: the raw OHLCV columns plus every indicator
/// column evaluated at that bar.
#[derive(Debug, Clone)]
pub struct EnrichedRow {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,

    pub sma_50: f64,
    pub sma_200: f64,
    pub ema_20: f64,
    pub rsi_14: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub bb_upper: f64,
    pub bb_mid: f64,
    pub bb_lower: f64,
    pub bb_width: f64,
    pub volume_sma_20: f64,
    pub atr_14: f64,
    pub atr_pct: f64,
    pub plus_di: f64,
    pub minus_di: f64,
    pub adx: f64,
    pub stoch_k: f64,
    pub stoch_d: f64,
    pub williams_r: f64,
    pub mfi_14: f64,
    pub obv: f64,
    pub cci_20: f64,
    pub supertrend: f64,
    pub supertrend_bullish: bool,
    pub donchian_high: f64,
    pub donchian_low: f64,
    pub donchian_mid: f64,
    pub rvi: f64,
    pub rvi_signal: f64,
    pub ultimate_osc: f64,
}

impl EnrichedRow {
    /// All numeric indicator columns, used by the warm-up pruning check.
    fn indicator_columns(&self) -> [f64; 29] {
        [
            self.sma_50,
            self.sma_200,
            self.ema_20,
            self.rsi_14,
            self.macd,
            self.macd_signal,
            self.bb_upper,
            self.bb_mid,
            self.bb_lower,
            self.bb_width,
            self.volume_sma_20,
            self.atr_14,
            self.atr_pct,
            self.plus_di,
            self.minus_di,
            self.adx,
            self.stoch_k,
            self.stoch_d,
            self.williams_r,
            self.mfi_14,
            self.obv,
            self.cci_20,
            self.supertrend,
            self.donchian_high,
            self.donchian_low,
            self.donchian_mid,
            self.rvi,
            self.rvi_signal,
            self.ultimate_osc,
        ]
    }

    /// A row is complete once no indicator column is still in warm-up.
    pub fn is_complete(&self) -> bool {
        self.indicator_columns().iter().all(|v| !v.is_nan())
    }
}

/// Minimum bars accepted by [`analyze_history`] when the caller does not
/// override it via configuration.
pub const DEFAULT_MIN_BARS: usize = 100;

/// Compute the full enriched table for `bars`. The output has exactly one
/// row per input bar, in the same order; early rows carry NaN columns where
/// lookbacks have not filled.
pub fn enrich(bars: &[Bar]) -> Vec<EnrichedRow> {
    let cols = SeriesColumns::from_bars(bars);
    let (opens, highs, lows, closes, volumes) = (
        &cols.opens,
        &cols.highs,
        &cols.lows,
        &cols.closes,
        &cols.volumes,
    );

    let sma_50 = rolling_mean(closes, 50);
    let sma_200 = rolling_mean(closes, 200);
    let ema_20 = ema(closes, 20);
    let rsi_14 = rsi(closes, 14);
    let macd_cols = macd(closes, 12, 26, 9);
    let bb = bollinger(closes, 20, 2.0);
    let volume_sma_20 = rolling_mean(volumes, 20);
    let atr_14 = atr(highs, lows, closes, 14);
    let atr_pct_col = atr_pct(&atr_14, closes);
    let directional = directional_index(highs, lows, closes, 14);
    let stoch = stochastic(highs, lows, closes, 14, 3);
    let willr = williams_r(highs, lows, closes, 14);
    let mfi_14 = mfi(highs, lows, closes, volumes, 14);
    let obv_col = obv(closes, volumes);
    let cci_20 = cci(highs, lows, closes, 20);
    let st = supertrend(highs, lows, closes, 10, 3.0);
    let don = donchian(highs, lows, 20);
    let rvi_cols = rvi(opens, highs, lows, closes, 10, 4);
    let uo = ultimate_oscillator(highs, lows, closes, 7, 14, 28);

    bars.iter()
        .enumerate()
        .map(|(i, bar)| EnrichedRow {
            date: bar.date,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
            sma_50: sma_50[i],
            sma_200: sma_200[i],
            ema_20: ema_20[i],
            rsi_14: rsi_14[i],
            macd: macd_cols.macd[i],
            macd_signal: macd_cols.signal[i],
            bb_upper: bb.upper[i],
            bb_mid: bb.mid[i],
            bb_lower: bb.lower[i],
            bb_width: bb.width[i],
            volume_sma_20: volume_sma_20[i],
            atr_14: atr_14[i],
            atr_pct: atr_pct_col[i],
            plus_di: directional.plus_di[i],
            minus_di: directional.minus_di[i],
            adx: directional.adx[i],
            stoch_k: stoch.k[i],
            stoch_d: stoch.d[i],
            williams_r: willr[i],
            mfi_14: mfi_14[i],
            obv: obv_col[i],
            cci_20: cci_20[i],
            supertrend: st.value[i],
            supertrend_bullish: st.bullish[i],
            donchian_high: don.high[i],
            donchian_low: don.low[i],
            donchian_mid: don.mid[i],
            rvi: rvi_cols.rvi[i],
            rvi_signal: rvi_cols.signal[i],
            ultimate_osc: uo[i],
        })
        .collect()
}

/// Full engine pass: length gate, enrichment, warm-up pruning.
///
/// Returns the pruned table (complete rows only, original order) or the
/// per-ticker error that describes why nothing usable came out.
pub fn analyze_history(bars: &[Bar], min_bars: usize) -> Result<Vec<EnrichedRow>, AnalyzeError> {
    if bars.len() < min_bars {
        return Err(AnalyzeError::InsufficientHistory {
            got: bars.len(),
            need: min_bars,
        });
    }

    let rows: Vec<EnrichedRow> = enrich(bars)
        .into_iter()
        .filter(EnrichedRow::is_complete)
        .collect();

    if rows.is_empty() {
        return Err(AnalyzeError::NoUsableData);
    }
    Ok(rows)
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    /// A gently trending, mildly oscillating series long enough for every
    /// indicator to warm up and stay defined.
    fn trending_bars(n: usize) -> Vec<Bar> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        (0..n)
            .map(|i| {
                let drift = i as f64 * 0.3;
                let wave = (i as f64 * 0.7).sin() * 2.0;
                let close = 100.0 + drift + wave;
                let open = close - 0.6;
                let high = close + 1.8;
                let low = open - 1.4;
                let volume = 1_000_000.0 + ((i % 13) as f64) * 40_000.0;
                Bar::new(start + Duration::days(i as i64), open, high, low, close, volume)
            })
            .collect()
    }

    /// A perfectly flat series: every indicator that divides by a range
    /// degenerates, so pruning removes every row.
    fn flat_bars(n: usize) -> Vec<Bar> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        (0..n)
            .map(|i| Bar::new(start + Duration::days(i as i64), 100.0, 100.0, 100.0, 100.0, 0.0))
            .collect()
    }

    #[test]
    fn enrich_preserves_row_count_and_order() {
        let bars = trending_bars(260);
        let rows = enrich(&bars);
        assert_eq!(rows.len(), bars.len());
        for (row, bar) in rows.iter().zip(bars.iter()) {
            assert_eq!(row.date, bar.date);
            assert_eq!(row.close, bar.close);
        }
        for pair in rows.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn early_rows_carry_warm_up_nans() {
        let bars = trending_bars(260);
        let rows = enrich(&bars);
        assert!(rows[0].sma_50.is_nan());
        assert!(rows[0].sma_200.is_nan());
        assert!(!rows[0].ema_20.is_nan()); // EMA is defined from the start
        assert!(rows[10].adx.is_nan());
        assert!(!rows[199].sma_200.is_nan());
    }

    #[test]
    fn insufficient_history_is_rejected() {
        let bars = trending_bars(99);
        match analyze_history(&bars, DEFAULT_MIN_BARS) {
            Err(AnalyzeError::InsufficientHistory { got, need }) => {
                assert_eq!(got, 99);
                assert_eq!(need, 100);
            }
            other => panic!("expected InsufficientHistory, got {other:?}"),
        }
    }

    #[test]
    fn sub_200_bars_leave_no_usable_rows() {
        // Enough bars to pass the gate but not enough for the 200-bar SMA:
        // every row still carries at least one warm-up NaN.
        let bars = trending_bars(150);
        match analyze_history(&bars, DEFAULT_MIN_BARS) {
            Err(AnalyzeError::NoUsableData) => {}
            other => panic!("expected NoUsableData, got {other:?}"),
        }
    }

    #[test]
    fn pruning_keeps_only_complete_rows() {
        let bars = trending_bars(260);
        let rows = analyze_history(&bars, DEFAULT_MIN_BARS).unwrap();
        // The 200-bar SMA dominates warm-up: rows 0..199 are gone.
        assert_eq!(rows.len(), 61);
        assert!(rows.iter().all(EnrichedRow::is_complete));
        assert_eq!(rows[0].date, bars[199].date);
        assert_eq!(rows.last().unwrap().date, bars[259].date);
    }

    #[test]
    fn degenerate_flat_series_yields_no_usable_data() {
        let bars = flat_bars(260);
        match analyze_history(&bars, DEFAULT_MIN_BARS) {
            Err(AnalyzeError::NoUsableData) => {}
            other => panic!("expected NoUsableData, got {other:?}"),
        }
    }

    #[test]
    fn ramp_of_exactly_200_bars_has_sma50_above_sma200() {
        // Clean upward ramp: the short average sits above the long one on
        // the single complete row.
        let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let bars: Vec<Bar> = (0..200)
            .map(|i| {
                let close = 100.0 + i as f64;
                Bar::new(
                    start + Duration::days(i as i64),
                    close - 0.5,
                    close + 1.0,
                    close - 1.0,
                    close,
                    1_000_000.0,
                )
            })
            .collect();
        let rows = analyze_history(&bars, DEFAULT_MIN_BARS).unwrap();
        assert_eq!(rows.len(), 1);
        let last = rows.last().unwrap();
        assert!(last.sma_50 > last.sma_200);
        assert!(last.supertrend_bullish);
    }

    #[test]
    fn obv_column_matches_standalone_recurrence() {
        let bars = trending_bars(260);
        let rows = enrich(&bars);
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let volumes: Vec<f64> = bars.iter().map(|b| b.volume).collect();
        let expected = crate::indicators::obv::obv(&closes, &volumes);
        for (row, want) in rows.iter().zip(expected.iter()) {
            assert_eq!(row.obv, *want);
        }
    }
}
