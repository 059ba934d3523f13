// =============================================================================
// Scoring & Classification
// =============================================================================
//
// Reduces the latest enriched row to an integer score, a rationale list, and
// a categorical signal. Pure: the same row + configuration always produces
// the same assessment. Each rule contributes independently; the score is the
// plain sum of the contributions.

pub mod rules;

pub use rules::{default_rules, Factor, ScoreRule, ScoringConfig};

use crate::analysis::EnrichedRow;
use crate::types::Signal;

/// The composite assessment of one ticker's latest enriched row.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub score: i32,
    pub rationale: Vec<String>,
    pub signal: Signal,
}

/// Score `row` under `config`.
pub fn assess(row: &EnrichedRow, config: &ScoringConfig) -> Assessment {
    let mut score = 0;
    let mut rationale = Vec::new();

    for rule in &config.rules {
        let (points, reason) = evaluate(rule, row);
        score += points;
        if points != 0 {
            rationale.push(reason.expect("non-zero contribution must carry a rationale"));
        }
    }

    let signal = if score >= config.buy_threshold {
        Signal::Buy
    } else if score <= config.sell_threshold {
        Signal::Sell
    } else {
        Signal::Hold
    };

    Assessment {
        score,
        rationale,
        signal,
    }
}

/// Evaluate one rule against the row: the contributed points plus a
/// human-readable reason for non-zero contributions.
fn evaluate(rule: &ScoreRule, row: &EnrichedRow) -> (i32, Option<String>) {
    let bull = rule.bull_points;
    let bear = rule.bear_points;

    match rule.factor {
        Factor::TrendAlignment => {
            if row.sma_50 > row.sma_200 {
                (bull, Some("SMA50 above SMA200 (uptrend)".to_string()))
            } else {
                (bear, Some("SMA50 below SMA200 (downtrend)".to_string()))
            }
        }
        Factor::PriceVsMid => {
            if row.close > row.bb_mid {
                (bull, Some("price above 20-day EMA mid-band".to_string()))
            } else {
                (bear, Some("price below 20-day EMA mid-band".to_string()))
            }
        }
        Factor::Rsi => band_reading("RSI", row.rsi_14, rule, 30.0, 70.0, "oversold", "overbought"),
        Factor::MacdCross => {
            if row.macd > row.macd_signal {
                (bull, Some("MACD above signal line".to_string()))
            } else {
                (bear, Some("MACD below signal line".to_string()))
            }
        }
        Factor::BollingerPosition => {
            if row.close < row.bb_lower {
                (bull, Some("price below lower Bollinger band".to_string()))
            } else if row.close > row.bb_upper {
                (bear, Some("price above upper Bollinger band".to_string()))
            } else {
                (0, None)
            }
        }
        Factor::VolumeSurge => {
            if row.volume > row.volume_sma_20 {
                (bull, Some("volume above 20-day average".to_string()))
            } else {
                (bear, Some("volume below 20-day average".to_string()))
            }
        }
        Factor::TrendStrength => {
            let level = rule.bull_level.unwrap_or(25.0);
            if row.adx > level {
                (bull, Some(format!("ADX {:.1} confirms trend strength", row.adx)))
            } else {
                (bear, Some(format!("ADX {:.1} shows a weak trend", row.adx)))
            }
        }
        Factor::VolatilityRegime => {
            let level = rule.bull_level.unwrap_or(2.0);
            if row.atr_pct > level {
                (
                    bull,
                    Some(format!("ATR {:.2}% marks an active volatility regime", row.atr_pct)),
                )
            } else {
                (bear, Some(format!("ATR {:.2}% marks a quiet regime", row.atr_pct)))
            }
        }
        Factor::Mfi => band_reading("MFI", row.mfi_14, rule, 20.0, 80.0, "oversold", "overbought"),
        Factor::Cci => band_reading(
            "CCI",
            row.cci_20,
            rule,
            -100.0,
            100.0,
            "below -100",
            "above +100",
        ),
        Factor::SupertrendDirection => {
            if row.supertrend_bullish {
                (bull, Some("SuperTrend direction bullish".to_string()))
            } else {
                (bear, Some("SuperTrend direction bearish".to_string()))
            }
        }
        Factor::DonchianBreakout => {
            if row.close >= row.donchian_high {
                (bull, Some("close at the 20-day Donchian high".to_string()))
            } else if row.close <= row.donchian_low {
                (bear, Some("close at the 20-day Donchian low".to_string()))
            } else {
                (0, None)
            }
        }
        Factor::RviCross => {
            if row.rvi > row.rvi_signal {
                (bull, Some("RVI above its signal line".to_string()))
            } else {
                (bear, Some("RVI below its signal line".to_string()))
            }
        }
        Factor::UltimateOscillator => band_reading(
            "Ultimate Oscillator",
            row.ultimate_osc,
            rule,
            30.0,
            70.0,
            "oversold",
            "overbought",
        ),
    }
}

/// Shared evaluation for band oscillators: below the bull level contributes
/// the bullish points, above the bear level the bearish points.
fn band_reading(
    label: &str,
    value: f64,
    rule: &ScoreRule,
    default_bull: f64,
    default_bear: f64,
    bull_word: &str,
    bear_word: &str,
) -> (i32, Option<String>) {
    let bull_level = rule.bull_level.unwrap_or(default_bull);
    let bear_level = rule.bear_level.unwrap_or(default_bear);

    if value < bull_level {
        (
            rule.bull_points,
            Some(format!("{label} {value:.1} {bull_word}")),
        )
    } else if value > bear_level {
        (
            rule.bear_points,
            Some(format!("{label} {value:.1} {bear_word}")),
        )
    } else {
        (0, None)
    }
}
