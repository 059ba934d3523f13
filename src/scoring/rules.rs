// =============================================================================
// Scoring Rule Table — data-driven composite scoring configuration
// =============================================================================
//
// Several historical revisions of the rule set exist (different thresholds,
// different indicator subsets, different BUY/SELL cutoffs). To reproduce any
// of them without code changes, the rule set is data: a table of
// {factor, trigger levels, point weights} plus the two signal thresholds.
// Swapping the table swaps the revision.
//
// Level semantics per factor:
//   - Band oscillators (rsi, mfi, cci, ultimate_oscillator): reading BELOW
//     `bull_level` contributes `bull_points`, ABOVE `bear_level` contributes
//     `bear_points`.
//   - Gated confirmations (trend_strength via ADX, volatility_regime via
//     ATR%): reading ABOVE `bull_level` contributes `bull_points`.
//   - Comparisons (trend_alignment, price_vs_mid, macd_cross,
//     bollinger_position, volume_surge, supertrend_direction,
//     donchian_breakout, rvi_cross): levels are ignored; the factor's own
//     comparison decides which side contributes.

use serde::{Deserialize, Serialize};

/// Which indicator comparison a rule evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    TrendAlignment,
    PriceVsMid,
    Rsi,
    MacdCross,
    BollingerPosition,
    VolumeSurge,
    TrendStrength,
    VolatilityRegime,
    Mfi,
    Cci,
    SupertrendDirection,
    DonchianBreakout,
    RviCross,
    UltimateOscillator,
}

fn default_bull_points() -> i32 {
    1
}

/// One row of the rule table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRule {
    pub factor: Factor,

    /// Trigger level for the bullish side (meaning depends on the factor).
    #[serde(default)]
    pub bull_level: Option<f64>,

    /// Trigger level for the bearish side.
    #[serde(default)]
    pub bear_level: Option<f64>,

    /// Points contributed when the bullish condition holds.
    #[serde(default = "default_bull_points")]
    pub bull_points: i32,

    /// Points contributed when the bearish condition holds (zero or
    /// negative in every shipped revision).
    #[serde(default)]
    pub bear_points: i32,
}

impl ScoreRule {
    fn new(factor: Factor, bull_points: i32, bear_points: i32) -> Self {
        Self {
            factor,
            bull_level: None,
            bear_level: None,
            bull_points,
            bear_points,
        }
    }

    fn with_levels(
        factor: Factor,
        bull_level: f64,
        bear_level: f64,
        bull_points: i32,
        bear_points: i32,
    ) -> Self {
        Self {
            factor,
            bull_level: Some(bull_level),
            bear_level: Some(bear_level),
            bull_points,
            bear_points,
        }
    }
}

fn default_buy_threshold() -> i32 {
    4
}

fn default_sell_threshold() -> i32 {
    -4
}

/// The full scoring configuration: rule table + signal thresholds.
///
/// `score >= buy_threshold` classifies BUY, `score <= sell_threshold`
/// classifies SELL, anything in between HOLD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_rules")]
    pub rules: Vec<ScoreRule>,

    #[serde(default = "default_buy_threshold")]
    pub buy_threshold: i32,

    #[serde(default = "default_sell_threshold")]
    pub sell_threshold: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            buy_threshold: default_buy_threshold(),
            sell_threshold: default_sell_threshold(),
        }
    }
}

/// The shipped rule table.
pub fn default_rules() -> Vec<ScoreRule> {
    vec![
        ScoreRule::new(Factor::TrendAlignment, 1, -1),
        ScoreRule::new(Factor::PriceVsMid, 1, 0),
        ScoreRule::with_levels(Factor::Rsi, 30.0, 70.0, 1, -1),
        ScoreRule::new(Factor::MacdCross, 1, -1),
        ScoreRule::new(Factor::BollingerPosition, 1, -1),
        ScoreRule::new(Factor::VolumeSurge, 1, 0),
        ScoreRule {
            factor: Factor::TrendStrength,
            bull_level: Some(25.0),
            bear_level: None,
            bull_points: 1,
            bear_points: 0,
        },
        ScoreRule {
            factor: Factor::VolatilityRegime,
            bull_level: Some(2.0),
            bear_level: None,
            bull_points: 1,
            bear_points: 0,
        },
        ScoreRule::with_levels(Factor::Mfi, 20.0, 80.0, 1, -1),
        ScoreRule::with_levels(Factor::Cci, -100.0, 100.0, 1, -1),
        ScoreRule::new(Factor::SupertrendDirection, 1, -1),
        ScoreRule::new(Factor::DonchianBreakout, 1, -1),
        ScoreRule::new(Factor::RviCross, 1, -1),
        ScoreRule::with_levels(Factor::UltimateOscillator, 30.0, 70.0, 1, -1),
    ]
}
