// =============================================================================
// Shared types for the Meridian analyzer
// =============================================================================

use serde::{Deserialize, Serialize};

/// Categorical trading signal attached to every result record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "HOLD")]
    Hold,
    #[serde(rename = "SELL")]
    Sell,
    #[serde(rename = "NO DATA")]
    NoData,
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Hold => write!(f, "HOLD"),
            Self::Sell => write!(f, "SELL"),
            Self::NoData => write!(f, "NO DATA"),
        }
    }
}

/// Optional scalar metadata for a ticker, fetched alongside its history.
///
/// Any field may be absent; absence never faults the pipeline. Missing fields
/// surface as `null` in the result record (price falls back to the last
/// computed close, the display name to the raw symbol).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteMeta {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub sector: Option<String>,
}

/// Successful per-ticker result record: identity + metadata, the latest value
/// of every indicator column (rounded to 2 decimals), and the composite
/// assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerAnalysis {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub pe_ratio: Option<f64>,
    pub sector: Option<String>,

    // --- Trend -------------------------------------------------------------
    pub sma_50: f64,
    pub sma_200: f64,
    pub ema_20: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub adx: f64,
    pub plus_di: f64,
    pub minus_di: f64,
    pub supertrend: f64,
    pub supertrend_bullish: bool,

    // --- Momentum ----------------------------------------------------------
    pub rsi: f64,
    pub stochastic_k: f64,
    pub stochastic_d: f64,
    pub williams_r: f64,
    pub cci: f64,
    pub rvi: f64,
    pub rvi_signal: f64,
    pub ultimate_osc: f64,

    // --- Volatility --------------------------------------------------------
    pub bollinger_upper: f64,
    pub bollinger_mid: f64,
    pub bollinger_lower: f64,
    pub bollinger_width: f64,
    pub atr: f64,
    pub atr_pct: f64,
    pub donchian_high: f64,
    pub donchian_low: f64,
    pub donchian_mid: f64,

    // --- Volume ------------------------------------------------------------
    pub volume: f64,
    pub volume_sma_20: f64,
    pub mfi: f64,
    pub obv: f64,

    // --- Assessment --------------------------------------------------------
    pub score: i32,
    pub rationale: Vec<String>,
    pub signal: Signal,
}

/// Failure per-ticker result record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisFailure {
    pub symbol: String,
    pub error: String,
    pub signal: Signal,
}

/// One entry of the batch response: either a full analysis or a failure
/// record. Serialized untagged so clients see a flat object either way.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TickerReport {
    Analysis(Box<TickerAnalysis>),
    Failure(AnalysisFailure),
}

impl TickerReport {
    /// Build a failure record for `symbol` with signal `NO DATA`.
    pub fn failure(symbol: impl Into<String>, error: impl Into<String>) -> Self {
        Self::Failure(AnalysisFailure {
            symbol: symbol.into(),
            error: error.into(),
            signal: Signal::NoData,
        })
    }

    /// The ticker symbol this report belongs to.
    pub fn symbol(&self) -> &str {
        match self {
            Self::Analysis(a) => &a.symbol,
            Self::Failure(f) => &f.symbol,
        }
    }

    /// The categorical signal of this report.
    pub fn signal(&self) -> Signal {
        match self {
            Self::Analysis(a) => a.signal,
            Self::Failure(f) => f.signal,
        }
    }
}

/// Round to 2 decimal places for presentation in result records.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_display_matches_wire_format() {
        assert_eq!(Signal::Buy.to_string(), "BUY");
        assert_eq!(Signal::Hold.to_string(), "HOLD");
        assert_eq!(Signal::Sell.to_string(), "SELL");
        assert_eq!(Signal::NoData.to_string(), "NO DATA");
    }

    #[test]
    fn signal_serializes_to_display_form() {
        assert_eq!(serde_json::to_string(&Signal::Buy).unwrap(), "\"BUY\"");
        assert_eq!(
            serde_json::to_string(&Signal::NoData).unwrap(),
            "\"NO DATA\""
        );
    }

    #[test]
    fn failure_record_carries_no_data_signal() {
        let report = TickerReport::failure("XYZ", "upstream fetch failed: boom");
        assert_eq!(report.symbol(), "XYZ");
        assert_eq!(report.signal(), Signal::NoData);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["symbol"], "XYZ");
        assert_eq!(json["signal"], "NO DATA");
        assert!(json["error"].as_str().unwrap().contains("boom"));
    }

    #[test]
    fn quote_meta_defaults_to_all_absent() {
        let meta = QuoteMeta::default();
        assert!(meta.name.is_none());
        assert!(meta.price.is_none());
        assert!(meta.trailing_pe.is_none());
        assert!(meta.sector.is_none());
    }

    #[test]
    fn round2_behaviour() {
        assert_eq!(round2(123.4567), 123.46);
        assert_eq!(round2(-0.126), -0.13);
        assert_eq!(round2(42.0), 42.0);
        assert_eq!(round2(0.005), 0.01);
    }
}
