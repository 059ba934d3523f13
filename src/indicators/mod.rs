// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the indicator columns computed by
// the enrichment engine. Every function operates on plain `f64` column
// slices and returns a vector of the SAME length as its input, with
// `f64::NAN` marking warm-up positions where a lookback window has not yet
// filled. The two genuinely sequential recurrences (OBV, SuperTrend) iterate
// strictly forward carrying their previous value as local state.

pub mod adx;
pub mod atr;
pub mod bollinger;
pub mod cci;
pub mod donchian;
pub mod ema;
pub mod macd;
pub mod mfi;
pub mod obv;
pub mod rolling;
pub mod rsi;
pub mod rvi;
pub mod stochastic;
pub mod supertrend;
pub mod ultimate;
pub mod williams;
