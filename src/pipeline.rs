// =============================================================================
// Per-Ticker Analysis Pipeline
// =============================================================================
//
// For each ticker: fetch history (with a deadline) -> length gate -> enrich
// -> prune -> score -> result record. Tickers are embarrassingly parallel,
// so the batch runs them through a bounded ordered stream: up to
// `max_concurrent_fetches` in flight, results collected in INPUT order
// regardless of completion order. A per-ticker failure of any kind becomes a
// failure record in that ticker's slot; it never disturbs its neighbours.
// Dropping the batch future (client disconnect) cancels in-flight work.

use std::time::Duration;

use futures_util::{stream, StreamExt};
use tracing::{debug, info, warn};

use crate::analysis::{self, EnrichedRow};
use crate::config::AnalyzerConfig;
use crate::errors::AnalyzeError;
use crate::provider::QuoteFeed;
use crate::scoring::{self, Assessment};
use crate::types::{round2, QuoteMeta, TickerAnalysis, TickerReport};

/// Analyze `tickers` against `feed`, returning one report per input ticker
/// in input order. Duplicates are processed independently.
pub async fn analyze_tickers<P: QuoteFeed>(
    feed: &P,
    config: &AnalyzerConfig,
    tickers: &[String],
) -> Vec<TickerReport> {
    stream::iter(tickers.iter().cloned())
        .map(|symbol| async move { analyze_one(feed, config, &symbol).await })
        .buffered(config.max_concurrent_fetches.max(1))
        .collect()
        .await
}

/// Analyze a single ticker, converting every pipeline error into a failure
/// record at this boundary.
pub async fn analyze_one<P: QuoteFeed>(
    feed: &P,
    config: &AnalyzerConfig,
    symbol: &str,
) -> TickerReport {
    match run_pipeline(feed, config, symbol).await {
        Ok(report) => {
            info!(symbol, signal = %report.signal(), "ticker analyzed");
            report
        }
        Err(e) => {
            warn!(symbol, error = %e, "ticker analysis failed");
            TickerReport::failure(symbol, e.to_string())
        }
    }
}

async fn run_pipeline<P: QuoteFeed>(
    feed: &P,
    config: &AnalyzerConfig,
    symbol: &str,
) -> Result<TickerReport, AnalyzeError> {
    let deadline = Duration::from_secs(config.fetch_timeout_secs);

    let bars = tokio::time::timeout(
        deadline,
        feed.fetch_history(symbol, &config.history_range, &config.history_interval),
    )
    .await
    .map_err(|_| AnalyzeError::Timeout(config.fetch_timeout_secs))?
    .map_err(|e| AnalyzeError::Fetch(e.to_string()))?;

    let rows = analysis::analyze_history(&bars, config.min_history_bars)?;
    let latest = rows.last().ok_or(AnalyzeError::NoUsableData)?;

    // Metadata is best-effort: a failed or slow lookup degrades to an empty
    // bag, never to a failed ticker.
    let meta = match tokio::time::timeout(deadline, feed.fetch_metadata(symbol)).await {
        Ok(Ok(meta)) => meta,
        Ok(Err(e)) => {
            debug!(symbol, error = %e, "metadata unavailable — using fallbacks");
            QuoteMeta::default()
        }
        Err(_) => {
            debug!(symbol, "metadata fetch timed out — using fallbacks");
            QuoteMeta::default()
        }
    };

    let assessment = scoring::assess(latest, &config.scoring);
    Ok(TickerReport::Analysis(Box::new(build_record(
        symbol, latest, &meta, assessment,
    ))))
}

/// Flatten the latest enriched row + metadata + assessment into the wire
/// record, rounding every indicator to 2 decimals.
fn build_record(
    symbol: &str,
    row: &EnrichedRow,
    meta: &QuoteMeta,
    assessment: Assessment,
) -> TickerAnalysis {
    TickerAnalysis {
        symbol: symbol.to_string(),
        name: meta.name.clone().unwrap_or_else(|| symbol.to_string()),
        price: round2(meta.price.unwrap_or(row.close)),
        pe_ratio: meta.trailing_pe.map(round2),
        sector: meta.sector.clone(),

        sma_50: round2(row.sma_50),
        sma_200: round2(row.sma_200),
        ema_20: round2(row.ema_20),
        macd: round2(row.macd),
        macd_signal: round2(row.macd_signal),
        adx: round2(row.adx),
        plus_di: round2(row.plus_di),
        minus_di: round2(row.minus_di),
        supertrend: round2(row.supertrend),
        supertrend_bullish: row.supertrend_bullish,

        rsi: round2(row.rsi_14),
        stochastic_k: round2(row.stoch_k),
        stochastic_d: round2(row.stoch_d),
        williams_r: round2(row.williams_r),
        cci: round2(row.cci_20),
        rvi: round2(row.rvi),
        rvi_signal: round2(row.rvi_signal),
        ultimate_osc: round2(row.ultimate_osc),

        bollinger_upper: round2(row.bb_upper),
        bollinger_mid: round2(row.bb_mid),
        bollinger_lower: round2(row.bb_lower),
        bollinger_width: round2(row.bb_width),
        atr: round2(row.atr_14),
        atr_pct: round2(row.atr_pct),
        donchian_high: round2(row.donchian_high),
        donchian_low: round2(row.donchian_low),
        donchian_mid: round2(row.donchian_mid),

        volume: row.volume,
        volume_sma_20: round2(row.volume_sma_20),
        mfi: round2(row.mfi_14),
        obv: round2(row.obv),

        score: assessment.score,
        rationale: assessment.rationale,
        signal: assessment.signal,
    }
}
