// =============================================================================
// Upstream Market-Data Provider
// =============================================================================
//
// The provider is an external collaborator: it supplies an OHLCV series for
// a ticker over a requested lookback window plus an optional metadata bag.
// It may return an empty or short series, omit metadata fields, or fail
// transiently — the pipeline treats all of that as per-ticker conditions,
// never batch-level failures.
//
// `QuoteFeed` is the seam the pipeline is generic over; tests substitute a
// scripted implementation.

pub mod yahoo;

pub use yahoo::YahooClient;

use anyhow::Result;
use async_trait::async_trait;

use crate::market_data::Bar;
use crate::types::QuoteMeta;

/// Upstream source of price history and quote metadata.
#[async_trait]
pub trait QuoteFeed: Send + Sync {
    /// Fetch the OHLCV series for `symbol` over the given lookback window.
    /// May legitimately return an empty vector.
    async fn fetch_history(&self, symbol: &str, range: &str, interval: &str) -> Result<Vec<Bar>>;

    /// Fetch the optional scalar metadata for `symbol`. Callers degrade to
    /// an empty bag on error.
    async fn fetch_metadata(&self, symbol: &str) -> Result<QuoteMeta>;
}
