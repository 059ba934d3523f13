// =============================================================================
// Yahoo Finance REST Client — chart history + quote summary
// =============================================================================
//
// Both endpoints are public (no signing). Responses are parsed defensively
// out of `serde_json::Value`: Yahoo freely omits fields, pads the quote
// arrays with nulls on holidays, and mixes `{raw: ...}` wrappers with plain
// numbers — none of which may take the pipeline down.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::DateTime;
use tracing::{debug, instrument, warn};

use super::QuoteFeed;
use crate::market_data::Bar;
use crate::types::QuoteMeta;

/// Yahoo Finance REST client.
#[derive(Clone)]
pub struct YahooClient {
    base_url: String,
    client: reqwest::Client,
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}

impl YahooClient {
    // -------------------------------------------------------------------------
    // Construction
    // -------------------------------------------------------------------------

    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            // Yahoo rejects requests without a browser-ish user agent.
            .user_agent("Mozilla/5.0 (compatible; meridian-analyzer/1.0)")
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("failed to build reqwest client");

        debug!("YahooClient initialised (base_url=https://query1.finance.yahoo.com)");

        Self {
            base_url: "https://query1.finance.yahoo.com".to_string(),
            client,
        }
    }

    // -------------------------------------------------------------------------
    // History (v8 chart API)
    // -------------------------------------------------------------------------

    /// GET /v8/finance/chart/{symbol}?range=..&interval=..
    ///
    /// Returns one [`Bar`] per session, oldest first. Entries with a null
    /// field are skipped rather than propagated as errors.
    #[instrument(skip(self), name = "yahoo::get_chart")]
    async fn get_chart(&self, symbol: &str, range: &str, interval: &str) -> Result<Vec<Bar>> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={}&interval={}",
            self.base_url, symbol, range, interval
        );

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("GET /v8/finance/chart request failed")?;

        let status = resp.status();
        let body: serde_json::Value = resp
            .json()
            .await
            .context("failed to parse chart response")?;

        if !status.is_success() {
            anyhow::bail!("Yahoo GET /v8/finance/chart returned {}: {}", status, body);
        }

        if let Some(err) = body["chart"]["error"].as_object() {
            anyhow::bail!("Yahoo chart error for {symbol}: {err:?}");
        }

        let result = &body["chart"]["result"][0];
        let timestamps = match result["timestamp"].as_array() {
            Some(ts) => ts,
            None => {
                debug!(symbol, "chart response carries no timestamps — empty series");
                return Ok(Vec::new());
            }
        };
        let quote = &result["indicators"]["quote"][0];

        let mut bars = Vec::with_capacity(timestamps.len());
        for (i, ts) in timestamps.iter().enumerate() {
            let Some(secs) = ts.as_i64() else {
                continue;
            };
            let Some(date) = DateTime::from_timestamp(secs, 0).map(|dt| dt.date_naive()) else {
                continue;
            };

            let fields = [
                quote["open"][i].as_f64(),
                quote["high"][i].as_f64(),
                quote["low"][i].as_f64(),
                quote["close"][i].as_f64(),
                quote["volume"][i].as_f64(),
            ];
            let [Some(open), Some(high), Some(low), Some(close), Some(volume)] = fields else {
                // Null-padded session (holiday, halted tape). Skip it.
                continue;
            };

            bars.push(Bar::new(date, open, high, low, close, volume));
        }

        bars.sort_by_key(|b| b.date);
        bars.dedup_by_key(|b| b.date);

        debug!(symbol, count = bars.len(), "chart history fetched");
        Ok(bars)
    }

    // -------------------------------------------------------------------------
    // Metadata (v10 quoteSummary API)
    // -------------------------------------------------------------------------

    /// GET /v10/finance/quoteSummary/{symbol}?modules=price,summaryDetail,summaryProfile
    ///
    /// Every field of the returned bag is optional; a missing module simply
    /// leaves its fields `None`.
    #[instrument(skip(self), name = "yahoo::get_quote_summary")]
    async fn get_quote_summary(&self, symbol: &str) -> Result<QuoteMeta> {
        let url = format!(
            "{}/v10/finance/quoteSummary/{}?modules=price%2CsummaryDetail%2CsummaryProfile",
            self.base_url, symbol
        );

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("GET /v10/finance/quoteSummary request failed")?;

        let status = resp.status();
        let body: serde_json::Value = resp
            .json()
            .await
            .context("failed to parse quoteSummary response")?;

        if !status.is_success() {
            anyhow::bail!(
                "Yahoo GET /v10/finance/quoteSummary returned {}: {}",
                status,
                body
            );
        }

        let result = &body["quoteSummary"]["result"][0];

        let meta = QuoteMeta {
            name: result["price"]["shortName"]
                .as_str()
                .map(|s| s.to_string()),
            price: raw_num(&result["price"]["regularMarketPrice"]),
            trailing_pe: raw_num(&result["summaryDetail"]["trailingPE"]),
            sector: result["summaryProfile"]["sector"]
                .as_str()
                .map(|s| s.to_string()),
        };

        if meta.name.is_none() && meta.price.is_none() {
            warn!(symbol, "quoteSummary carried no usable metadata");
        }

        debug!(symbol, "quote metadata fetched");
        Ok(meta)
    }
}

#[async_trait]
impl QuoteFeed for YahooClient {
    async fn fetch_history(&self, symbol: &str, range: &str, interval: &str) -> Result<Vec<Bar>> {
        self.get_chart(symbol, range, interval).await
    }

    async fn fetch_metadata(&self, symbol: &str) -> Result<QuoteMeta> {
        self.get_quote_summary(symbol).await
    }
}

/// Parse a Yahoo numeric field that may be either a plain number or a
/// `{ "raw": ..., "fmt": ... }` wrapper.
fn raw_num(value: &serde_json::Value) -> Option<f64> {
    value.as_f64().or_else(|| value["raw"].as_f64())
}

impl std::fmt::Debug for YahooClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YahooClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_num_accepts_plain_numbers() {
        assert_eq!(raw_num(&serde_json::json!(12.5)), Some(12.5));
    }

    #[test]
    fn raw_num_accepts_raw_wrappers() {
        let v = serde_json::json!({ "raw": 31.42, "fmt": "31.42" });
        assert_eq!(raw_num(&v), Some(31.42));
    }

    #[test]
    fn raw_num_rejects_missing_values() {
        assert_eq!(raw_num(&serde_json::Value::Null), None);
        assert_eq!(raw_num(&serde_json::json!({ "fmt": "N/A" })), None);
        assert_eq!(raw_num(&serde_json::json!("31.42")), None);
    }
}
