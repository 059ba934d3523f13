// =============================================================================
// Analyzer Configuration — hot-reloadable settings with atomic save
// =============================================================================
//
// Every tunable parameter of the analyzer lives here: the upstream lookback
// window, the history length gate, the fetch concurrency/timeout, and the
// scoring rule table. Persistence uses an atomic tmp + rename pattern to
// prevent corruption on crash. All fields carry `#[serde(default)]` so that
// adding new fields never breaks loading an older config file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::scoring::ScoringConfig;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_history_range() -> String {
    "1y".to_string()
}

fn default_history_interval() -> String {
    "1d".to_string()
}

fn default_min_history_bars() -> usize {
    100
}

fn default_max_concurrent_fetches() -> usize {
    4
}

fn default_fetch_timeout_secs() -> u64 {
    15
}

// =============================================================================
// AnalyzerConfig
// =============================================================================

/// Top-level runtime configuration for the analyzer service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    // --- Upstream lookback ---------------------------------------------------

    /// Lookback window requested from the provider (e.g. "1y").
    #[serde(default = "default_history_range")]
    pub history_range: String,

    /// Bar granularity requested from the provider (e.g. "1d").
    #[serde(default = "default_history_interval")]
    pub history_interval: String,

    // --- Engine gates --------------------------------------------------------

    /// Minimum bar count accepted by the indicator engine. Series shorter
    /// than this are rejected before any computation.
    #[serde(default = "default_min_history_bars")]
    pub min_history_bars: usize,

    // --- Fetch behaviour -----------------------------------------------------

    /// Upper bound on concurrently processed tickers per request; sized to
    /// the upstream provider's rate limits.
    #[serde(default = "default_max_concurrent_fetches")]
    pub max_concurrent_fetches: usize,

    /// Per-ticker deadline on upstream calls. A fetch that exceeds it is
    /// treated like any other provider failure for that ticker.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    // --- Scoring -------------------------------------------------------------

    /// The scoring rule table and signal thresholds.
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            history_range: default_history_range(),
            history_interval: default_history_interval(),
            min_history_bars: default_min_history_bars(),
            max_concurrent_fetches: default_max_concurrent_fetches(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            scoring: ScoringConfig::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read analyzer config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse analyzer config from {}", path.display()))?;

        info!(
            path = %path.display(),
            range = %config.history_range,
            interval = %config.history_interval,
            rules = config.scoring.rules.len(),
            "analyzer config loaded"
        );

        Ok(config)
    }

    /// Persist the current configuration to `path` using an atomic write
    /// (write to `.tmp`, then rename).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = serde_json::to_string_pretty(self)
            .context("failed to serialise analyzer config to JSON")?;

        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, &content)
            .with_context(|| format!("failed to write tmp config to {}", tmp_path.display()))?;

        std::fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to rename tmp config to {}", path.display()))?;

        info!(path = %path.display(), "analyzer config saved (atomic)");
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let cfg = AnalyzerConfig::default();
        assert_eq!(cfg.history_range, "1y");
        assert_eq!(cfg.history_interval, "1d");
        assert_eq!(cfg.min_history_bars, 100);
        assert_eq!(cfg.max_concurrent_fetches, 4);
        assert_eq!(cfg.fetch_timeout_secs, 15);
        assert_eq!(cfg.scoring.rules.len(), 14);
    }

    #[test]
    fn deserialise_empty_json_uses_defaults() {
        let cfg: AnalyzerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.history_range, "1y");
        assert_eq!(cfg.min_history_bars, 100);
        assert_eq!(cfg.scoring.buy_threshold, 4);
    }

    #[test]
    fn deserialise_partial_json_fills_defaults() {
        let json = r#"{ "history_range": "2y", "max_concurrent_fetches": 8 }"#;
        let cfg: AnalyzerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.history_range, "2y");
        assert_eq!(cfg.max_concurrent_fetches, 8);
        assert_eq!(cfg.fetch_timeout_secs, 15);
        assert_eq!(cfg.scoring.sell_threshold, -4);
    }

    #[test]
    fn roundtrip_serialisation() {
        let cfg = AnalyzerConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: AnalyzerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.history_range, cfg.history_range);
        assert_eq!(back.min_history_bars, cfg.min_history_bars);
        assert_eq!(back.scoring.rules.len(), cfg.scoring.rules.len());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join("meridian-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("analyzer_config.json");

        let mut cfg = AnalyzerConfig::default();
        cfg.history_range = "6mo".to_string();
        cfg.save(&path).unwrap();

        let loaded = AnalyzerConfig::load(&path).unwrap();
        assert_eq!(loaded.history_range, "6mo");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn load_missing_file_errors() {
        assert!(AnalyzerConfig::load("/nonexistent/meridian/config.json").is_err());
    }
}
