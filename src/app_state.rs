// =============================================================================
// Central Application State — Meridian analyzer service
// =============================================================================
//
// Fully stateless per request: the only shared state is the hot-reloadable
// configuration, the upstream client (connection pool), and a version
// counter the health endpoint exposes so dashboards can detect config
// changes.
//
// Thread safety:
//   - Atomic counter for lock-free version tracking.
//   - parking_lot::RwLock around the configuration; handlers clone the
//     config out of the lock before awaiting.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::config::AnalyzerConfig;
use crate::provider::YahooClient;

/// Shared application state, wrapped in `Arc` by the caller.
pub struct AppState {
    /// Monotonically increasing version counter, bumped on every config
    /// mutation.
    state_version: AtomicU64,

    /// Hot-reloadable analyzer configuration.
    pub config: RwLock<AnalyzerConfig>,

    /// Where configuration updates are persisted.
    pub config_path: PathBuf,

    /// Upstream market-data client (holds the HTTP connection pool).
    pub provider: YahooClient,
}

impl AppState {
    pub fn new(config: AnalyzerConfig, config_path: impl Into<PathBuf>, provider: YahooClient) -> Self {
        Self {
            state_version: AtomicU64::new(1),
            config: RwLock::new(config),
            config_path: config_path.into(),
            provider,
        }
    }

    /// Current state version.
    pub fn current_state_version(&self) -> u64 {
        self.state_version.load(Ordering::SeqCst)
    }

    /// Bump the state version after a meaningful mutation.
    pub fn increment_version(&self) {
        self.state_version.fetch_add(1, Ordering::SeqCst);
    }
}
