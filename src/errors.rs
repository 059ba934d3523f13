// =============================================================================
// Per-ticker Error Taxonomy
// =============================================================================
//
// Every failure mode that can take down a single ticker's pipeline is
// enumerated here. All of these are caught at the per-ticker boundary and
// converted into a failure record; none of them aborts the batch. Missing
// metadata is deliberately NOT an error — it degrades to null/fallback
// fields inline.

use thiserror::Error;

/// Failure modes of a single ticker's analysis pipeline.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The upstream provider returned fewer bars than the engine needs.
    #[error("insufficient history: {got} bars, need at least {need}")]
    InsufficientHistory { got: usize, need: usize },

    /// Every row was dropped during indicator warm-up pruning (degenerate
    /// series, e.g. zero-range bars).
    #[error("no usable data after indicator warm-up")]
    NoUsableData,

    /// The upstream provider raised an error.
    #[error("upstream fetch failed: {0}")]
    Fetch(String),

    /// The upstream fetch exceeded its deadline.
    #[error("upstream fetch timed out after {0}s")]
    Timeout(u64),
}
