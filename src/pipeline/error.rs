use thiserror::Error;

use crate::oracle::OracleError;

/// Faults that abort a smart-search request.
///
/// Per-title catalog faults are deliberately absent: the aggregator absorbs
/// them (logged, fewer candidates) instead of failing the request. A broken
/// oracle stage, by contrast, always aborts; a truncated or misaligned
/// recommendation list is worse than an explicit failure.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The oracle call itself failed.
    #[error("generation failed: {0}")]
    Generation(#[from] OracleError),

    /// Cleaned oracle text was not valid JSON.
    #[error("oracle response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Valid JSON with the wrong shape (missing key, wrong element type).
    #[error("oracle response has unexpected shape: {0}")]
    Schema(String),

    /// The relevance vector does not line up with the candidate list.
    /// There is no safe way to guess which flags belong to which
    /// candidates, so the request fails rather than truncating or padding.
    #[error("alignment mismatch: got {actual} relevance flags for {expected} candidates")]
    AlignmentMismatch { expected: usize, actual: usize },
}
