use thiserror::Error;

/// Per-title catalog faults.
///
/// These degrade the pipeline (the title contributes no candidates), they
/// never abort it. The aggregator logs and continues.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("catalog search for '{title}' failed: {message}")]
    Request { title: String, message: String },

    /// The service answered with a non-success status.
    #[error("catalog search for '{title}' returned status {status}")]
    Status { title: String, status: u16 },

    /// Valid response without a results array anywhere we know to look.
    #[error("catalog search for '{title}' returned a response without a results array")]
    MalformedResponse { title: String },
}
