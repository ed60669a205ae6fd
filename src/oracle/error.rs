use thiserror::Error;

/// Errors from the text-generation collaborator.
///
/// Both variants abort the request they occur in: there is no retry policy
/// at this level, the caller decides.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The call itself failed (network, timeout, quota, provider error).
    #[error("oracle request failed: {0}")]
    Request(String),

    /// The oracle answered, but without any text content.
    #[error("oracle returned an empty response")]
    EmptyResponse,
}
