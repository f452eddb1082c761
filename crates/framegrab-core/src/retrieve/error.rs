//! Retrieval error type.

/// Error returned by a single retrieval (curl failure, HTTP error, or local write failure).
#[derive(Debug, thiserror::Error)]
pub enum RetrieveError {
    /// Curl reported an error (DNS, connect, timeout, TLS, ...).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Creating, writing or renaming the local file failed.
    #[error("storage: {0}")]
    Storage(#[source] std::io::Error),
}
