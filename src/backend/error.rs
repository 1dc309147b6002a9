//! Error types for backend communication.

use thiserror::Error;

/// Errors that can occur when talking to the backend service.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Transport-level failure (connect, timeout, body, deserialization) or
    /// a non-success HTTP status.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Cannot reach the backend at all.
    #[error("Cannot connect to {0}")]
    Connection(String),

    /// Failure injected by [`crate::backend::MockBackend`] in tests.
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}
