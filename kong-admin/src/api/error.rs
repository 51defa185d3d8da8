//! Error types surfaced by the Admin API client

use reqwest::StatusCode;
use thiserror::Error;

/// Failures raised by [`KongClient`](super::client::KongClient) and the
/// resource handles built on top of it.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid construction or call input, detected before any network I/O.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The admin endpoint could not be reached.
    #[error("failed to connect to {url}. Please ensure the URL is correct and reachable.")]
    Connection {
        /// Fully qualified URL that did not answer.
        url: String,
    },

    /// The gateway rejected the request with a non-success status.
    #[error("gateway returned {status}: {body}")]
    Http {
        /// Status code of the rejection.
        status: StatusCode,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// The response body could not be decoded as JSON.
    #[error("failed to decode response body: {0}")]
    Json(#[from] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
