//! Error types for the studio client.

use botflow_core::DocumentError;
use thiserror::Error;

/// Errors produced by [`StudioClient`](crate::client::StudioClient) calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed: connection, TLS, or timeout failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status. `message` is the server's
    /// error message when the structured envelope could be read, otherwise
    /// the raw response body.
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A 2xx response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The bot's stored flow blob is not a valid flow document.
    #[error("bad stored flow: {0}")]
    Document(#[from] DocumentError),
}
