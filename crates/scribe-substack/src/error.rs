//! Error types for the Substack API client.

/// Error from Substack API operations.
#[derive(Debug, thiserror::Error)]
pub enum SubstackError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    /// Draft update with no fields set.
    #[error("draft update has no fields to save")]
    EmptyUpdate,
}
