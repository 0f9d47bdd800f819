use thiserror::Error;

/// Errors observed by the API client.
///
/// The dashboard only distinguishes "request failed" from "request
/// resolved" — it logs these and moves on — but library callers can match
/// on the variant to inspect status codes.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection refused, DNS, TLS).
    #[error("Connection failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Request exceeded the total timeout.
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Server resolved the request with a non-2xx status.
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),
}
