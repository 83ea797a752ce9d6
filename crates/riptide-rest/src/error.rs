//! REST error types

/// Errors raised by REST calls
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {endpoint}")]
    Status {
        status: reqwest::StatusCode,
        endpoint: String,
    },

    #[error("Malformed response body: {0}")]
    Body(String),
}
