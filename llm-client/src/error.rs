use thiserror::Error;

/// Errors that can occur when talking to a completion service
#[derive(Debug, Error)]
pub enum LlmError {
    /// Transport-level failure (connection refused, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The service returned a payload the caller could not interpret
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The completion came back without any content
    #[error("Completion contained no content")]
    MissingContent,
}

pub type Result<T> = std::result::Result<T, LlmError>;
