use thiserror::Error;

/// Errors that can occur while routing a query
#[derive(Debug, Error)]
pub enum RouterError {
    /// The classification service call failed
    #[error("Classification error: {0}")]
    Completion(#[from] sift_llm_client::LlmError),

    /// The service returned a strategy outside the closed enum
    #[error("Invalid route strategy: '{0}'. Expected either 'fast' or 'deep'.")]
    InvalidStrategy(String),

    /// The service returned an empty rationale
    #[error("Route decision carried no rationale")]
    MissingRationale,
}

pub type Result<T> = std::result::Result<T, RouterError>;
