use thiserror::Error;

/// Errors that can occur during benchmark generation and evaluation
#[derive(Debug, Error)]
pub enum EvalError {
    /// A grading or generation service call failed
    #[error("Service error: {0}")]
    Llm(#[from] sift_llm_client::LlmError),

    /// The grading service returned a score outside 1..=5
    #[error("Faithfulness score out of range: {0}")]
    ScoreOutOfRange(i64),

    /// IO error while reading or writing a benchmark file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Benchmark (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EvalError>;
