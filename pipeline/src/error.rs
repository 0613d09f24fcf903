use thiserror::Error;

/// Errors that can occur while answering a query
///
/// All three kinds are fatal for the query at hand and propagate to the
/// caller untouched; a caller may retry or fall back, the pipeline does
/// not.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Invalid pipeline configuration
    #[error("Invalid pipeline config: {0}")]
    InvalidConfig(String),

    /// The routing decision failed or violated its contract
    #[error("Routing error: {0}")]
    Routing(#[from] sift_router::RouterError),

    /// Dense index construction or query failed
    #[error("Retrieval error: {0}")]
    Retrieval(#[from] sift_vector_index::VectorIndexError),

    /// The answer-generation service failed
    #[error("Generation error: {0}")]
    Generation(#[from] sift_llm_client::LlmError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
