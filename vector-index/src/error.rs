use thiserror::Error;

/// Errors that can occur during dense index operations
#[derive(Debug, Error)]
pub enum VectorIndexError {
    /// Embedding service failure
    #[error("Embedding error: {0}")]
    Embedding(#[from] sift_embeddings::EmbeddingError),

    /// A vector with an unexpected dimension was produced
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, VectorIndexError>;
