use crate::error::{EmbeddingError, Result};
use async_trait::async_trait;

/// Capability interface for an embedding service
///
/// Contract: one vector per input string, in input order, all vectors of
/// the same dimension for a given model.
#[async_trait]
pub trait EmbeddingClient: Send + Sync {
    /// Embed an ordered sequence of texts
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Embed a single text
    async fn embed_one(&self, text: &str) -> Result<Vec<f32>> {
        let texts = [text.to_string()];
        let mut vectors = self.embed(&texts).await?;
        vectors.pop().ok_or(EmbeddingError::CountMismatch {
            expected: 1,
            actual: 0,
        })
    }
}
