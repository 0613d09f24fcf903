use crate::index::RetrievedDocument;

/// Extension point for reordering a dense candidate pool
///
/// Implementations receive the candidates in ascending-distance order and
/// return them in their preferred order; the first element is treated as
/// the best candidate by [`VectorIndex::narrow`](crate::VectorIndex::narrow).
/// No reranker ships by default — the fallback picks the nearest neighbor.
pub trait Reranker: Send + Sync {
    /// Reorder candidates by a secondary relevance signal
    fn rerank(&self, query: &str, candidates: Vec<RetrievedDocument>) -> Vec<RetrievedDocument>;
}
