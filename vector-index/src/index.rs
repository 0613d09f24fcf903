use crate::error::{Result, VectorIndexError};
use crate::rerank::Reranker;
use log::debug;
use sift_corpus::{Corpus, Document};
use sift_embeddings::EmbeddingClient;
use std::sync::Arc;

/// Sentinel neighbor id meaning "no match at this rank"
pub const NO_MATCH: i64 = -1;

/// A raw nearest-neighbor result row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Document id, or [`NO_MATCH`] when fewer than k neighbors exist
    pub id: i64,

    /// Squared L2 distance to the query vector (lower is better)
    pub distance: f32,
}

/// A retrieved document with its query distance
#[derive(Debug, Clone, PartialEq)]
pub struct RetrievedDocument {
    /// The matched corpus document
    pub document: Document,

    /// Squared L2 distance to the query vector (lower is better)
    pub distance: f32,
}

/// Exact nearest-neighbor index over corpus embeddings
pub struct VectorIndex {
    embedder: Arc<dyn EmbeddingClient>,
    documents: Vec<Document>,
    vectors: Vec<Vec<f32>>,
    dimension: usize,
    reranker: Option<Box<dyn Reranker>>,
}

impl VectorIndex {
    /// Build an index by embedding every corpus document
    ///
    /// The embedding client guarantees one vector per input in input order,
    /// so `vectors[i]` always belongs to `documents[i]`.
    pub async fn build(corpus: &Corpus, embedder: Arc<dyn EmbeddingClient>) -> Result<Self> {
        let texts = corpus.texts();
        let vectors = embedder.embed(&texts).await?;

        let dimension = vectors.first().map(Vec::len).unwrap_or(0);
        for vector in &vectors {
            if vector.len() != dimension {
                return Err(VectorIndexError::DimensionMismatch {
                    expected: dimension,
                    actual: vector.len(),
                });
            }
        }

        debug!(
            "Built vector index: {} documents, dimension {dimension}",
            vectors.len()
        );

        Ok(Self {
            embedder,
            documents: corpus.documents().to_vec(),
            vectors,
            dimension,
            reranker: None,
        })
    }

    /// Install a reranker for the candidate-narrowing step
    pub fn with_reranker(mut self, reranker: Box<dyn Reranker>) -> Self {
        self.reranker = Some(reranker);
        self
    }

    /// Number of indexed documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Dimension of the indexed vectors
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// k nearest neighbors of a query vector, padded to k with [`NO_MATCH`]
    fn knn(&self, query: &[f32], k: usize) -> Vec<Neighbor> {
        let mut neighbors: Vec<Neighbor> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(id, vector)| Neighbor {
                id: id as i64,
                distance: squared_l2(query, vector),
            })
            .collect();

        neighbors.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        neighbors.truncate(k);
        while neighbors.len() < k {
            neighbors.push(Neighbor {
                id: NO_MATCH,
                distance: f32::INFINITY,
            });
        }
        neighbors
    }

    /// Retrieve the k nearest documents for a query text, ascending distance
    ///
    /// Sentinel rows are filtered out, so the result holds at most
    /// `min(k, len)` documents.
    pub async fn query(&self, query_text: &str, k: usize) -> Result<Vec<RetrievedDocument>> {
        let query_vector = self.embedder.embed_one(query_text).await?;
        if !self.is_empty() && query_vector.len() != self.dimension {
            return Err(VectorIndexError::DimensionMismatch {
                expected: self.dimension,
                actual: query_vector.len(),
            });
        }

        let neighbors = self.knn(&query_vector, k);
        debug!("Dense query returned {} neighbor rows", neighbors.len());

        Ok(neighbors
            .into_iter()
            .filter(|n| n.id != NO_MATCH)
            .map(|n| RetrievedDocument {
                document: self.documents[n.id as usize].clone(),
                distance: n.distance,
            })
            .collect())
    }

    /// Narrow a candidate pool to the single best document
    ///
    /// With a reranker installed its top pick wins; otherwise the nearest
    /// neighbor (the first candidate) is the documented fallback.
    pub fn narrow(
        &self,
        query_text: &str,
        candidates: Vec<RetrievedDocument>,
    ) -> Option<RetrievedDocument> {
        match &self.reranker {
            Some(reranker) => reranker.rerank(query_text, candidates).into_iter().next(),
            None => candidates.into_iter().next(),
        }
    }
}

fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum()
}
