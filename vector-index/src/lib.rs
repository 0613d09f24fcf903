//! # Sift Vector Index
//!
//! Dense retrieval over corpus embeddings: every document is embedded once
//! at build time via the external embedding service, and queries run an
//! exact nearest-neighbor search (squared L2, ascending distance).
//!
//! Reranking is an extension point: install a [`Reranker`] to reorder the
//! candidate pool before narrowing; without one, [`VectorIndex::narrow`]
//! falls back to the nearest neighbor.
//!
//! ## Example
//!
//! ```no_run
//! use sift_corpus::Corpus;
//! use sift_embeddings::{EmbeddingConfig, HttpEmbeddingClient};
//! use sift_vector_index::VectorIndex;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let corpus = Corpus::from_texts(["Tardigrades have eight legs."]);
//!     let embedder = Arc::new(HttpEmbeddingClient::new(EmbeddingConfig::default())?);
//!     let index = VectorIndex::build(&corpus, embedder).await?;
//!     let hits = index.query("water bear anatomy", 5).await?;
//!     println!("nearest: {:?}", hits.first().map(|h| &h.document.text));
//!     Ok(())
//! }
//! ```

mod error;
mod index;
mod rerank;

pub use error::VectorIndexError;
pub use index::{NO_MATCH, Neighbor, RetrievedDocument, VectorIndex};
pub use rerank::Reranker;
