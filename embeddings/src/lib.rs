//! # Sift Embeddings
//!
//! Capability interface for the external embedding service used by dense
//! retrieval. The service contract is strict: one fixed-dimension vector per
//! input string, in input order. The HTTP implementation restores order from
//! the service's `index` field, so parallel or out-of-order service replies
//! still merge back by original position.
//!
//! ## Example
//!
//! ```no_run
//! use sift_embeddings::{EmbeddingClient, EmbeddingConfig, HttpEmbeddingClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sift_embeddings::EmbeddingError> {
//!     let client = HttpEmbeddingClient::new(EmbeddingConfig::default())?;
//!     let vectors = client.embed(&["tardigrades".to_string()]).await?;
//!     println!("dimension = {}", vectors[0].len());
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod http;

pub use client::EmbeddingClient;
pub use error::EmbeddingError;
pub use http::{EmbeddingConfig, HttpEmbeddingClient};
