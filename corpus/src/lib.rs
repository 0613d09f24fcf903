//! # Sift Corpus
//!
//! Document corpus primitives shared by every retrieval strategy.
//!
//! A [`Corpus`] is an ordered, read-only sequence of [`Document`]s loaded
//! once per process. Documents are identified by their position in that
//! sequence; both the lexical and the dense index borrow the same corpus.
//!
//! ## Example
//!
//! ```no_run
//! use sift_corpus::{Corpus, CorpusError};
//! use std::path::Path;
//!
//! fn main() -> Result<(), CorpusError> {
//!     let corpus = Corpus::load(Path::new("benchmark_data/raw_chunks.txt"))?;
//!     println!("Loaded {} documents", corpus.len());
//!     Ok(())
//! }
//! ```

mod document;
mod error;

pub use document::{Corpus, Document};
pub use error::CorpusError;
