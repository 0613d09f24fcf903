//! # Sift Lexical Index
//!
//! Term-frequency ranking over the corpus: Okapi BM25 on top of the shared
//! normalization pipeline. Construction and querying are purely in-memory
//! computations — this is the fast retrieval path by construction, not by
//! tuning; no call in this crate can touch the network.
//!
//! ## Example
//!
//! ```
//! use sift_corpus::Corpus;
//! use sift_lexical_index::LexicalIndex;
//!
//! let corpus = Corpus::from_texts(["Tardigrades have eight legs."]);
//! let index = LexicalIndex::build(&corpus);
//! let hits = index.query("How many legs do tardigrades have?", 1);
//! assert_eq!(hits[0].id, 0);
//! ```

mod index;

pub use index::{Bm25Params, LexicalIndex, ScoredDoc};
