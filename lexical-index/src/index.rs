use log::debug;
use serde::{Deserialize, Serialize};
use sift_corpus::Corpus;
use sift_tokenizer::normalize;
use std::collections::HashMap;

/// BM25 ranking parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bm25Params {
    /// Term-frequency saturation
    #[serde(default = "default_k1")]
    pub k1: f32,

    /// Document-length normalization strength
    #[serde(default = "default_b")]
    pub b: f32,
}

fn default_k1() -> f32 {
    1.5
}

fn default_b() -> f32 {
    0.75
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self {
            k1: default_k1(),
            b: default_b(),
        }
    }
}

impl Bm25Params {
    /// Validate parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.k1 < 0.0 {
            return Err(format!("k1 must be >= 0, got {}", self.k1));
        }
        if !(0.0..=1.0).contains(&self.b) {
            return Err(format!("b must be in [0.0, 1.0], got {}", self.b));
        }
        Ok(())
    }
}

/// A document id paired with its relevance score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredDoc {
    /// Document id (corpus position)
    pub id: usize,

    /// BM25 relevance score (higher is better)
    pub score: f32,
}

/// BM25 ranking structure over a tokenized corpus
pub struct LexicalIndex {
    params: Bm25Params,
    term_freqs: Vec<HashMap<String, usize>>,
    doc_len: Vec<f32>,
    avgdl: f32,
    idf: HashMap<String, f32>,
}

impl LexicalIndex {
    /// Build an index over the corpus with default parameters
    pub fn build(corpus: &Corpus) -> Self {
        Self::with_params(corpus, Bm25Params::default())
    }

    /// Build an index over the corpus with explicit parameters
    pub fn with_params(corpus: &Corpus, params: Bm25Params) -> Self {
        let tokenized: Vec<Vec<String>> = corpus
            .documents()
            .iter()
            .map(|doc| normalize(&doc.text))
            .collect();

        let doc_len: Vec<f32> = tokenized.iter().map(|tokens| tokens.len() as f32).collect();
        let total_len: f32 = doc_len.iter().sum();
        let avgdl = if doc_len.is_empty() || total_len == 0.0 {
            1.0
        } else {
            total_len / doc_len.len() as f32
        };

        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        let mut term_freqs = Vec::with_capacity(tokenized.len());
        for tokens in &tokenized {
            let mut freqs: HashMap<String, usize> = HashMap::new();
            for token in tokens {
                *freqs.entry(token.clone()).or_insert(0) += 1;
            }
            for term in freqs.keys() {
                *doc_freq.entry(term.clone()).or_insert(0) += 1;
            }
            term_freqs.push(freqs);
        }

        // +1-smoothed Okapi IDF; never negative even for very common terms.
        let n = tokenized.len() as f32;
        let idf = doc_freq
            .into_iter()
            .map(|(term, df)| {
                let df = df as f32;
                (term, (1.0 + (n - df + 0.5) / (df + 0.5)).ln())
            })
            .collect();

        debug!(
            "Built lexical index: {} documents, avgdl {:.2}",
            tokenized.len(),
            avgdl
        );

        Self {
            params,
            term_freqs,
            doc_len,
            avgdl,
            idf,
        }
    }

    /// Number of indexed documents
    pub fn len(&self) -> usize {
        self.term_freqs.len()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.term_freqs.is_empty()
    }

    /// BM25 score of every document against the given query tokens
    pub fn scores(&self, query_tokens: &[String]) -> Vec<f32> {
        let Bm25Params { k1, b } = self.params;

        (0..self.term_freqs.len())
            .map(|doc_id| {
                let freqs = &self.term_freqs[doc_id];
                let norm = 1.0 - b + b * self.doc_len[doc_id] / self.avgdl;

                query_tokens
                    .iter()
                    .filter_map(|token| {
                        let tf = *freqs.get(token)? as f32;
                        let idf = *self.idf.get(token)?;
                        Some(idf * tf * (k1 + 1.0) / (tf + k1 * norm))
                    })
                    .sum()
            })
            .collect()
    }

    /// Top-k documents for a raw query string
    ///
    /// The query goes through the same normalization as the corpus. Results
    /// come back ordered by score descending; ties keep corpus order (the
    /// sort is stable). A k larger than the corpus returns every document
    /// ranked.
    pub fn query(&self, query: &str, k: usize) -> Vec<ScoredDoc> {
        let query_tokens = normalize(query);
        debug!("Lexical query tokens: {query_tokens:?} (k = {k})");

        let mut ranked: Vec<ScoredDoc> = self
            .scores(&query_tokens)
            .into_iter()
            .enumerate()
            .map(|(id, score)| ScoredDoc { id, score })
            .collect();

        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(k);
        ranked
    }
}
