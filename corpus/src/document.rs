use crate::error::Result;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// A single unit of corpus text
///
/// The `id` is the document's position in the corpus; it stays stable for
/// the process lifetime because the corpus is never mutated after loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Position in the corpus (0-indexed)
    pub id: usize,

    /// The raw document text
    pub text: String,
}

impl Document {
    /// Create a new document
    pub fn new(id: usize, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// An ordered, immutable sequence of documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Build a corpus from an ordered sequence of texts
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let documents = texts
            .into_iter()
            .enumerate()
            .map(|(id, text)| Document::new(id, text))
            .collect();
        Self { documents }
    }

    /// Load a corpus from a plain-text file, one document per line
    ///
    /// Blank lines are skipped; trailing whitespace is trimmed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_texts(
            content
                .lines()
                .map(str::trim_end)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        ))
    }

    /// All documents in corpus order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Get a document by id
    pub fn get(&self, id: usize) -> Option<&Document> {
        self.documents.get(id)
    }

    /// Document texts in corpus order
    pub fn texts(&self) -> Vec<String> {
        self.documents.iter().map(|d| d.text.clone()).collect()
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the corpus is empty
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Content hash of the corpus, suitable as an index-cache key
    ///
    /// Two corpora with the same documents in the same order hash equal.
    pub fn content_hash(&self) -> String {
        let mut hasher = Sha256::new();
        for doc in &self.documents {
            hasher.update(doc.text.as_bytes());
            hasher.update(b"\n");
        }
        format!("{:x}", hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_texts_assigns_positional_ids() {
        let corpus = Corpus::from_texts(["alpha", "beta", "gamma"]);

        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.get(1).unwrap().text, "beta");
        assert_eq!(corpus.get(1).unwrap().id, 1);
        assert!(corpus.get(3).is_none());
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Tardigrades have eight legs.").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "Dsup protein protects DNA.  ").unwrap();

        let corpus = Corpus::load(file.path()).unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get(1).unwrap().text, "Dsup protein protects DNA.");
    }

    #[test]
    fn test_load_missing_file_errors() {
        let result = Corpus::load(Path::new("/nonexistent/corpus.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn test_content_hash_is_order_sensitive() {
        let a = Corpus::from_texts(["one", "two"]);
        let b = Corpus::from_texts(["one", "two"]);
        let c = Corpus::from_texts(["two", "one"]);

        assert_eq!(a.content_hash(), b.content_hash());
        assert_ne!(a.content_hash(), c.content_hash());
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = Corpus::from_texts(Vec::<String>::new());
        assert!(corpus.is_empty());
        assert!(corpus.texts().is_empty());
    }
}
