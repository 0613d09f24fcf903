use thiserror::Error;

/// Errors that can occur while loading a corpus
#[derive(Debug, Error)]
pub enum CorpusError {
    /// IO error while reading the corpus file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CorpusError>;
