use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// The retrieval capability a benchmark item is designed to test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Complexity {
    /// Reuses exact corpus vocabulary; exercises lexical ranking
    Lexical,
    /// Avoids the corpus's distinctive words; exercises dense search
    Semantic,
    /// Requires combining facts from at least two sentences
    Reasoning,
}

impl Complexity {
    /// All complexity labels, in rubric order
    pub const ALL: [Complexity; 3] =
        [Complexity::Lexical, Complexity::Semantic, Complexity::Reasoning];
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Complexity::Lexical => write!(f, "Lexical"),
            Complexity::Semantic => write!(f, "Semantic"),
            Complexity::Reasoning => write!(f, "Reasoning"),
        }
    }
}

fn default_true() -> bool {
    true
}

/// One labeled benchmark question
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BenchmarkItem {
    /// The generated question
    pub question: String,

    /// The correct answer according to the source document
    pub ground_truth: String,

    /// Which retrieval capability the question tests
    pub complexity: Complexity,

    /// Whether the question is answerable from the source document
    #[serde(default = "default_true")]
    pub is_answerable: bool,

    /// Why this question tests its complexity label
    pub verification_logic: String,
}

/// Read a benchmark file (JSON array of items, in order)
pub fn load_benchmark(path: &Path) -> Result<Vec<BenchmarkItem>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write a benchmark file (pretty-printed JSON array, order preserved)
pub fn save_benchmark(path: &Path, items: &[BenchmarkItem]) -> Result<()> {
    let content = serde_json::to_string_pretty(items)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_items() -> Vec<BenchmarkItem> {
        vec![
            BenchmarkItem {
                question: "How many legs do tardigrades have?".to_string(),
                ground_truth: "Eight.".to_string(),
                complexity: Complexity::Lexical,
                is_answerable: true,
                verification_logic: "Reuses the exact words 'legs' and 'tardigrades'.".to_string(),
            },
            BenchmarkItem {
                question: "Which molecule shields genetic material?".to_string(),
                ground_truth: "The Dsup protein.".to_string(),
                complexity: Complexity::Semantic,
                is_answerable: true,
                verification_logic: "Uses synonyms only.".to_string(),
            },
        ]
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("benchmark.json");

        save_benchmark(&path, &sample_items()).unwrap();
        let loaded = load_benchmark(&path).unwrap();

        assert_eq!(loaded, sample_items());
    }

    #[test]
    fn test_complexity_uses_original_labels() {
        let json = serde_json::to_string(&Complexity::Reasoning).unwrap();
        assert_eq!(json, "\"Reasoning\"");

        let parsed: Complexity = serde_json::from_str("\"Semantic\"").unwrap();
        assert_eq!(parsed, Complexity::Semantic);
    }

    #[test]
    fn test_is_answerable_defaults_to_true() {
        let json = r#"{
            "question": "q",
            "ground_truth": "a",
            "complexity": "Lexical",
            "verification_logic": "v"
        }"#;

        let item: BenchmarkItem = serde_json::from_str(json).unwrap();
        assert!(item.is_answerable);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not a benchmark").unwrap();

        assert!(load_benchmark(&path).is_err());
    }
}
