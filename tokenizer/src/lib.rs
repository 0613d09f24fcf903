//! # Sift Tokenizer
//!
//! Text normalization for lexical retrieval. Documents and queries must go
//! through the exact same pipeline or BM25 scores are meaningless, so the
//! pipeline lives here once: lowercase, strip punctuation, split, drop stop
//! words, stem.
//!
//! `normalize` is deterministic and side-effect-free; empty input yields an
//! empty sequence.

use once_cell::sync::Lazy;
use rust_stemmers::{Algorithm, Stemmer};

/// Fixed stop-word set dropped during normalization
pub const STOP_WORDS: &[&str] = &["how", "many", "do", "have", "the", "a", "is", "are", "of"];

static STEMMER: Lazy<Stemmer> = Lazy::new(|| Stemmer::create(Algorithm::English));

/// Check whether a token is in the stop-word set
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Normalize raw text into a token sequence
///
/// Steps, in order: lowercase; strip every character that is neither
/// alphanumeric nor whitespace; split on whitespace; drop stop words; stem.
/// The stop-word filter runs again after stemming so that a stem landing on
/// a stop word (e.g. "having" -> "have") never leaks into the output.
pub fn normalize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    stripped
        .split_whitespace()
        .filter(|token| !is_stop_word(token))
        .map(|token| STEMMER.stem(token).into_owned())
        .filter(|token| !is_stop_word(token))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input_yields_empty_sequence() {
        assert_eq!(normalize(""), Vec::<String>::new());
        assert_eq!(normalize("   \t\n"), Vec::<String>::new());
    }

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(normalize("Tardigrade's DNA!"), vec!["tardigrad", "dna"]);
    }

    #[test]
    fn test_stop_words_never_appear() {
        let tokens = normalize("How many legs do the tardigrades have?");
        for token in &tokens {
            assert!(!is_stop_word(token), "stop word leaked: {token}");
        }
        assert_eq!(tokens, vec!["leg", "tardigrad"]);
    }

    #[test]
    fn test_stemming_collapses_inflections() {
        assert_eq!(normalize("tardigrades"), normalize("tardigrade"));
        assert_eq!(normalize("protects"), normalize("protecting"));
    }

    #[test]
    fn test_stem_landing_on_stop_word_is_dropped() {
        // "having" stems to "have", which is a stop word.
        assert_eq!(normalize("having"), Vec::<String>::new());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "Tardigrades have eight legs.",
            "Dsup protein protects DNA from radiation, of interest for cancer research.",
            "Why are tardigrade proteins relevant to medicine?",
        ];
        for input in inputs {
            let once = normalize(input);
            let twice = normalize(&once.join(" "));
            assert_eq!(once, twice, "not idempotent for: {input}");
        }
    }
}
