use serde::{Deserialize, Serialize};

/// Configuration for the retrieval pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Documents retrieved on the FAST (lexical) path
    #[serde(default = "default_fast_top_k")]
    pub fast_top_k: usize,

    /// Candidate pool retrieved on the DEEP (dense) path before narrowing
    #[serde(default = "default_deep_candidate_pool")]
    pub deep_candidate_pool: usize,

    /// Separator joining retrieved documents into the context string
    #[serde(default = "default_context_separator")]
    pub context_separator: String,

    /// Number of corpora whose indices are kept cached (by content hash)
    #[serde(default = "default_index_cache_size")]
    pub index_cache_size: usize,
}

fn default_fast_top_k() -> usize {
    1
}

fn default_deep_candidate_pool() -> usize {
    5
}

fn default_context_separator() -> String {
    " ".to_string()
}

fn default_index_cache_size() -> usize {
    4
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            fast_top_k: default_fast_top_k(),
            deep_candidate_pool: default_deep_candidate_pool(),
            context_separator: default_context_separator(),
            index_cache_size: default_index_cache_size(),
        }
    }
}

impl PipelineConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.fast_top_k == 0 {
            return Err("fast_top_k must be >= 1".to_string());
        }
        if self.deep_candidate_pool == 0 {
            return Err("deep_candidate_pool must be >= 1".to_string());
        }
        if self.index_cache_size == 0 {
            return Err("index_cache_size must be >= 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        assert!(PipelineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_top_k_rejected() {
        let config = PipelineConfig {
            fast_top_k: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_pool_rejected() {
        let config = PipelineConfig {
            deep_candidate_pool: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
