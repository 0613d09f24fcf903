use crate::benchmark::BenchmarkItem;
use log::{debug, warn};
use sift_corpus::Corpus;
use sift_llm_client::{CompletionClient, complete_json};
use std::sync::Arc;

const RUBRIC_SYSTEM: &str = "You are a Senior QA Engineer for RAG systems. \
Your task is to generate high-quality, adversarial benchmark data. \
Respond with a JSON array of objects, each shaped as \
{\"question\": string, \"ground_truth\": string, \"complexity\": \"Lexical\" | \"Semantic\" | \"Reasoning\", \
\"is_answerable\": bool, \"verification_logic\": string}.";

/// Generator of synthetic benchmark items from corpus documents
pub struct BenchmarkGenerator {
    client: Arc<dyn CompletionClient>,
}

impl BenchmarkGenerator {
    /// Create a generator backed by the given generation service
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Generate three benchmark items per corpus document
    ///
    /// A document whose generation call fails is logged and skipped; the
    /// batch always returns whatever was generated successfully.
    pub async fn generate(&self, corpus: &Corpus) -> Vec<BenchmarkItem> {
        let mut benchmark = Vec::new();

        for doc in corpus.documents() {
            debug!("Generating benchmark items for document {}", doc.id);

            match self.generate_for_document(&doc.text).await {
                Ok(items) => benchmark.extend(items),
                Err(e) => warn!(
                    "Skipping document {} after generation failure: {e}",
                    doc.id
                ),
            }
        }

        benchmark
    }

    async fn generate_for_document(
        &self,
        text: &str,
    ) -> Result<Vec<BenchmarkItem>, sift_llm_client::LlmError> {
        let user = format!(
            "Task:\n\
             - Create 3 test points from this context.\n\
             Strict complexity definitions:\n\
             - 'Lexical': Must use exact keywords and phrases from the text. This tests keyword retrieval.\n\
             - 'Semantic': Can not use the unique nouns or verbs from the context. Use synonyms only. This tests vector search.\n\
             - 'Reasoning': Must require synthesis of facts from at least two different sentences.\n\
             Formatting constraints:\n\
             - Ensure the 'ground_truth' is concise.\n\n\
             Context: {text}"
        );

        complete_json(self.client.as_ref(), RUBRIC_SYSTEM, &user).await
    }
}
