use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use log::{debug, info};
use lru::LruCache;
use sift_corpus::Corpus;
use sift_embeddings::EmbeddingClient;
use sift_lexical_index::LexicalIndex;
use sift_llm_client::CompletionClient;
use sift_router::{RouteStrategy, Router};
use sift_vector_index::VectorIndex;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};

const ANSWER_INSTRUCTION: &str = "Answer the question using ONLY the provided context.";

/// The result of answering one query
#[derive(Debug, Clone)]
pub struct AnswerOutcome {
    /// Context string assembled from the retrieved documents
    pub context: String,

    /// Free-text answer from the generation service
    pub answer: String,

    /// Which retrieval path produced the context
    pub route: RouteStrategy,
}

/// Indices for one corpus, cached by content hash
///
/// The lexical index is built eagerly (pure computation); the vector index
/// is built on the first DEEP query so that FAST queries complete without a
/// single network call.
struct CorpusIndices {
    lexical: LexicalIndex,
    vector: OnceCell<Arc<VectorIndex>>,
}

/// Orchestrator for routing, retrieval, and answer generation
pub struct RetrievalPipeline {
    config: PipelineConfig,
    router: Router,
    embedder: Arc<dyn EmbeddingClient>,
    generator: Arc<dyn CompletionClient>,
    indices: Mutex<LruCache<String, Arc<CorpusIndices>>>,
}

impl RetrievalPipeline {
    /// Create a pipeline from its three external-service clients
    pub fn new(
        config: PipelineConfig,
        classifier: Arc<dyn CompletionClient>,
        embedder: Arc<dyn EmbeddingClient>,
        generator: Arc<dyn CompletionClient>,
    ) -> Result<Self> {
        config.validate().map_err(PipelineError::InvalidConfig)?;

        let cache_size = NonZeroUsize::new(config.index_cache_size)
            .ok_or_else(|| PipelineError::InvalidConfig("index_cache_size must be >= 1".into()))?;

        Ok(Self {
            config,
            router: Router::new(classifier),
            embedder,
            generator,
            indices: Mutex::new(LruCache::new(cache_size)),
        })
    }

    /// Configuration of this pipeline
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Answer a query against the corpus
    ///
    /// Sequence: route, retrieve on the chosen path, join the retrieved
    /// documents into one context string, generate. Any failing step aborts
    /// this query and propagates; nothing is retried and no state survives
    /// the call apart from the index cache.
    pub async fn answer(&self, query: &str, corpus: &Corpus) -> Result<AnswerOutcome> {
        let decision = self.router.route(query).await?;
        info!(
            "Route {} for '{query}': {}",
            decision.strategy, decision.rationale
        );

        let indices = self.indices_for(corpus).await;

        let retrieved: Vec<String> = match decision.strategy {
            RouteStrategy::Fast => indices
                .lexical
                .query(query, self.config.fast_top_k)
                .iter()
                .filter_map(|hit| corpus.get(hit.id))
                .map(|doc| doc.text.clone())
                .collect(),
            RouteStrategy::Deep => {
                let vector = indices
                    .vector
                    .get_or_try_init(|| async {
                        VectorIndex::build(corpus, self.embedder.clone())
                            .await
                            .map(Arc::new)
                    })
                    .await?
                    .clone();

                let candidates = vector
                    .query(query, self.config.deep_candidate_pool)
                    .await?;
                vector
                    .narrow(query, candidates)
                    .map(|hit| hit.document.text)
                    .into_iter()
                    .collect()
            }
        };

        debug!("Retrieved {} documents", retrieved.len());
        let context = retrieved.join(&self.config.context_separator);

        let answer = self
            .generator
            .complete(
                ANSWER_INSTRUCTION,
                &format!("Context: {context}\n\nQuestion: {query}"),
            )
            .await?;

        Ok(AnswerOutcome {
            context,
            answer,
            route: decision.strategy,
        })
    }

    /// Fetch or create the cached indices for a corpus
    async fn indices_for(&self, corpus: &Corpus) -> Arc<CorpusIndices> {
        let key = corpus.content_hash();
        let mut cache = self.indices.lock().await;
        if let Some(entry) = cache.get(&key) {
            debug!("Index cache hit for corpus {key}");
            return entry.clone();
        }

        let entry = Arc::new(CorpusIndices {
            lexical: LexicalIndex::build(corpus),
            vector: OnceCell::new(),
        });
        cache.put(key, entry.clone());
        entry
    }
}
