/*!
# Sift Pipeline

The retrieval orchestrator: route a query, retrieve context on the chosen
path, generate an answer grounded in that context.

## Architecture

```text
Query
  └─> Router (classification service)
        ├─ FAST ─> Lexical Index (BM25, in-memory, no network)
        └─ DEEP ─> Vector Index (embedding service, k-NN, narrow to 1)
              └─> context string
                    └─> Generation service ("use ONLY the provided context")
                          └─> (context, answer, route)
```

Indices are cheap relative to service calls, so they are built per corpus
and cached by corpus content hash; the vector index is built lazily on the
first DEEP query so FAST queries never touch the network. Failed service
calls propagate to the caller — the pipeline never retries and never
swallows a per-query error.

## Example

```no_run
use sift_corpus::Corpus;
use sift_embeddings::{EmbeddingConfig, HttpEmbeddingClient};
use sift_llm_client::{HttpClientConfig, HttpCompletionClient};
use sift_pipeline::{PipelineConfig, RetrievalPipeline};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let chat = Arc::new(HttpCompletionClient::new(HttpClientConfig::default())?);
    let embedder = Arc::new(HttpEmbeddingClient::new(EmbeddingConfig::default())?);

    let pipeline = RetrievalPipeline::new(
        PipelineConfig::default(),
        chat.clone(),
        embedder,
        chat,
    )?;

    let corpus = Corpus::from_texts(["Tardigrades have eight legs."]);
    let outcome = pipeline
        .answer("How many legs do tardigrades have?", &corpus)
        .await?;
    println!("[{}] {}", outcome.route, outcome.answer);
    Ok(())
}
```
*/

mod config;
mod error;
mod pipeline;

pub use config::PipelineConfig;
pub use error::{PipelineError, Result};
pub use pipeline::{AnswerOutcome, RetrievalPipeline};
