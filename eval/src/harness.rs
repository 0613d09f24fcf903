use crate::benchmark::{BenchmarkItem, Complexity};
use crate::grader::FaithfulnessGrader;
use futures::StreamExt;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use sift_corpus::Corpus;
use sift_pipeline::RetrievalPipeline;
use sift_router::RouteStrategy;
use std::sync::Arc;

/// How the evaluation of one benchmark item ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreOutcome {
    /// Graded successfully; the faithfulness score in 1..=5
    Scored(u8),
    /// The pipeline or grading call failed; the reason is kept verbatim
    Failed(String),
}

/// One row of the evaluation report
///
/// Records are append-only: one per benchmark item, in benchmark order,
/// never mutated after creation. Failures are explicit `Failed` markers
/// rather than omitted rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    /// The benchmark question
    pub question: String,

    /// The item's complexity label
    pub complexity: Complexity,

    /// The route the pipeline took, when it got that far
    pub route: Option<RouteStrategy>,

    /// Score or explicit failure
    pub outcome: ScoreOutcome,
}

impl EvaluationRecord {
    /// The faithfulness score, if the item was graded
    pub fn score(&self) -> Option<u8> {
        match self.outcome {
            ScoreOutcome::Scored(score) => Some(score),
            ScoreOutcome::Failed(_) => None,
        }
    }
}

/// Harness replaying a benchmark through the full pipeline
pub struct EvaluationHarness {
    pipeline: Arc<RetrievalPipeline>,
    grader: FaithfulnessGrader,
    concurrency: usize,
}

impl EvaluationHarness {
    /// Create a harness; items are evaluated one at a time by default
    pub fn new(pipeline: Arc<RetrievalPipeline>, grader: FaithfulnessGrader) -> Self {
        Self {
            pipeline,
            grader,
            concurrency: 1,
        }
    }

    /// Evaluate up to `concurrency` items at once
    ///
    /// Record order still follows benchmark order regardless of completion
    /// order.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Replay every benchmark item and score the answers
    ///
    /// The output has exactly one record per input item, in input order.
    /// Per-item failures are isolated: one failing pipeline or grading call
    /// produces a `Failed` record and the run continues.
    pub async fn run(
        &self,
        benchmark: &[BenchmarkItem],
        corpus: &Corpus,
    ) -> Vec<EvaluationRecord> {
        info!("Evaluating {} benchmark items", benchmark.len());

        futures::stream::iter(benchmark.iter().map(|item| self.evaluate_item(item, corpus)))
            .buffered(self.concurrency)
            .collect()
            .await
    }

    async fn evaluate_item(&self, item: &BenchmarkItem, corpus: &Corpus) -> EvaluationRecord {
        let (route, outcome) = match self.pipeline.answer(&item.question, corpus).await {
            Ok(result) => {
                let graded = self
                    .grader
                    .grade(&item.question, &result.context, &result.answer)
                    .await;
                match graded {
                    Ok(score) => (Some(result.route), ScoreOutcome::Scored(score.score)),
                    Err(e) => {
                        warn!("Grading failed for '{}': {e}", item.question);
                        (Some(result.route), ScoreOutcome::Failed(e.to_string()))
                    }
                }
            }
            Err(e) => {
                warn!("Pipeline failed for '{}': {e}", item.question);
                (None, ScoreOutcome::Failed(e.to_string()))
            }
        };

        EvaluationRecord {
            question: item.question.clone(),
            complexity: item.complexity,
            route,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use sift_embeddings::{EmbeddingClient, EmbeddingError};
    use sift_llm_client::{CompletionClient, LlmError};
    use sift_pipeline::PipelineConfig;

    fn tardigrade_corpus() -> Corpus {
        Corpus::from_texts([
            "Tardigrades have eight legs.",
            "Tardigrade Dsup protein protects DNA from radiation, of interest for cancer research.",
        ])
    }

    fn item(question: &str, complexity: Complexity) -> BenchmarkItem {
        BenchmarkItem {
            question: question.to_string(),
            ground_truth: "unused".to_string(),
            complexity,
            is_answerable: true,
            verification_logic: "unused".to_string(),
        }
    }

    struct FastClassifier;

    #[async_trait]
    impl CompletionClient for FastClassifier {
        async fn complete(
            &self,
            _system: &str,
            _user: &str,
        ) -> std::result::Result<String, LlmError> {
            Ok("{\"strategy\": \"fast\", \"rationale\": \"test\"}".to_string())
        }
    }

    struct EchoGenerator;

    #[async_trait]
    impl CompletionClient for EchoGenerator {
        async fn complete(
            &self,
            _system: &str,
            user: &str,
        ) -> std::result::Result<String, LlmError> {
            Ok(user.to_string())
        }
    }

    struct StubEmbedder;

    #[async_trait]
    impl EmbeddingClient for StubEmbedder {
        async fn embed(
            &self,
            texts: &[String],
        ) -> std::result::Result<Vec<Vec<f32>>, EmbeddingError> {
            Ok(texts.iter().map(|_| vec![0.0, 0.0]).collect())
        }
    }

    /// Grades 3 normally, errors when the question mentions "brittle"
    struct BrittleGrader;

    #[async_trait]
    impl CompletionClient for BrittleGrader {
        async fn complete(
            &self,
            _system: &str,
            user: &str,
        ) -> std::result::Result<String, LlmError> {
            if user.contains("brittle") {
                return Err(LlmError::MissingContent);
            }
            Ok("{\"score\": 3, \"reasoning\": \"ok\"}".to_string())
        }
    }

    fn test_harness() -> EvaluationHarness {
        let pipeline = Arc::new(
            RetrievalPipeline::new(
                PipelineConfig::default(),
                Arc::new(FastClassifier),
                Arc::new(StubEmbedder),
                Arc::new(EchoGenerator),
            )
            .unwrap(),
        );
        EvaluationHarness::new(pipeline, FaithfulnessGrader::new(Arc::new(BrittleGrader)))
    }

    #[tokio::test]
    async fn test_run_preserves_length_and_order() {
        let harness = test_harness();
        let benchmark = vec![
            item("How many legs do tardigrades have?", Complexity::Lexical),
            item("a brittle question that breaks grading", Complexity::Semantic),
            item("What protects DNA from radiation?", Complexity::Reasoning),
        ];

        let records = harness.run(&benchmark, &tardigrade_corpus()).await;

        assert_eq!(records.len(), benchmark.len());
        for (record, item) in records.iter().zip(benchmark.iter()) {
            assert_eq!(record.question, item.question);
            assert_eq!(record.complexity, item.complexity);
        }
    }

    #[tokio::test]
    async fn test_grading_failure_becomes_explicit_marker() {
        let harness = test_harness();
        let benchmark = vec![
            item("How many legs?", Complexity::Lexical),
            item("a brittle question", Complexity::Semantic),
        ];

        let records = harness.run(&benchmark, &tardigrade_corpus()).await;

        assert_eq!(records[0].outcome, ScoreOutcome::Scored(3));
        assert!(matches!(records[1].outcome, ScoreOutcome::Failed(_)));
        // The pipeline succeeded, so the route is still recorded.
        assert_eq!(records[1].route, Some(RouteStrategy::Fast));
    }

    #[tokio::test]
    async fn test_pipeline_failure_recorded_without_route() {
        struct BrokenClassifier;

        #[async_trait]
        impl CompletionClient for BrokenClassifier {
            async fn complete(
                &self,
                _system: &str,
                _user: &str,
            ) -> std::result::Result<String, LlmError> {
                Ok("{\"strategy\": \"sideways\", \"rationale\": \"??\"}".to_string())
            }
        }

        let pipeline = Arc::new(
            RetrievalPipeline::new(
                PipelineConfig::default(),
                Arc::new(BrokenClassifier),
                Arc::new(StubEmbedder),
                Arc::new(EchoGenerator),
            )
            .unwrap(),
        );
        let harness =
            EvaluationHarness::new(pipeline, FaithfulnessGrader::new(Arc::new(BrittleGrader)));

        let records = harness
            .run(&[item("anything", Complexity::Lexical)], &tardigrade_corpus())
            .await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].route, None);
        assert!(matches!(records[0].outcome, ScoreOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn test_concurrent_run_keeps_input_order() {
        let harness = test_harness().with_concurrency(4);
        let benchmark: Vec<BenchmarkItem> = (0..8)
            .map(|i| item(&format!("question number {i}"), Complexity::Lexical))
            .collect();

        let records = harness.run(&benchmark, &tardigrade_corpus()).await;

        let questions: Vec<&str> = records.iter().map(|r| r.question.as_str()).collect();
        let expected: Vec<String> = (0..8).map(|i| format!("question number {i}")).collect();
        assert_eq!(
            questions,
            expected.iter().map(String::as_str).collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn test_empty_benchmark_yields_empty_report() {
        let harness = test_harness();
        let records = harness.run(&[], &tardigrade_corpus()).await;
        assert!(records.is_empty());
    }
}
