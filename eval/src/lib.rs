/*!
# Sift Eval

Evaluation harness for the retrieval pipeline: generate a labeled benchmark
from the corpus, replay it through the full pipeline, grade every answer's
faithfulness to its retrieved context, and aggregate a report.

## Pipeline

```text
Corpus
  └─> BenchmarkGenerator (3 items per document: Lexical / Semantic / Reasoning)
        └─> benchmark file (JSON array)

Benchmark + Corpus
  └─> EvaluationHarness
        ├─ per item: RetrievalPipeline::answer -> (context, answer, route)
        ├─ per item: FaithfulnessGrader -> score 1..=5
        └─> Vec<EvaluationRecord>  (same length and order as the benchmark)
              └─> Report (mean score per complexity, route distribution)
```

Batch operations isolate per-item failures: a document that fails benchmark
generation is logged and skipped, and an item whose pipeline or grading call
fails produces an explicit `Failed` record rather than disappearing.
*/

mod benchmark;
mod error;
mod generator;
mod grader;
mod harness;
mod report;

pub use benchmark::{BenchmarkItem, Complexity, load_benchmark, save_benchmark};
pub use error::{EvalError, Result};
pub use generator::BenchmarkGenerator;
pub use grader::{FaithfulnessGrader, FaithfulnessScore};
pub use harness::{EvaluationHarness, EvaluationRecord, ScoreOutcome};
pub use report::{ComplexityStats, Report, detailed_log};
