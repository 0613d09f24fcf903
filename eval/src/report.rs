use crate::benchmark::Complexity;
use crate::harness::{EvaluationRecord, ScoreOutcome};
use serde::Serialize;
use sift_router::RouteStrategy;
use std::fmt::Write as _;

const QUESTION_PREVIEW_LEN: usize = 64;

/// Aggregate statistics for one complexity bucket
#[derive(Debug, Clone, Serialize)]
pub struct ComplexityStats {
    /// The bucket label
    pub complexity: Complexity,

    /// Items in the bucket (scored or failed)
    pub total: usize,

    /// Items that produced a score
    pub scored: usize,

    /// Mean faithfulness score over the scored items
    pub mean_score: Option<f32>,
}

/// Aggregated view over an evaluation run
///
/// Presentation layer on top of the record sequence; the records
/// themselves stay the source of truth.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Per-complexity score statistics, in rubric order
    pub per_complexity: Vec<ComplexityStats>,

    /// Queries answered via the lexical path
    pub fast_routes: usize,

    /// Queries answered via the dense path
    pub deep_routes: usize,

    /// Items that ended in an explicit failure marker
    pub failures: usize,
}

impl Report {
    /// Aggregate a record sequence
    pub fn from_records(records: &[EvaluationRecord]) -> Self {
        let per_complexity = Complexity::ALL
            .iter()
            .map(|&complexity| {
                let bucket: Vec<&EvaluationRecord> = records
                    .iter()
                    .filter(|r| r.complexity == complexity)
                    .collect();
                let scores: Vec<u8> = bucket.iter().filter_map(|r| r.score()).collect();
                let mean_score = if scores.is_empty() {
                    None
                } else {
                    Some(scores.iter().map(|&s| f32::from(s)).sum::<f32>() / scores.len() as f32)
                };
                ComplexityStats {
                    complexity,
                    total: bucket.len(),
                    scored: scores.len(),
                    mean_score,
                }
            })
            .collect();

        let fast_routes = records
            .iter()
            .filter(|r| r.route == Some(RouteStrategy::Fast))
            .count();
        let deep_routes = records
            .iter()
            .filter(|r| r.route == Some(RouteStrategy::Deep))
            .count();
        let failures = records
            .iter()
            .filter(|r| matches!(r.outcome, ScoreOutcome::Failed(_)))
            .count();

        Self {
            per_complexity,
            fast_routes,
            deep_routes,
            failures,
        }
    }

    /// Render the summary table
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Routes: {} FAST / {} DEEP", self.fast_routes, self.deep_routes);
        let _ = writeln!(out, "Failures: {}", self.failures);
        for stats in &self.per_complexity {
            match stats.mean_score {
                Some(mean) => {
                    let _ = writeln!(
                        out,
                        "{}: mean faithfulness {:.2}/5 over {} of {} items",
                        stats.complexity, mean, stats.scored, stats.total
                    );
                }
                None => {
                    let _ = writeln!(out, "{}: no scored items", stats.complexity);
                }
            }
        }
        out
    }
}

/// Render one log line per record, in record order
pub fn detailed_log(records: &[EvaluationRecord]) -> String {
    let mut out = String::new();
    for record in records {
        let question = preview(&record.question);
        let route = record
            .route
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());
        match &record.outcome {
            ScoreOutcome::Scored(score) => {
                let _ = writeln!(
                    out,
                    "Query: {question}\nComplexity: {} | Route taken: {route} | Faithfulness: {score}/5\n",
                    record.complexity
                );
            }
            ScoreOutcome::Failed(reason) => {
                let _ = writeln!(
                    out,
                    "Query: {question}\nComplexity: {} | Route taken: {route} | FAILED: {reason}\n",
                    record.complexity
                );
            }
        }
    }
    out
}

fn preview(question: &str) -> String {
    if question.chars().count() > QUESTION_PREVIEW_LEN {
        let truncated: String = question.chars().take(QUESTION_PREVIEW_LEN).collect();
        format!("{truncated}...")
    } else {
        question.to_string()
    }
}
