use crate::error::{EvalError, Result};
use serde::Deserialize;
use sift_llm_client::{CompletionClient, complete_json};
use std::sync::Arc;

const GRADER_SYSTEM: &str = "You are a strict grader. Give a score in a scale from 1 to 5. \
A score of 5 is the best, and corresponds to a case where the answer is fully supported by the context. \
A score of 1 is the worst, and corresponds to a case that contains hallucinations. \
Respond with a JSON object: {\"score\": 1-5, \"reasoning\": \"<explanation>\"}.";

/// A validated faithfulness score from the grading service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaithfulnessScore {
    /// 5 = fully supported by context, 1 = unsupported claims
    pub score: u8,

    /// The grading service's explanation
    pub reasoning: String,
}

/// Shape the grading service answers with
#[derive(Debug, Deserialize)]
struct RawScore {
    score: i64,
    #[serde(default)]
    reasoning: String,
}

/// Grader checking whether an answer is supported only by its context
pub struct FaithfulnessGrader {
    client: Arc<dyn CompletionClient>,
}

impl FaithfulnessGrader {
    /// Create a grader backed by the given grading service
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Grade one (question, context, answer) triple
    ///
    /// Scores outside 1..=5 violate the service contract and fail closed.
    pub async fn grade(
        &self,
        question: &str,
        context: &str,
        answer: &str,
    ) -> Result<FaithfulnessScore> {
        let user = format!("Context: {context}\nQuestion: {question}\nAnswer: {answer}");
        let raw: RawScore = complete_json(self.client.as_ref(), GRADER_SYSTEM, &user).await?;

        if !(1..=5).contains(&raw.score) {
            return Err(EvalError::ScoreOutOfRange(raw.score));
        }

        Ok(FaithfulnessScore {
            score: raw.score as u8,
            reasoning: raw.reasoning,
        })
    }
}
