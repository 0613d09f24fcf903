use crate::error::{Result, RouterError};
use log::debug;
use serde::{Deserialize, Serialize};
use sift_llm_client::{CompletionClient, complete_json};
use std::fmt;
use std::sync::Arc;

const POLICY_PROMPT: &str = "You are an Efficient Retrieval Router.\n\
 - Choose 'fast' for simple keyword lookups, greetings, or specific entity names.\n\
 - Choose 'deep' for questions requiring conceptual understanding, comparison, or synthesis of multiple facts.\n\
Respond with a JSON object: {\"strategy\": \"fast\" | \"deep\", \"rationale\": \"<why this path>\"}.";

/// The retrieval strategy chosen for a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RouteStrategy {
    /// Lexical ranking, no network calls
    Fast,
    /// Dense vector search
    Deep,
}

impl fmt::Display for RouteStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteStrategy::Fast => write!(f, "FAST"),
            RouteStrategy::Deep => write!(f, "DEEP"),
        }
    }
}

/// A routing decision: the chosen strategy plus the service's rationale
///
/// Produced once per query and consumed exactly once by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDecision {
    /// Which retrieval path to take
    pub strategy: RouteStrategy,

    /// Why the service chose it (never empty)
    pub rationale: String,
}

/// Shape the classification service answers with
#[derive(Debug, Deserialize)]
struct RawDecision {
    strategy: String,
    #[serde(default)]
    rationale: String,
}

/// Classifier dispatching queries to a retrieval strategy
pub struct Router {
    client: Arc<dyn CompletionClient>,
}

impl Router {
    /// Create a router backed by the given classification service
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Classify a query as FAST or DEEP
    ///
    /// A strategy outside the closed enum is a contract violation and
    /// surfaces as [`RouterError::InvalidStrategy`]; there is no default
    /// path.
    pub async fn route(&self, query: &str) -> Result<RouteDecision> {
        let raw: RawDecision = complete_json(
            self.client.as_ref(),
            POLICY_PROMPT,
            &format!("Query: {query}"),
        )
        .await?;

        let strategy = match raw.strategy.trim().to_lowercase().as_str() {
            "fast" => RouteStrategy::Fast,
            "deep" => RouteStrategy::Deep,
            other => return Err(RouterError::InvalidStrategy(other.to_string())),
        };

        if raw.rationale.trim().is_empty() {
            return Err(RouterError::MissingRationale);
        }

        debug!("Routed '{query}' -> {strategy}");

        Ok(RouteDecision {
            strategy,
            rationale: raw.rationale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use sift_llm_client::LlmError;

    struct CannedClient {
        response: String,
    }

    impl CannedClient {
        fn new(response: &str) -> Self {
            Self {
                response: response.to_string(),
            }
        }
    }

    #[async_trait]
    impl CompletionClient for CannedClient {
        async fn complete(
            &self,
            _system: &str,
            _user: &str,
        ) -> std::result::Result<String, LlmError> {
            Ok(self.response.clone())
        }
    }

    #[tokio::test]
    async fn test_route_fast() {
        let router = Router::new(Arc::new(CannedClient::new(
            "{\"strategy\": \"fast\", \"rationale\": \"plain keyword lookup\"}",
        )));

        let decision = router.route("How many legs do tardigrades have?").await.unwrap();

        assert_eq!(decision.strategy, RouteStrategy::Fast);
        assert_eq!(decision.rationale, "plain keyword lookup");
    }

    #[tokio::test]
    async fn test_route_deep_is_case_insensitive() {
        let router = Router::new(Arc::new(CannedClient::new(
            "{\"strategy\": \"DEEP\", \"rationale\": \"needs synthesis\"}",
        )));

        let decision = router.route("Why is Dsup medically relevant?").await.unwrap();

        assert_eq!(decision.strategy, RouteStrategy::Deep);
    }

    #[tokio::test]
    async fn test_route_accepts_fenced_json() {
        let router = Router::new(Arc::new(CannedClient::new(
            "```json\n{\"strategy\": \"deep\", \"rationale\": \"conceptual\"}\n```",
        )));

        let decision = router.route("compare the two").await.unwrap();
        assert_eq!(decision.strategy, RouteStrategy::Deep);
    }

    #[tokio::test]
    async fn test_unknown_strategy_is_rejected() {
        let router = Router::new(Arc::new(CannedClient::new(
            "{\"strategy\": \"hybrid\", \"rationale\": \"best of both\"}",
        )));

        let result = router.route("anything").await;

        match result {
            Err(RouterError::InvalidStrategy(value)) => assert_eq!(value, "hybrid"),
            other => panic!("expected InvalidStrategy, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_rationale_is_rejected() {
        let router = Router::new(Arc::new(CannedClient::new(
            "{\"strategy\": \"fast\", \"rationale\": \"  \"}",
        )));

        let result = router.route("anything").await;
        assert!(matches!(result, Err(RouterError::MissingRationale)));
    }

    #[tokio::test]
    async fn test_non_json_answer_fails_closed() {
        let router = Router::new(Arc::new(CannedClient::new("take the fast path")));

        let result = router.route("anything").await;
        assert!(matches!(
            result,
            Err(RouterError::Completion(LlmError::MalformedResponse(_)))
        ));
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(RouteStrategy::Fast.to_string(), "FAST");
        assert_eq!(RouteStrategy::Deep.to_string(), "DEEP");
    }
}
