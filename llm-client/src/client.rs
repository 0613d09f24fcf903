use crate::error::{LlmError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Capability interface for a text-completion service
///
/// One system instruction, one user message, one free-text completion.
/// Implementations must not retry on their own; callers decide the retry
/// policy (the reference pipeline never retries).
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Run a single completion
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

/// Run a completion and parse its structured JSON payload
///
/// Services are prompted to answer with a JSON document; some wrap it in a
/// Markdown code fence. The fence is stripped before parsing. Anything that
/// does not deserialize into `T` is a [`LlmError::MalformedResponse`] —
/// structured callers fail closed rather than guessing.
pub async fn complete_json<T: DeserializeOwned>(
    client: &dyn CompletionClient,
    system: &str,
    user: &str,
) -> Result<T> {
    let completion = client.complete(system, user).await?;
    let payload = strip_code_fences(&completion);
    serde_json::from_str(payload)
        .map_err(|e| LlmError::MalformedResponse(format!("{e}: {payload}")))
}

/// Strip a surrounding Markdown code fence, if present
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the optional language tag on the opening fence line.
    let rest = match rest.split_once('\n') {
        Some((_lang, body)) => body,
        None => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
