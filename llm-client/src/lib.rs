//! # Sift LLM Client
//!
//! Narrow capability interface for the text-completion services the engine
//! consumes: routing classification, answer generation, benchmark-question
//! generation, and faithfulness grading all go through the same
//! [`CompletionClient`] trait, so core control logic stays testable with
//! deterministic fakes.
//!
//! ## Features
//!
//! - **Single seam**: `complete(system, user) -> String` is the whole
//!   contract; structured callers layer [`complete_json`] on top
//! - **Fail-closed parsing**: malformed structured output is an error,
//!   never a silent default
//! - **Bounded latency**: the HTTP implementation applies a request timeout
//!
//! ## Example
//!
//! ```no_run
//! use sift_llm_client::{CompletionClient, HttpClientConfig, HttpCompletionClient};
//!
//! #[tokio::main]
//! async fn main() -> sift_llm_client::Result<()> {
//!     let client = HttpCompletionClient::new(HttpClientConfig::default())?;
//!     let answer = client.complete("You are terse.", "Say hi.").await?;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod http;

pub use client::{CompletionClient, complete_json};
pub use error::{LlmError, Result};
pub use http::{HttpClientConfig, HttpCompletionClient};
