//! # Sift Router
//!
//! Per-query routing between the two retrieval strategies. The decision is
//! delegated to the external classification service under a fixed policy
//! prompt; the answer is validated against the closed [`RouteStrategy`]
//! enum and anything else fails loudly — the router never silently
//! defaults to a path.
//!
//! ## Example
//!
//! ```no_run
//! use sift_llm_client::{HttpClientConfig, HttpCompletionClient};
//! use sift_router::Router;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(HttpCompletionClient::new(HttpClientConfig::default())?);
//!     let router = Router::new(client);
//!     let decision = router.route("How many legs do tardigrades have?").await?;
//!     println!("{}: {}", decision.strategy, decision.rationale);
//!     Ok(())
//! }
//! ```

mod error;
mod router;

pub use error::{Result, RouterError};
pub use router::{RouteDecision, RouteStrategy, Router};
