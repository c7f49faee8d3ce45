//! AI provider abstractions and implementations.
//!
//! Trait-based seams for the two model calls the pipeline makes (embedding
//! and text generation), so the Gemini backend can be swapped for a mock.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Trait for embedding providers.
///
/// Returns one vector per input text, in input order.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, ProviderError>;
}

/// Trait for text generation providers.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run a single non-streaming completion and return the response text.
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}
