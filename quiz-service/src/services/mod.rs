pub mod chunker;
pub mod extraction;
pub mod metrics;
pub mod parser;
pub mod prompts;
pub mod providers;
pub mod retrieval;
pub mod store;

pub use metrics::{get_metrics, init_metrics};
pub use store::{InMemorySessionStore, SessionStore};

use providers::ProviderError;
use service_core::error::AppError;
use thiserror::Error;

/// Failures along the ingest/generate pipeline.
///
/// Every variant is terminal for its request; the `From<PipelineError>`
/// conversion decides the HTTP class at the boundary.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Invalid chunking parameters: size {size} must be greater than overlap {overlap}")]
    ChunkConfig { size: usize, overlap: usize },

    #[error("Document appears to be empty or too short ({chars} characters, minimum {min})")]
    DocumentTooShort { chars: usize, min: usize },

    #[error("Error extracting text: {0}")]
    Extraction(String),

    #[error("Error generating embeddings: {0}")]
    Embedding(ProviderError),

    #[error("Error generating content: {0}")]
    Generation(ProviderError),

    #[error("Failed to parse model response as JSON: {reason}")]
    MalformedResponse { reason: String, raw: String },
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::ChunkConfig { .. } => AppError::ConfigError(anyhow::Error::new(err)),
            PipelineError::DocumentTooShort { .. } | PipelineError::Extraction(_) => {
                AppError::BadRequest(anyhow::Error::new(err))
            }
            PipelineError::Embedding(_)
            | PipelineError::Generation(_)
            | PipelineError::MalformedResponse { .. } => AppError::BadGateway(err.to_string()),
        }
    }
}
