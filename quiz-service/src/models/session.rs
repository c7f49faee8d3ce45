//! Session model for ingested documents.

use chrono::{DateTime, Utc};

/// An ingested document held in memory for the lifetime of the process.
///
/// Chunks and embeddings are parallel vectors: `embeddings[i]` is the vector
/// for `chunks[i]`. Records are immutable once stored.
#[derive(Debug, Clone)]
pub struct DocumentSession {
    /// Opaque token identifying this session. Assigned by the store on insert.
    pub session_id: String,

    /// Original filename of the upload.
    pub filename: String,

    /// Document text split into overlapping windows, in source order.
    pub chunks: Vec<String>,

    /// Embedding vector per chunk, same order and length as `chunks`.
    pub embeddings: Vec<Vec<f32>>,

    /// Character count of the full extracted text.
    pub text_length: usize,

    /// When the document was ingested.
    pub created_at: DateTime<Utc>,
}

impl DocumentSession {
    pub fn new(
        filename: String,
        chunks: Vec<String>,
        embeddings: Vec<Vec<f32>>,
        text_length: usize,
    ) -> Self {
        Self {
            session_id: String::new(),
            filename,
            chunks,
            embeddings,
            text_length,
            created_at: Utc::now(),
        }
    }
}
