use crate::dtos::UploadResponse;
use crate::models::DocumentSession;
use crate::services::chunker::chunk_text;
use crate::services::extraction::{extract_text, supported_media_type};
use crate::services::PipelineError;
use crate::startup::AppState;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;
use uuid::Uuid;

/// Ingest one document: extract text, chunk, embed, and store a session.
#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| {
            AppError::BadRequest(anyhow::anyhow!("Failed to read multipart field: {}", e))
        })?
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("No file provided")))?;

    let filename = field.file_name().unwrap_or_default().to_string();
    if filename.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!("Empty filename")));
    }

    let media_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    if !supported_media_type(&media_type) {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Unsupported file type. Please upload PDF, DOCX, or TXT"
        )));
    }

    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Failed to read file bytes: {}", e)))?
        .to_vec();

    tracing::info!(
        filename = %filename,
        media_type = %media_type,
        size = data.len(),
        "Document upload started"
    );

    // PDF/DOCX parsing is CPU-bound, keep it off the async workers.
    let parse_media_type = media_type.clone();
    let text = tokio::task::spawn_blocking(move || extract_text(&data, &parse_media_type))
        .await
        .map_err(|e| {
            AppError::InternalError(anyhow::anyhow!("Extraction task panicked: {}", e))
        })??;

    let text_length = text.chars().count();
    let trimmed_length = text.trim().chars().count();
    let min_chars = state.config.upload.min_text_chars;

    if trimmed_length < min_chars {
        return Err(PipelineError::DocumentTooShort {
            chars: trimmed_length,
            min: min_chars,
        }
        .into());
    }

    let chunks = chunk_text(
        &text,
        state.config.chunking.chunk_size,
        state.config.chunking.chunk_overlap,
    )?;
    let chunk_count = chunks.len();

    let embeddings = state
        .embedder
        .embed(&chunks)
        .await
        .map_err(PipelineError::Embedding)?;

    if embeddings.len() != chunks.len() {
        return Err(AppError::BadGateway(format!(
            "Embedding count mismatch: {} chunks, {} embeddings",
            chunks.len(),
            embeddings.len()
        )));
    }

    let session = DocumentSession::new(filename.clone(), chunks, embeddings, text_length);
    let session_id = state.store.insert(session).await?;

    metrics::counter!("documents_ingested_total", "media_type" => media_type).increment(1);

    tracing::info!(
        session_id = %session_id,
        chunk_count,
        text_length,
        "Document ingested"
    );

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            session_id,
            filename,
            chunk_count,
            text_length,
        }),
    ))
}
