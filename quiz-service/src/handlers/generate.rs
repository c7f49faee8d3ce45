use crate::dtos::{GenerateRequest, GenerateResponse};
use crate::models::{Difficulty, Language, Mode};
use crate::services::parser::parse_items;
use crate::services::prompts::build_prompt;
use crate::services::retrieval::{retrieve_context, RETRIEVAL_QUERY};
use crate::services::PipelineError;
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use service_core::error::AppError;
use uuid::Uuid;

/// Generate quiz questions or flashcards for a previously ingested document.
///
/// Validation runs field by field in a fixed order (session presence, session
/// lookup, difficulty, language, count, mode) so that a request with several
/// bad fields always fails on the same one.
#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn generate_content(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<impl IntoResponse, AppError> {
    let session_id = req
        .session_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("session_id is required")))?;

    let session = state.store.get(session_id).await?.ok_or_else(|| {
        AppError::NotFound(anyhow::anyhow!("Invalid session_id or session expired"))
    })?;

    let difficulty = req
        .difficulty
        .as_deref()
        .unwrap_or("medium")
        .parse::<Difficulty>()
        .map_err(|e| AppError::UnprocessableEntity(anyhow::anyhow!(e)))?;

    let language = req
        .language
        .as_deref()
        .unwrap_or("en")
        .parse::<Language>()
        .map_err(|e| AppError::UnprocessableEntity(anyhow::anyhow!(e)))?;

    // A non-integer JSON value fails here too, not at body deserialization.
    let count = match &req.num_questions {
        None => 5,
        Some(value) => value.as_i64().filter(|n| (3..=20).contains(n)).ok_or_else(|| {
            AppError::UnprocessableEntity(anyhow::anyhow!(
                "num_questions must be between 3 and 20"
            ))
        })?,
    };

    let mode = req
        .mode
        .as_deref()
        .unwrap_or("quiz")
        .parse::<Mode>()
        .map_err(|e| AppError::UnprocessableEntity(anyhow::anyhow!(e)))?;

    let query_vectors = state
        .embedder
        .embed(&[RETRIEVAL_QUERY.to_string()])
        .await
        .map_err(PipelineError::Embedding)?;
    let query_embedding = query_vectors.first().ok_or_else(|| {
        AppError::BadGateway("Embedding provider returned no query vector".to_string())
    })?;

    let context = retrieve_context(
        &session.chunks,
        &session.embeddings,
        query_embedding,
        state.config.retrieval.context_chunks,
    );

    tracing::info!(
        session_id = %session.session_id,
        mode = %mode,
        difficulty = %difficulty,
        language = %language,
        count,
        context_len = context.len(),
        "Generating content"
    );

    let prompt = build_prompt(&context, count as usize, mode, difficulty, language);

    let raw = state
        .generator
        .complete(&prompt)
        .await
        .map_err(PipelineError::Generation)?;

    let items = parse_items(&raw, mode).map_err(|err| {
        if let PipelineError::MalformedResponse { reason, raw } = &err {
            tracing::error!(reason = %reason, raw = %raw, "Model returned an unparseable payload");
        }
        err
    })?;

    // The prompt demands exactly `count` items but the model may drift; the
    // batch is served as-is and the drift is only recorded.
    if items.len() != count as usize {
        tracing::warn!(
            requested = count,
            returned = items.len(),
            "Model returned a different item count than requested"
        );
    }

    metrics::counter!("generations_completed_total", "mode" => mode.as_str()).increment(1);

    Ok(Json(GenerateResponse {
        items,
        mode,
        difficulty,
        language,
    }))
}
