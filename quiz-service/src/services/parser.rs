//! Parsing of model output into typed study material.
//!
//! The model is instructed to emit bare JSON, but in practice it sometimes
//! wraps the payload in a markdown code fence. Fence stripping is the only
//! normalization applied; anything else that fails to parse is reported
//! as-is, with the raw text attached for diagnostics.

use super::PipelineError;
use crate::models::{Flashcard, GeneratedItem, Mode, QuizQuestion};

/// Strip a surrounding markdown code fence, if present.
///
/// Drops the opening fence line (including any language tag such as
/// ```` ```json ````) and a trailing ```` ``` ````, then trims. Unfenced
/// input passes through unchanged apart from trimming.
pub fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw.trim();

    if text.starts_with("```") {
        text = match text.find('\n') {
            Some(pos) => &text[pos + 1..],
            None => &text[3..],
        };
        if let Some(stripped) = text.strip_suffix("```") {
            text = stripped;
        }
    }

    text.trim()
}

/// Parse the model's raw output into a homogeneous batch of items.
///
/// The payload must be a JSON object whose `"quiz"` or `"flashcards"` key
/// (per `mode`) holds an array of well-formed records. No semantic
/// validation happens here: option counts and batch sizes are the prompt's
/// contract, not the parser's.
pub fn parse_items(raw: &str, mode: Mode) -> Result<Vec<GeneratedItem>, PipelineError> {
    let cleaned = strip_code_fence(raw);

    let value: serde_json::Value =
        serde_json::from_str(cleaned).map_err(|e| PipelineError::MalformedResponse {
            reason: e.to_string(),
            raw: raw.to_string(),
        })?;

    let key = mode.response_key();
    let items = value
        .get(key)
        .ok_or_else(|| PipelineError::MalformedResponse {
            reason: format!("missing \"{}\" key in response object", key),
            raw: raw.to_string(),
        })?
        .clone();

    match mode {
        Mode::Quiz => serde_json::from_value::<Vec<QuizQuestion>>(items)
            .map(|questions| questions.into_iter().map(GeneratedItem::Quiz).collect()),
        Mode::Flashcard => serde_json::from_value::<Vec<Flashcard>>(items)
            .map(|cards| cards.into_iter().map(GeneratedItem::Flashcard).collect()),
    }
    .map_err(|e| PipelineError::MalformedResponse {
        reason: format!("\"{}\" entries are malformed: {}", key, e),
        raw: raw.to_string(),
    })
}
