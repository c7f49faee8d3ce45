use crate::models::{Difficulty, GeneratedItem, Language, Mode};
use serde::{Deserialize, Serialize};

/// Request body for content generation.
///
/// Every field is optional at the wire level; the handler applies the
/// documented defaults and validates fields one at a time so that error
/// precedence stays stable. `num_questions` stays a raw JSON value because
/// a non-integer must fail count validation, not body deserialization.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub session_id: Option<String>,
    pub mode: Option<String>,
    pub num_questions: Option<serde_json::Value>,
    pub difficulty: Option<String>,
    pub language: Option<String>,
}

/// Response body for a successful generation.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub items: Vec<GeneratedItem>,
    pub mode: Mode,
    pub difficulty: Difficulty,
    pub language: Language,
}
