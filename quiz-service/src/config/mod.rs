use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;

/// Default upload size ceiling (16MB), matching the frontend's expectations.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct QuizConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub gemini: GeminiConfig,
    pub chunking: ChunkingConfig,
    pub retrieval: RetrievalConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    /// Model used for quiz/flashcard generation (e.g. gemini-1.5-flash)
    pub generation_model: String,
    /// Model used for chunk and query embeddings (e.g. text-embedding-004)
    pub embedding_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChunkingConfig {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RetrievalConfig {
    /// Upper bound on the number of chunks assembled into the prompt context.
    pub context_chunks: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    pub max_size_bytes: usize,
    /// Minimum number of characters (after trimming) a document must contain.
    pub min_text_chars: usize,
}

impl QuizConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common_config = core_config::Config::load()?;
        let is_prod = core_config::is_production();

        Ok(QuizConfig {
            common: common_config,
            gemini: GeminiConfig {
                api_key: core_config::get_env("GEMINI_API_KEY", Some(""), is_prod)?,
                generation_model: core_config::get_env(
                    "GEMINI_GENERATION_MODEL",
                    Some("gemini-1.5-flash"),
                    is_prod,
                )?,
                embedding_model: core_config::get_env(
                    "GEMINI_EMBEDDING_MODEL",
                    Some("text-embedding-004"),
                    is_prod,
                )?,
            },
            chunking: ChunkingConfig {
                chunk_size: parse_env("CHUNK_SIZE", "500", is_prod)?,
                chunk_overlap: parse_env("CHUNK_OVERLAP", "50", is_prod)?,
            },
            retrieval: RetrievalConfig {
                context_chunks: parse_env("RETRIEVAL_CONTEXT_CHUNKS", "4", is_prod)?,
            },
            upload: UploadConfig {
                max_size_bytes: parse_env(
                    "UPLOAD_MAX_BYTES",
                    &DEFAULT_MAX_UPLOAD_BYTES.to_string(),
                    is_prod,
                )?,
                min_text_chars: parse_env("UPLOAD_MIN_TEXT_CHARS", "50", is_prod)?,
            },
        })
    }
}

fn parse_env(key: &str, default: &str, is_prod: bool) -> Result<usize, AppError> {
    core_config::get_env(key, Some(default), is_prod)?
        .parse()
        .map_err(|e| AppError::ConfigError(anyhow::anyhow!("{} is not a valid number: {}", key, e)))
}
