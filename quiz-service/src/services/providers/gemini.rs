//! Gemini AI provider implementations.
//!
//! Implements text generation via `generateContent` and document embedding
//! via `batchEmbedContents` against Google's Gemini REST API.

use super::{Embedder, ProviderError, TextGenerator};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Gemini API base URL.
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Maximum texts per `batchEmbedContents` call.
const EMBED_BATCH_LIMIT: usize = 100;

/// Per-model client configuration.
#[derive(Debug, Clone)]
pub struct GeminiClientConfig {
    pub api_key: String,
    pub model: String,
}

fn http_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(120))
        .build()
        .expect("Failed to create HTTP client")
}

fn api_url(config: &GeminiClientConfig, method: &str) -> String {
    format!(
        "{}/models/{}:{}?key={}",
        GEMINI_API_BASE, config.model, method, config.api_key
    )
}

/// Map non-success HTTP responses to provider errors.
async fn error_for_status(response: reqwest::Response) -> ProviderError {
    let status = response.status();
    let error_text = response.text().await.unwrap_or_default();

    if status.as_u16() == 429 {
        return ProviderError::RateLimited;
    }

    ProviderError::ApiError(format!("Gemini API error {}: {}", status, error_text))
}

/// Gemini text generation provider.
pub struct GeminiGenerator {
    config: GeminiClientConfig,
    client: Client,
}

impl GeminiGenerator {
    pub fn new(config: GeminiClientConfig) -> Self {
        Self {
            config,
            client: http_client(),
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        if self.config.api_key.is_empty() {
            return Err(ProviderError::NotConfigured(
                "Gemini API key not configured".to_string(),
            ));
        }

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let url = api_url(&self.config, "generateContent");

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending generation request to Gemini API"
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(error_for_status(response).await);
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ApiError(format!("Failed to parse response: {}", e)))?;

        let candidate = api_response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::ApiError("Response contained no candidates".to_string()))?;

        if candidate.finish_reason.as_deref() == Some("SAFETY") {
            return Err(ProviderError::ContentFiltered);
        }

        candidate
            .content
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| ProviderError::ApiError("Response contained no text".to_string()))
    }
}

/// Gemini embedding provider.
pub struct GeminiEmbedder {
    config: GeminiClientConfig,
    client: Client,
}

impl GeminiEmbedder {
    pub fn new(config: GeminiClientConfig) -> Self {
        Self {
            config,
            client: http_client(),
        }
    }
}

#[async_trait]
impl Embedder for GeminiEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, ProviderError> {
        if self.config.api_key.is_empty() {
            return Err(ProviderError::NotConfigured(
                "Gemini API key not configured".to_string(),
            ));
        }

        let url = api_url(&self.config, "batchEmbedContents");
        let mut vectors = Vec::with_capacity(texts.len());

        for batch in texts.chunks(EMBED_BATCH_LIMIT) {
            let request = BatchEmbedContentsRequest {
                requests: batch
                    .iter()
                    .map(|text| EmbedContentRequest {
                        model: format!("models/{}", self.config.model),
                        content: Content {
                            role: None,
                            parts: vec![Part { text: text.clone() }],
                        },
                    })
                    .collect(),
            };

            tracing::debug!(
                model = %self.config.model,
                batch_len = batch.len(),
                "Sending embedding request to Gemini API"
            );

            let response = self
                .client
                .post(&url)
                .json(&request)
                .send()
                .await
                .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

            if !response.status().is_success() {
                return Err(error_for_status(response).await);
            }

            let api_response: BatchEmbedContentsResponse = response
                .json()
                .await
                .map_err(|e| ProviderError::ApiError(format!("Failed to parse response: {}", e)))?;

            if api_response.embeddings.len() != batch.len() {
                return Err(ProviderError::ApiError(format!(
                    "Expected {} embeddings, got {}",
                    batch.len(),
                    api_response.embeddings.len()
                )));
            }

            vectors.extend(api_response.embeddings.into_iter().map(|e| e.values));
        }

        Ok(vectors)
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    // Absent when the candidate was blocked.
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchEmbedContentsRequest {
    requests: Vec<EmbedContentRequest>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EmbedContentRequest {
    model: String,
    content: Content,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchEmbedContentsResponse {
    #[serde(default)]
    embeddings: Vec<ContentEmbedding>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContentEmbedding {
    values: Vec<f32>,
}
