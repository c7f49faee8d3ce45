//! Mock provider implementations for testing.

use super::{Embedder, ProviderError, TextGenerator};
use async_trait::async_trait;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Mock embedder that derives small deterministic vectors from the input
/// text, so similarity rankings are stable across runs.
pub struct MockEmbedder {
    dimensions: usize,
}

impl MockEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn pseudo_vector(&self, text: &str) -> Vec<f32> {
        (0..self.dimensions)
            .map(|component| {
                let mut hasher = DefaultHasher::new();
                text.hash(&mut hasher);
                component.hash(&mut hasher);
                (hasher.finish() % 1000) as f32 / 1000.0 - 0.5
            })
            .collect()
    }
}

impl Default for MockEmbedder {
    fn default() -> Self {
        Self::new(8)
    }
}

#[async_trait]
impl Embedder for MockEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, ProviderError> {
        Ok(texts.iter().map(|text| self.pseudo_vector(text)).collect())
    }
}

/// Mock text generator that returns a canned response regardless of prompt.
pub struct MockTextGenerator {
    response: String,
}

impl MockTextGenerator {
    pub fn returning(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

impl Default for MockTextGenerator {
    fn default() -> Self {
        Self::returning(sample_quiz_json(5))
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
        Ok(self.response.clone())
    }
}

/// Build a well-formed quiz payload with `count` questions.
pub fn sample_quiz_json(count: usize) -> String {
    let questions: Vec<serde_json::Value> = (1..=count)
        .map(|id| {
            serde_json::json!({
                "id": id,
                "question": format!("What does section {} describe?", id),
                "options": ["Option A", "Option B", "Option C", "Option D"],
                "correctIndex": 0,
                "tag": "overview",
                "explanation": "Stated directly in the passage."
            })
        })
        .collect();

    serde_json::json!({ "quiz": questions }).to_string()
}

/// Build a well-formed flashcard payload with `count` cards.
pub fn sample_flashcards_json(count: usize) -> String {
    let cards: Vec<serde_json::Value> = (1..=count)
        .map(|id| {
            serde_json::json!({
                "id": id,
                "front": format!("Term {}", id),
                "back": format!("Definition of term {}.", id),
                "tag": "vocabulary"
            })
        })
        .collect();

    serde_json::json!({ "flashcards": cards }).to_string()
}
