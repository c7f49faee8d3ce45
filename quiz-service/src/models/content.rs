//! Generated study material and the closed parameter enums that shape it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of study material to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Quiz,
    Flashcard,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Quiz => "quiz",
            Mode::Flashcard => "flashcard",
        }
    }

    /// Top-level key the model is instructed to emit for this mode.
    pub fn response_key(&self) -> &'static str {
        match self {
            Mode::Quiz => "quiz",
            Mode::Flashcard => "flashcards",
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quiz" => Ok(Mode::Quiz),
            "flashcard" => Ok(Mode::Flashcard),
            _ => Err("Invalid mode. Must be one of: quiz, flashcard".to_string()),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Question complexity requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Basic,
    Medium,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Basic => "basic",
            Difficulty::Medium => "medium",
            Difficulty::Advanced => "advanced",
        }
    }

    /// Instructional phrase spliced into the prompt for this level.
    pub fn instruction(&self) -> &'static str {
        match self {
            Difficulty::Basic => {
                "Focus on simple recall questions, straightforward language, and fundamental concepts. Questions should test basic understanding and memorization."
            }
            Difficulty::Medium => {
                "Include moderate complexity questions with some application-based scenarios. Balance between recall and understanding."
            }
            Difficulty::Advanced => {
                "Create challenging questions requiring critical thinking, analysis, and multi-step reasoning. Include complex scenarios and deep conceptual understanding."
            }
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Difficulty::Basic),
            "medium" => Ok(Difficulty::Medium),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err("Invalid difficulty. Must be one of: basic, medium, advanced".to_string()),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output language for all generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ur,
    Es,
    Fr,
    Ar,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ur => "ur",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::Ar => "ar",
        }
    }

    /// Human-readable name substituted into the prompt.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ur => "Urdu",
            Language::Es => "Spanish",
            Language::Fr => "French",
            Language::Ar => "Arabic",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "ur" => Ok(Language::Ur),
            "es" => Ok(Language::Es),
            "fr" => Ok(Language::Fr),
            "ar" => Ok(Language::Ar),
            _ => Err("Invalid language. Must be one of: en, ur, es, fr, ar".to_string()),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A multiple-choice question produced by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// 1-based position in the generated batch.
    pub id: u32,

    /// Question text.
    pub question: String,

    /// Candidate answers. The model is instructed to emit exactly four.
    pub options: Vec<String>,

    /// Index into `options` of the correct answer.
    #[serde(rename = "correctIndex")]
    pub correct_index: u32,

    /// Topic category drawn from the source content.
    pub tag: String,

    /// Why the correct answer is right.
    pub explanation: String,
}

/// A front/back study card produced by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    /// 1-based position in the generated batch.
    pub id: u32,

    /// Term, concept, or question.
    pub front: String,

    /// Definition, explanation, or answer.
    pub back: String,

    /// Topic category drawn from the source content.
    pub tag: String,
}

/// One generated item. A batch always holds a single variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GeneratedItem {
    Quiz(QuizQuestion),
    Flashcard(Flashcard),
}
