//! Prompt rendering for quiz and flashcard generation.
//!
//! Rendering is a pure function of its inputs: same context and parameters,
//! same prompt. The JSON schema embedded in the instructions is what
//! `parser` expects back, so the two modules must stay in sync.

use crate::models::{Difficulty, Language, Mode};

/// Render the generation prompt for the given context and parameters.
pub fn build_prompt(
    context: &str,
    count: usize,
    mode: Mode,
    difficulty: Difficulty,
    language: Language,
) -> String {
    match mode {
        Mode::Quiz => quiz_prompt(context, count, difficulty, language),
        Mode::Flashcard => flashcard_prompt(context, count, difficulty, language),
    }
}

fn quiz_prompt(context: &str, count: usize, difficulty: Difficulty, language: Language) -> String {
    format!(
        r#"You are a quiz generator. Analyze the provided text and generate exactly {count} multiple-choice questions.

CRITICAL: Output ONLY valid JSON. No markdown, no code blocks, no explanations.
LANGUAGE: Generate ALL content (questions, options, tags, explanations) in {language_name}.
DIFFICULTY: {difficulty_instruction}

Required JSON structure:
{{
    "quiz": [
        {{
            "id": 1,
            "question": "Clear, specific question about the content?",
            "options": ["Option A", "Option B", "Option C", "Option D"],
            "correctIndex": 0,
            "tag": "Topic Name",
            "explanation": "Brief explanation of why the correct answer is right and why other options are incorrect"
        }}
    ]
}}

Rules:
1. Questions must be factual and answerable from the text
2. Each question must have exactly 4 options
3. correctIndex is 0-3 (the position of the correct answer)
4. tag should be a topic category from the content
5. Ensure only one option is clearly correct
6. explanation should provide learning value - explain the correct concept and clarify common misconceptions
7. Keep explanations concise but informative (1-2 sentences)
8. ALL text (including explanations) must be in {language_name}
9. Adjust complexity based on difficulty level: {difficulty}

Based on this content, generate {count} quiz questions in {language_name} at {difficulty} difficulty level:

{context}

Generate the JSON now:"#,
        count = count,
        language_name = language.display_name(),
        difficulty_instruction = difficulty.instruction(),
        difficulty = difficulty.as_str(),
        context = context,
    )
}

fn flashcard_prompt(
    context: &str,
    count: usize,
    difficulty: Difficulty,
    language: Language,
) -> String {
    format!(
        r#"You are a flashcard generator. Analyze the provided text and generate exactly {count} flashcards.

CRITICAL: Output ONLY valid JSON. No markdown, no code blocks, no explanations.
LANGUAGE: Generate ALL content (front, back, tags) in {language_name}.
DIFFICULTY: {difficulty_instruction}

Required JSON structure:
{{
    "flashcards": [
        {{
            "id": 1,
            "front": "Term or concept",
            "back": "Clear, concise definition or explanation",
            "tag": "Topic Name"
        }}
    ]
}}

Rules:
1. Front should be a key term, concept, or question
2. Back should be the definition, explanation, or answer
3. Keep explanations clear and concise based on difficulty
4. tag should be a topic category from the content
5. Focus on the most important concepts
6. ALL text must be in {language_name}
7. Adjust complexity based on difficulty level: {difficulty}

Based on this content, generate {count} flashcards in {language_name} at {difficulty} difficulty level:

{context}

Generate the JSON now:"#,
        count = count,
        language_name = language.display_name(),
        difficulty_instruction = difficulty.instruction(),
        difficulty = difficulty.as_str(),
        context = context,
    )
}
