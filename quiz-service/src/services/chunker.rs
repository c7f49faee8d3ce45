//! Sliding-window text chunking.
//!
//! Windows are counted in characters, not bytes, because uploaded documents
//! are frequently non-ASCII (Urdu and Arabic texts in particular) and byte
//! slicing would split multi-byte sequences.

use super::PipelineError;

/// Split `text` into overlapping windows of `size` characters.
///
/// Consecutive windows share `overlap` characters. Windows that contain only
/// whitespace are dropped. If nothing survives the filter (empty or
/// whitespace-only input), the full original text is returned as a single
/// chunk so downstream stages always have at least one.
pub fn chunk_text(text: &str, size: usize, overlap: usize) -> Result<Vec<String>, PipelineError> {
    // overlap >= size would make the window stride zero or negative
    if size == 0 || overlap >= size {
        return Err(PipelineError::ChunkConfig { size, overlap });
    }

    let char_offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    let total_chars = char_offsets.len();
    let step = size - overlap;

    let mut chunks = Vec::new();
    let mut start = 0;
    while start < total_chars {
        let begin = char_offsets[start];
        let end = if start + size < total_chars {
            char_offsets[start + size]
        } else {
            text.len()
        };

        // Windows are kept untrimmed; boundaries may split words
        let chunk = &text[begin..end];
        if !chunk.trim().is_empty() {
            chunks.push(chunk.to_string());
        }

        start += step;
    }

    if chunks.is_empty() {
        return Ok(vec![text.to_string()]);
    }

    Ok(chunks)
}
