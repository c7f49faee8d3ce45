//! Embedding-based chunk retrieval.
//!
//! Ranks stored chunks against a fixed "informativeness" query instead of a
//! user-supplied one: the goal is to surface the densest, most teachable
//! parts of the document, whatever it is about.

/// Query embedded at generation time to score chunks for informativeness.
pub const RETRIEVAL_QUERY: &str = "important concepts, definitions, key facts, and main ideas";

/// Cosine similarity between two vectors.
///
/// Returns 0.0 for degenerate inputs (length mismatch, empty, or zero norm).
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        return 0.0;
    }

    (dot / denom) as f32
}

/// Indices of the `k` chunks most similar to `query`, most similar first.
/// Equal similarities are broken by ascending original index. Scores compare
/// via `total_cmp`, so the ordering holds even for NaN similarities.
pub fn top_k_indices(embeddings: &[Vec<f32>], query: &[f32], k: usize) -> Vec<usize> {
    let mut scored: Vec<(usize, f32)> = embeddings
        .iter()
        .map(|e| cosine_similarity(query, e))
        .enumerate()
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    scored.truncate(k);

    scored.into_iter().map(|(i, _)| i).collect()
}

/// Select the `k` most relevant chunks and join them, most relevant first,
/// with a blank line between chunks. `k` is clamped to the chunk count.
pub fn retrieve_context(
    chunks: &[String],
    embeddings: &[Vec<f32>],
    query_embedding: &[f32],
    k: usize,
) -> String {
    let indices = top_k_indices(embeddings, query_embedding, k.min(chunks.len()));

    indices
        .iter()
        .map(|&i| chunks[i].as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}
