//! Term-overlap relevance scoring

use crate::types::{Chunk, ScoredChunk};

/// Count the distinct `terms` that occur as substrings of the lowercased chunk text
///
/// Matching is plain substring containment, so `plan` matches inside
/// `planning`. Repeated occurrences of one term count once.
pub fn score(chunk: &Chunk, terms: &[String]) -> u32 {
    let text = chunk.text.to_lowercase();
    let mut seen: Vec<&str> = Vec::with_capacity(terms.len());
    let mut score = 0;

    for term in terms {
        if seen.contains(&term.as_str()) {
            continue;
        }
        seen.push(term);
        if text.contains(term.as_str()) {
            score += 1;
        }
    }

    score
}

/// Score every chunk against the same terms, preserving order
pub fn score_all(chunks: Vec<Chunk>, terms: &[String]) -> Vec<ScoredChunk> {
    chunks
        .into_iter()
        .map(|chunk| {
            let score = score(&chunk, terms);
            ScoredChunk { chunk, score }
        })
        .collect()
}
