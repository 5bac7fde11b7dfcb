//! Selection of the best chunks for a question

use crate::types::ScoredChunk;

/// Default number of chunks handed to generation
pub const DEFAULT_TOP_K: usize = 5;

/// Keep chunks with a positive score, best first, at most `k` of them
///
/// The sort is stable: equal scores keep the order the chunks were produced in.
pub fn rank(mut scored: Vec<ScoredChunk>, k: usize) -> Vec<ScoredChunk> {
    scored.retain(|s| s.score > 0);
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(k);
    scored
}
