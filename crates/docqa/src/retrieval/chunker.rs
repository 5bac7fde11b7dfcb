//! Paragraph chunking of raw document text

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Chunk;

/// One or more blank lines (lines holding only whitespace)
static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

/// Splits document text into paragraph chunks
#[derive(Debug, Clone)]
pub struct Chunker {
    /// Chunks must be strictly longer than this many characters
    min_chars: usize,
}

impl Chunker {
    /// Create a chunker that drops paragraphs of `min_chars` characters or fewer
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }

    /// Split `text` into chunks tagged with the source document
    ///
    /// Paragraphs keep their source order. Empty text yields no chunks.
    pub fn chunk(&self, text: &str, doc_id: &str, doc_name: &str) -> Vec<Chunk> {
        BLANK_LINES
            .split(text)
            .map(str::trim)
            .filter(|segment| segment.chars().count() > self.min_chars)
            .map(|segment| Chunk::new(doc_id, doc_name, segment))
            .collect()
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(50)
    }
}
