//! Deterministic answers that need no generation service

use crate::types::{AnswerBlock, ScoredChunk};

/// Model label for answers not produced by a generation model
pub const FALLBACK_MODEL_LABEL: &str = "text-retrieval-fallback";

/// Answer when the session holds no documents
pub const NO_DOCUMENTS_MESSAGE: &str =
    "I don't have enough context. Please upload some documents first.";

const NO_MATCH_HEADING: &str = "No Relevant Information Found";
const NO_MATCH_MESSAGE: &str =
    "I couldn't find any content in your documents that matches your question.";
const NO_MATCH_SUGGESTIONS: [&str; 3] = [
    "Upload more documents related to your question",
    "Rephrase your question using different keywords",
    "Check if your documents contain the information you're looking for",
];

const EXCERPTS_HEADING: &str = "Key Information Found";
const EXCERPTS_NOTE: &str = "These are the most relevant excerpts from your documents. \
AI summarization is temporarily unavailable, but these direct quotes should help answer your question.";

/// Blocks for a session without documents
pub fn no_documents_blocks() -> Vec<AnswerBlock> {
    vec![AnswerBlock::Paragraph {
        text: NO_DOCUMENTS_MESSAGE.to_string(),
    }]
}

/// Blocks for a question that matched no chunk
pub fn no_match_blocks() -> Vec<AnswerBlock> {
    vec![
        AnswerBlock::Heading {
            text: NO_MATCH_HEADING.to_string(),
        },
        AnswerBlock::Paragraph {
            text: NO_MATCH_MESSAGE.to_string(),
        },
        AnswerBlock::Suggestions {
            items: NO_MATCH_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        },
    ]
}

/// Strip markdown markers, collapse whitespace, and cap the length
///
/// Text longer than `max_chars` characters is cut and gets a trailing `...`.
pub fn clean_excerpt(text: &str, max_chars: usize) -> String {
    let stripped = text.replace(['#', '*', '`'], "");
    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() > max_chars {
        let cut: String = collapsed.chars().take(max_chars).collect();
        format!("{}...", cut)
    } else {
        collapsed
    }
}

/// Extractive summary built from the best ranked chunks
#[derive(Debug, Clone)]
pub struct ExtractiveFallback {
    /// Number of ranked chunks quoted
    excerpts: usize,
    /// Maximum characters per quote
    excerpt_chars: usize,
}

impl ExtractiveFallback {
    pub fn new(excerpts: usize, excerpt_chars: usize) -> Self {
        Self {
            excerpts,
            excerpt_chars,
        }
    }

    /// Quote the first ranked chunks; identical input always yields identical blocks
    pub fn blocks(&self, ranked: &[ScoredChunk]) -> Vec<AnswerBlock> {
        let mut blocks = vec![AnswerBlock::Heading {
            text: EXCERPTS_HEADING.to_string(),
        }];

        for (i, scored) in ranked.iter().take(self.excerpts).enumerate() {
            if i > 0 {
                blocks.push(AnswerBlock::Divider);
            }
            blocks.push(AnswerBlock::Excerpt {
                index: i + 1,
                document_name: scored.chunk.source_doc_name.clone(),
                text: clean_excerpt(&scored.chunk.text, self.excerpt_chars),
            });
        }

        blocks.push(AnswerBlock::Divider);
        blocks.push(AnswerBlock::Note {
            text: EXCERPTS_NOTE.to_string(),
        });
        blocks
    }
}

impl Default for ExtractiveFallback {
    fn default() -> Self {
        Self::new(3, 200)
    }
}
