//! Response types for the HTTP API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::document::{Document, ScoredChunk};
use crate::generation::render;

/// A chunk that supported an answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    /// Document ID
    pub document_id: String,
    /// Source filename
    pub document_name: String,
    /// Leading part of the chunk text followed by an ellipsis
    pub snippet: String,
    /// Relevance score of the chunk
    pub score: u32,
}

impl Citation {
    /// Create a citation from a ranked chunk
    pub fn from_scored(scored: &ScoredChunk, snippet_chars: usize) -> Self {
        let snippet: String = scored.chunk.text.chars().take(snippet_chars).collect();
        Self {
            document_id: scored.chunk.source_doc_id.clone(),
            document_name: scored.chunk.source_doc_name.clone(),
            snippet: format!("{}...", snippet),
            score: scored.score,
        }
    }
}

/// One piece of a structured answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnswerBlock {
    Heading { text: String },
    Paragraph { text: String },
    /// Numbered quote from a document
    Excerpt {
        index: usize,
        document_name: String,
        text: String,
    },
    Divider,
    Note { text: String },
    Suggestions { items: Vec<String> },
}

/// Final answer for one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub blocks: Vec<AnswerBlock>,
    pub sources: Vec<Citation>,
    pub model_label: String,
}

impl Answer {
    /// Answer text rendered as markdown
    pub fn text(&self) -> String {
        render::to_markdown(&self.blocks)
    }
}

/// Body returned by `POST /api/ask`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    /// Rendered answer text
    pub answer: String,
    /// Supporting chunks
    pub sources: Vec<Citation>,
    /// Model that produced the answer, or the fallback label
    pub model: String,
    /// Structured form of `answer`
    pub blocks: Vec<AnswerBlock>,
}

impl From<Answer> for AskResponse {
    fn from(answer: Answer) -> Self {
        Self {
            answer: answer.text(),
            sources: answer.sources,
            model: answer.model_label,
            blocks: answer.blocks,
        }
    }
}

/// Body returned by `POST /api/upload`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub document: Document,
}

/// Plain acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body returned by `GET /api/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub services: ServiceStatus,
}

/// Per-dependency health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// `operational` or `unavailable`
    pub storage: String,
    /// `connected` when a generation credential is configured
    pub generation: String,
}
