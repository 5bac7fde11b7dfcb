//! Document and chunk types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// An uploaded document owned by a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Document ID (unique within the session)
    pub id: String,
    /// Original filename
    pub name: String,
    /// Size in bytes
    pub size_bytes: u64,
    /// Upload time
    pub uploaded_at: DateTime<Utc>,
    /// Where the content is read from on every query
    #[serde(skip)]
    pub content_location: PathBuf,
}

/// A passage extracted from a document at query time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// ID of the document the chunk came from
    pub source_doc_id: String,
    /// Name of the document the chunk came from
    pub source_doc_name: String,
    /// Trimmed chunk text
    pub text: String,
}

impl Chunk {
    pub fn new(source_doc_id: impl Into<String>, source_doc_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source_doc_id: source_doc_id.into(),
            source_doc_name: source_doc_name.into(),
            text: text.into(),
        }
    }
}

/// A chunk with its relevance score for one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredChunk {
    pub chunk: Chunk,
    /// Number of distinct question terms found in the chunk
    pub score: u32,
}
