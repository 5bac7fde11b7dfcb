//! Keyword retrieval over session documents
//!
//! Documents are chunked fresh on every question, each chunk is scored by
//! term overlap with the question, and the best chunks are kept.

pub mod chunker;
pub mod ranker;
pub mod scorer;

pub use chunker::Chunker;
pub use ranker::rank;
pub use scorer::score;

use crate::config::RetrievalConfig;
use crate::providers::DocumentStoreProvider;
use crate::types::{Document, Query, ScoredChunk};

/// Chunk, score and rank pipeline
#[derive(Debug, Clone)]
pub struct Retriever {
    chunker: Chunker,
    top_k: usize,
}

impl Retriever {
    pub fn new(config: &RetrievalConfig) -> Self {
        Self {
            chunker: Chunker::new(config.min_chunk_chars),
            top_k: config.top_k,
        }
    }

    /// Rank the chunks of `documents` against the query, in document order
    ///
    /// Unreadable documents contribute no chunks.
    pub async fn retrieve(
        &self,
        store: &dyn DocumentStoreProvider,
        documents: &[Document],
        query: &Query,
    ) -> Vec<ScoredChunk> {
        let mut contents = Vec::with_capacity(documents.len());
        for document in documents {
            contents.push(store.read_content(document).await);
        }

        let pairs: Vec<(&Document, &str)> = documents
            .iter()
            .zip(contents.iter().map(String::as_str))
            .collect();
        self.rank_contents(&pairs, query)
    }

    /// Rank already-loaded document contents
    pub fn rank_contents(&self, contents: &[(&Document, &str)], query: &Query) -> Vec<ScoredChunk> {
        let chunks: Vec<_> = contents
            .iter()
            .flat_map(|(doc, text)| self.chunker.chunk(text, &doc.id, &doc.name))
            .collect();
        let total = chunks.len();

        let ranked = rank(scorer::score_all(chunks, &query.terms), self.top_k);
        tracing::debug!(
            "Retrieved {} of {} chunks from {} documents for {} terms",
            ranked.len(),
            total,
            contents.len(),
            query.terms.len()
        );
        ranked
    }
}

impl Default for Retriever {
    fn default() -> Self {
        Self::new(&RetrievalConfig::default())
    }
}
