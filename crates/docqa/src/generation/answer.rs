//! Question answering: retrieval, generation, and fallback

use std::sync::Arc;

use crate::config::RetrievalConfig;
use crate::error::Result;
use crate::providers::{DocumentStoreProvider, LlmProvider};
use crate::retrieval::Retriever;
use crate::types::{Answer, AnswerBlock, Citation, Query, ScoredChunk, SessionKey};

use super::fallback::{self, ExtractiveFallback, FALLBACK_MODEL_LABEL};
use super::prompt::PromptBuilder;

/// Answers questions against the documents of a session
///
/// Generation failures never surface as errors: they resolve into the
/// extractive fallback. Only document listing failures are returned.
pub struct AnswerGenerator {
    store: Arc<dyn DocumentStoreProvider>,
    llm: Option<Arc<dyn LlmProvider>>,
    retriever: Retriever,
    fallback: ExtractiveFallback,
    min_term_chars: usize,
    snippet_chars: usize,
}

impl AnswerGenerator {
    /// Create a generator; `llm` is `None` when no generation credential is configured
    pub fn new(
        store: Arc<dyn DocumentStoreProvider>,
        llm: Option<Arc<dyn LlmProvider>>,
        config: &RetrievalConfig,
    ) -> Self {
        Self {
            store,
            llm,
            retriever: Retriever::new(config),
            fallback: ExtractiveFallback::new(config.fallback_excerpts, config.excerpt_chars),
            min_term_chars: config.min_term_chars,
            snippet_chars: config.snippet_chars,
        }
    }

    /// Whether generation can be attempted; callers check this before `answer`
    pub fn generation_configured(&self) -> bool {
        self.llm.is_some()
    }

    /// Answer a non-empty question for a session
    pub async fn answer(&self, session: &SessionKey, question: &str) -> Result<Answer> {
        let documents = self.store.list_documents(session).await?;
        if documents.is_empty() {
            tracing::info!("Session {} has no documents", session);
            return Ok(Self::canned(fallback::no_documents_blocks()));
        }

        let query = Query::new(question, self.min_term_chars);
        let ranked = self
            .retriever
            .retrieve(self.store.as_ref(), &documents, &query)
            .await;

        if ranked.is_empty() {
            tracing::info!(
                "No chunk matched {} terms across {} documents",
                query.terms.len(),
                documents.len()
            );
            return Ok(Self::canned(fallback::no_match_blocks()));
        }

        let sources = self.citations(&ranked);
        let context = PromptBuilder::build_context(&ranked);

        let answer = match self.generate(&query.question, &context).await {
            Some((text, model_label)) => Answer {
                blocks: vec![AnswerBlock::Paragraph { text }],
                sources,
                model_label,
            },
            None => {
                tracing::info!("Using extractive fallback over {} chunks", ranked.len());
                Answer {
                    blocks: self.fallback.blocks(&ranked),
                    sources,
                    model_label: FALLBACK_MODEL_LABEL.to_string(),
                }
            }
        };

        Ok(answer)
    }

    /// One generation attempt; `None` on any failure or empty output
    async fn generate(&self, question: &str, context: &str) -> Option<(String, String)> {
        let llm = match &self.llm {
            Some(llm) => llm,
            None => {
                tracing::warn!("Generation requested without a configured provider");
                return None;
            }
        };

        let prompt = PromptBuilder::build_rag_prompt(question, context);
        tracing::info!("Calling {} ({})", llm.name(), llm.model());

        match llm.generate(&prompt).await {
            Ok(text) if !text.trim().is_empty() => {
                tracing::info!("Generation succeeded with {}", llm.model());
                Some((text, llm.model().to_string()))
            }
            Ok(_) => {
                tracing::warn!("{} returned an empty answer", llm.name());
                None
            }
            Err(e) => {
                tracing::warn!("{} failed: {}", llm.name(), e);
                None
            }
        }
    }

    fn citations(&self, ranked: &[ScoredChunk]) -> Vec<Citation> {
        ranked
            .iter()
            .map(|scored| Citation::from_scored(scored, self.snippet_chars))
            .collect()
    }

    fn canned(blocks: Vec<AnswerBlock>) -> Answer {
        Answer {
            blocks,
            sources: Vec::new(),
            model_label: FALLBACK_MODEL_LABEL.to_string(),
        }
    }
}
