//! Prompt templates for grounded generation

use crate::types::ScoredChunk;

/// Phrase the model must use when the context does not hold the answer
pub const NOT_FOUND_PHRASE: &str = "I couldn't find the answer in the provided documents.";

/// Prompt builder for document questions
pub struct PromptBuilder;

impl PromptBuilder {
    /// Render ranked chunks as numbered, attributed sources
    ///
    /// Chunk text is copied verbatim.
    pub fn build_context(ranked: &[ScoredChunk]) -> String {
        ranked
            .iter()
            .enumerate()
            .map(|(i, scored)| {
                format!(
                    "Source {} ({}):\n{}",
                    i + 1,
                    scored.chunk.source_doc_name,
                    scored.chunk.text
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Build the full prompt restricting the model to the supplied context
    pub fn build_rag_prompt(question: &str, context: &str) -> String {
        format!(
            r#"You are a helpful AI assistant. Answer the user's question based ONLY on the provided context snippets.
If the answer is not in the context, say "{not_found}"
Do not make up information.

Context:
{context}

Question: {question}

Answer:"#,
            not_found = NOT_FOUND_PHRASE,
            context = context,
            question = question
        )
    }
}
