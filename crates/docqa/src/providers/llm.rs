//! LLM provider trait for generating answers

use async_trait::async_trait;

use crate::error::Result;

/// Trait for text generation from a complete prompt
///
/// Implementations:
/// - `GeminiClient`: Google Generative Language REST API
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send one prompt and return the generated text
    ///
    /// Any failure is reported as `Error::Generation`.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Get provider name for logging
    fn name(&self) -> &str;

    /// Label reported to clients for answers from this provider
    fn model(&self) -> &str;
}
