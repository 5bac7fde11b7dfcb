//! Application state for the HTTP server

use parking_lot::RwLock;
use std::sync::Arc;

use crate::config::DocQaConfig;
use crate::error::Result;
use crate::generation::AnswerGenerator;
use crate::providers::{DocumentStoreProvider, GeminiClient, LlmProvider, LocalDocumentStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: DocQaConfig,
    /// Session-scoped document storage
    document_store: Arc<dyn DocumentStoreProvider>,
    /// Question answering pipeline
    answer_generator: AnswerGenerator,
    /// Ready state
    ready: RwLock<bool>,
}

impl AppState {
    /// Create state with the local document store and, if configured, the Gemini client
    pub fn new(config: DocQaConfig) -> Result<Self> {
        let document_store: Arc<dyn DocumentStoreProvider> =
            Arc::new(LocalDocumentStore::new(config.storage.upload_dir.clone()));
        tracing::info!(
            "Document store initialized at {}",
            config.storage.upload_dir.display()
        );

        let llm: Option<Arc<dyn LlmProvider>> = match GeminiClient::from_config(&config.generation)? {
            Some(client) => {
                tracing::info!("Gemini API: CONFIGURED (model {})", config.generation.model);
                Some(Arc::new(client))
            }
            None => {
                tracing::warn!("Gemini API: NOT CONFIGURED, /api/ask will return 503");
                None
            }
        };

        Ok(Self::with_providers(config, document_store, llm))
    }

    /// Create state from explicit providers
    pub fn with_providers(
        config: DocQaConfig,
        document_store: Arc<dyn DocumentStoreProvider>,
        llm: Option<Arc<dyn LlmProvider>>,
    ) -> Self {
        let answer_generator =
            AnswerGenerator::new(Arc::clone(&document_store), llm, &config.retrieval);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                document_store,
                answer_generator,
                ready: RwLock::new(true),
            }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &DocQaConfig {
        &self.inner.config
    }

    /// Get document store
    pub fn document_store(&self) -> &Arc<dyn DocumentStoreProvider> {
        &self.inner.document_store
    }

    /// Get answer generator
    pub fn answer_generator(&self) -> &AnswerGenerator {
        &self.inner.answer_generator
    }

    /// Check if the server is ready
    pub fn is_ready(&self) -> bool {
        *self.inner.ready.read()
    }

    /// Set ready state
    pub fn set_ready(&self, ready: bool) {
        *self.inner.ready.write() = ready;
    }
}
