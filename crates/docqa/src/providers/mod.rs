//! Provider abstractions for document storage and text generation
//!
//! The answering pipeline only talks to these traits, so the flat-file store
//! and the Gemini client can be swapped for test doubles or other backends.

pub mod document_store;
pub mod gemini;
pub mod llm;
pub mod local;

pub use document_store::DocumentStoreProvider;
pub use gemini::GeminiClient;
pub use llm::LlmProvider;
pub use local::LocalDocumentStore;
