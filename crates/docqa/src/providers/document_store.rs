//! Document store provider trait for session-scoped uploads

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Document, SessionKey};

/// Trait for session-scoped document storage
///
/// Implementations:
/// - `LocalDocumentStore`: one directory per session on the local filesystem
#[async_trait]
pub trait DocumentStoreProvider: Send + Sync {
    /// Store an uploaded file and return its metadata
    async fn store_document(
        &self,
        session: &SessionKey,
        filename: &str,
        data: &[u8],
    ) -> Result<Document>;

    /// List the documents of a session in a stable order
    async fn list_documents(&self, session: &SessionKey) -> Result<Vec<Document>>;

    /// Read document text
    ///
    /// Never fails: unreadable content is logged and returned as an empty string.
    async fn read_content(&self, document: &Document) -> String;

    /// Delete a document from a session
    async fn delete_document(&self, session: &SessionKey, doc_id: &str) -> Result<()>;

    /// Check if the provider is healthy
    async fn health_check(&self) -> Result<bool>;

    /// Get provider name for logging
    fn name(&self) -> &str;
}
