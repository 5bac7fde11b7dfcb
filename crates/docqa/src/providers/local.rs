//! Local document store: one flat directory per session
//!
//! Files are stored as `{id}_{original name}` so the directory listing alone
//! describes every document; there is no separate registry to keep in sync.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::types::{Document, SessionKey};

use super::document_store::DocumentStoreProvider;

/// Length of a simple-format UUID
const ID_LEN: usize = 32;

/// Filesystem document store rooted at the upload directory
pub struct LocalDocumentStore {
    root: PathBuf,
}

impl LocalDocumentStore {
    /// Create a store rooted at `root`; directories are created lazily
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn session_dir(&self, session: &SessionKey) -> PathBuf {
        self.root.join(session.as_str())
    }

    /// Reduce a client-supplied filename to its last path component
    fn sanitize_filename(filename: &str) -> String {
        let name = filename
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default()
            .trim();

        if name.is_empty() || name == "." || name == ".." {
            "document.txt".to_string()
        } else {
            name.to_string()
        }
    }

    /// Split a stored file name into `(id, original name)`
    fn parse_stored_name(stored: &str) -> Option<(&str, &str)> {
        let (id, name) = stored.split_once('_')?;
        let valid_id = id.len() == ID_LEN && id.chars().all(|c| c.is_ascii_hexdigit());
        (valid_id && !name.is_empty()).then_some((id, name))
    }

    async fn document_from_path(path: PathBuf) -> Option<Document> {
        let stored = path.file_name()?.to_str()?;
        let (id, name) = Self::parse_stored_name(stored)?;
        let (id, name) = (id.to_string(), name.to_string());

        let metadata = match tokio::fs::metadata(&path).await {
            Ok(m) if m.is_file() => m,
            Ok(_) => return None,
            Err(e) => {
                // Deleted between listing and stat
                tracing::debug!("Skipping {}: {}", path.display(), e);
                return None;
            }
        };

        let uploaded_at = metadata
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now());

        Some(Document {
            id,
            name,
            size_bytes: metadata.len(),
            uploaded_at,
            content_location: path,
        })
    }
}

#[async_trait]
impl DocumentStoreProvider for LocalDocumentStore {
    async fn store_document(
        &self,
        session: &SessionKey,
        filename: &str,
        data: &[u8],
    ) -> Result<Document> {
        let dir = self.session_dir(session);
        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            Error::Storage(format!("Failed to create {}: {}", dir.display(), e))
        })?;

        let id = Uuid::new_v4().simple().to_string();
        let name = Self::sanitize_filename(filename);
        let path = dir.join(format!("{}_{}", id, name));

        tokio::fs::write(&path, data).await.map_err(|e| {
            Error::Storage(format!("Failed to write {}: {}", path.display(), e))
        })?;

        tracing::info!(
            "Stored {} ({} bytes) for session {}",
            name,
            data.len(),
            session
        );

        Self::document_from_path(path)
            .await
            .ok_or_else(|| Error::Storage(format!("Stored document {} vanished", id)))
    }

    async fn list_documents(&self, session: &SessionKey) -> Result<Vec<Document>> {
        let dir = self.session_dir(session);
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::Storage(format!(
                    "Failed to list {}: {}",
                    dir.display(),
                    e
                )))
            }
        };

        let mut documents = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if let Some(doc) = Self::document_from_path(entry.path()).await {
                documents.push(doc);
            }
        }

        documents.sort_by(|a, b| {
            a.uploaded_at
                .cmp(&b.uploaded_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(documents)
    }

    async fn read_content(&self, document: &Document) -> String {
        match tokio::fs::read(&document.content_location).await {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                tracing::warn!(
                    "Error reading file {}: {}",
                    document.content_location.display(),
                    e
                );
                String::new()
            }
        }
    }

    async fn delete_document(&self, session: &SessionKey, doc_id: &str) -> Result<()> {
        let document = self
            .list_documents(session)
            .await?
            .into_iter()
            .find(|d| d.id == doc_id)
            .ok_or_else(|| Error::DocumentNotFound(doc_id.to_string()))?;

        match tokio::fs::remove_file(&document.content_location).await {
            Ok(()) => {}
            // Already removed by a concurrent delete
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(Error::Storage(format!(
                    "Failed to delete {}: {}",
                    document.content_location.display(),
                    e
                )))
            }
        }

        tracing::info!("Deleted {} ({}) from session {}", document.name, doc_id, session);
        Ok(())
    }

    async fn health_check(&self) -> Result<bool> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(true)
    }

    fn name(&self) -> &str {
        "local"
    }
}
