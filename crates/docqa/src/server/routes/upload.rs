//! Document upload endpoint

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};

use crate::error::{Error, Result};
use crate::server::{session::Session, state::AppState};
use crate::types::response::UploadResponse;

/// Multipart field holding the file
const FILE_FIELD: &str = "file";

/// POST /api/upload - Store one uploaded file in the session
pub async fn upload_document(
    State(state): State<AppState>,
    Session(session): Session,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::Validation(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        // A plain form value named `file` is not an upload
        let filename = match field.file_name() {
            Some(name) => name.to_string(),
            None => continue,
        };

        let data = field
            .bytes()
            .await
            .map_err(|e| Error::Validation(format!("Failed to read file: {}", e)))?;

        tracing::info!("Upload: {} ({} bytes) for session {}", filename, data.len(), session);

        let document = state
            .document_store()
            .store_document(&session, &filename, &data)
            .await?;

        return Ok((
            StatusCode::CREATED,
            Json(UploadResponse {
                message: "File uploaded successfully".to_string(),
                document,
            }),
        ));
    }

    Err(Error::Validation("No file uploaded".to_string()))
}
