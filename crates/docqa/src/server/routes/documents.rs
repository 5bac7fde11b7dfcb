//! Document listing and deletion

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::Result;
use crate::server::{session::Session, state::AppState};
use crate::types::{response::MessageResponse, Document};

/// GET /api/documents - List the session's documents
pub async fn list_documents(
    State(state): State<AppState>,
    Session(session): Session,
) -> Result<Json<Vec<Document>>> {
    let documents = state.document_store().list_documents(&session).await?;
    Ok(Json(documents))
}

/// DELETE /api/documents/:id - Delete one of the session's documents
pub async fn delete_document(
    State(state): State<AppState>,
    Session(session): Session,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    state.document_store().delete_document(&session, &id).await?;
    Ok(Json(MessageResponse::new("Document deleted successfully")))
}
