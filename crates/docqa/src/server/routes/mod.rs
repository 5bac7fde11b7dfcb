//! API routes for the Q&A server

pub mod ask;
pub mod documents;
pub mod health;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        // Document management
        .route("/documents", get(documents::list_documents))
        .route("/documents/:id", delete(documents::delete_document))
        // Upload - with its own body limit
        .route(
            "/upload",
            post(upload::upload_document).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        // Question answering
        .route("/ask", post(ask::ask))
        // Info
        .route("/info", get(info))
}

/// API info endpoint
async fn info() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "name": "docqa",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Question answering over uploaded text documents with source citations",
        "endpoints": {
            "GET /api/health": "Service health",
            "POST /api/upload": "Upload a document (multipart field `file`)",
            "GET /api/documents": "List documents in the session",
            "DELETE /api/documents/:id": "Delete a document",
            "POST /api/ask": "Ask a question about the session's documents",
        },
        "session_header": crate::server::session::SESSION_HEADER,
    }))
}
