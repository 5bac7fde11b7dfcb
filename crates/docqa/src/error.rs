//! Error types for the Q&A service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the Q&A service
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Caller supplied an invalid request (empty question, bad session key, no file)
    #[error("{0}")]
    Validation(String),

    /// Generation credentials are not configured
    #[error("{0}")]
    ServiceUnavailable(String),

    /// Requested document does not exist in the session
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// External generation call failed or returned unusable content
    #[error("Generation error: {0}")]
    Generation(String),

    /// Document storage failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Unexpected fault
    #[error("{0}")]
    Internal(String),
}

impl Error {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Error::DocumentNotFound(_) => StatusCode::NOT_FOUND,
            Error::Generation(_) => StatusCode::BAD_GATEWAY,
            Error::Storage(_) | Error::Config(_) | Error::Io(_) | Error::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message shown to HTTP clients
    fn client_message(&self) -> String {
        match self {
            Error::Validation(msg) | Error::ServiceUnavailable(msg) => msg.clone(),
            Error::DocumentNotFound(_) => "Document not found".to_string(),
            other => format!("Internal processing error: {}", other),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let body = Json(serde_json::json!({ "error": self.client_message() }));
        (status, body).into_response()
    }
}
