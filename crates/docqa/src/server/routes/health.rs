//! Health endpoint

use axum::{extract::State, Json};
use chrono::Utc;

use crate::server::state::AppState;
use crate::types::response::{HealthResponse, ServiceStatus};

/// GET /api/health - Report storage and generation status
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let storage_ok = match state.document_store().health_check().await {
        Ok(ok) => ok,
        Err(e) => {
            tracing::warn!("Document store health check failed: {}", e);
            false
        }
    };

    let generation = if state.answer_generator().generation_configured() {
        "connected"
    } else {
        "disconnected"
    };

    Json(HealthResponse {
        status: if storage_ok { "healthy" } else { "degraded" }.to_string(),
        timestamp: Utc::now(),
        services: ServiceStatus {
            storage: if storage_ok { "operational" } else { "unavailable" }.to_string(),
            generation: generation.to_string(),
        },
    })
}
