//! Question endpoint

use axum::{extract::State, Json};
use std::time::Instant;

use crate::error::{Error, Result};
use crate::server::{session::Session, state::AppState};
use crate::types::{AskRequest, AskResponse};

/// POST /api/ask - Answer a question from the session's documents
pub async fn ask(
    State(state): State<AppState>,
    Session(session): Session,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>> {
    let start = Instant::now();

    if request.question.trim().is_empty() {
        return Err(Error::Validation("Question is required".to_string()));
    }

    let generator = state.answer_generator();
    if !generator.generation_configured() {
        return Err(Error::ServiceUnavailable(
            "AI service not configured. Please add GEMINI_API_KEY to .env file.".to_string(),
        ));
    }

    tracing::info!("Question for session {}: \"{}\"", session, request.question);

    let answer = generator.answer(&session, &request.question).await?;

    tracing::info!(
        "Answered in {}ms with {} sources (model: {})",
        start.elapsed().as_millis(),
        answer.sources.len(),
        answer.model_label
    );

    Ok(Json(AskResponse::from(answer)))
}
