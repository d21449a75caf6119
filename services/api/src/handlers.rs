//! Axum Handlers for the REST API
//!
//! This module exposes the lesson engine's operations over HTTP. It uses
//! `utoipa` doc comments to generate OpenAPI documentation.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use lesson_core::{LessonResult, UsageStats, ValidationReport, validator};
use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    models::{ErrorResponse, GenerateLessonPayload},
    state::AppState,
};

pub enum ApiError {
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                warn!(%message, "Rejected request");
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { message })).into_response()
            }
        }
    }
}

/// Generate a lesson for a session.
#[utoipa::path(
    post,
    path = "/lessons",
    request_body = GenerateLessonPayload,
    responses(
        (status = 201, description = "Lesson generated", body = LessonResult),
        (status = 400, description = "Subject missing", body = ErrorResponse)
    )
)]
pub async fn generate_lesson(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GenerateLessonPayload>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.subject.trim().is_empty() {
        return Err(ApiError::BadRequest("subject is required".to_string()));
    }

    let config = payload.into_config(state.config.default_learning_style);
    let lesson = state.engine.lock().await.generate_lesson(&config);

    Ok((StatusCode::CREATED, Json(lesson)))
}

/// Validate a previously generated lesson.
#[utoipa::path(
    post,
    path = "/lessons/validate",
    request_body = LessonResult,
    responses(
        (status = 200, description = "Validation report", body = ValidationReport)
    )
)]
pub async fn validate_lesson(Json(lesson): Json<LessonResult>) -> Json<ValidationReport> {
    // Validation is pure, so it does not wait on the engine lock.
    Json(validator::validate(&lesson))
}

/// Forget the content a session has been served.
#[utoipa::path(
    delete,
    path = "/sessions/{id}/history",
    responses(
        (status = 204, description = "History cleared")
    ),
    params(
        ("id" = String, Path, description = "Session ID")
    )
)]
pub async fn clear_session_history(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> StatusCode {
    state.engine.lock().await.clear_session_history(&id);
    info!(session_id = %id, "Cleared session history via API");
    StatusCode::NO_CONTENT
}

/// Report content usage for every tracked session.
#[utoipa::path(
    get,
    path = "/debug/usage",
    responses(
        (status = 200, description = "Usage statistics", body = UsageStats)
    )
)]
pub async fn usage_stats(State(state): State<Arc<AppState>>) -> Json<UsageStats> {
    Json(state.engine.lock().await.usage_stats())
}
