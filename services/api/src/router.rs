//! Axum Router Configuration
//!
//! This module defines the complete HTTP routing for the application,
//! including the REST API and OpenAPI documentation.

use crate::{
    handlers,
    models::{ErrorResponse, GenerateLessonPayload},
    state::AppState,
};

use axum::{
    Router,
    routing::{delete, get, post},
};
use lesson_core::{
    GeneratedActivity, LearningStyle, LessonMetadata, LessonResult, Subject, UsageStats,
    ValidationReport,
    content::{
        ApplicationContent, ContentDeliveryContent, CreativeExplorationContent,
        InteractiveGameContent, IntroductionContent, PhaseContent, PhaseDetail, SummaryContent,
    },
    curriculum::{CurriculumAlignment, GradeBand},
    phase::Phase,
    style::LearningStyleAdaptation,
    uniqueness::SessionUsage,
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::generate_lesson,
        handlers::validate_lesson,
        handlers::clear_session_history,
        handlers::usage_stats,
    ),
    components(
        schemas(
            GenerateLessonPayload, ErrorResponse, LessonResult, LessonMetadata, GeneratedActivity,
            Phase, Subject, LearningStyle, LearningStyleAdaptation, GradeBand, CurriculumAlignment,
            PhaseContent, PhaseDetail, IntroductionContent, ContentDeliveryContent,
            InteractiveGameContent, ApplicationContent, CreativeExplorationContent, SummaryContent,
            ValidationReport, UsageStats, SessionUsage
        )
    ),
    tags(
        (name = "Lesson API", description = "Lesson generation, validation and session history")
    )
)]
pub struct ApiDoc;

/// Creates the main Axum router for the application.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .route("/lessons", post(handlers::generate_lesson))
        .route("/lessons/validate", post(handlers::validate_lesson))
        .route(
            "/sessions/{id}/history",
            delete(handlers::clear_session_history),
        )
        .route("/debug/usage", get(handlers::usage_stats))
        // Apply the state ONLY to this group of routes.
        .with_state(app_state);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_router)
}
