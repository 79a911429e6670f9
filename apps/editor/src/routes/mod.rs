pub mod health;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::editor::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resume", get(handlers::handle_get_resume))
        .route(
            "/api/v1/resume/checklist",
            get(handlers::handle_get_checklist),
        )
        .route(
            "/api/v1/resume/personal",
            patch(handlers::handle_update_personal),
        )
        // Experiences
        .route(
            "/api/v1/resume/experiences",
            post(handlers::handle_add_experience),
        )
        .route(
            "/api/v1/resume/experiences/:id",
            patch(handlers::handle_update_experience).delete(handlers::handle_remove_experience),
        )
        .route(
            "/api/v1/resume/experiences/:id/bullets",
            post(handlers::handle_add_bullet),
        )
        .route(
            "/api/v1/resume/experiences/:id/bullets/:index",
            put(handlers::handle_update_bullet).delete(handlers::handle_remove_bullet),
        )
        .route(
            "/api/v1/resume/experiences/:id/suggestions",
            get(handlers::handle_experience_suggestions),
        )
        // Educations
        .route(
            "/api/v1/resume/educations",
            post(handlers::handle_add_education),
        )
        .route(
            "/api/v1/resume/educations/:id",
            patch(handlers::handle_update_education).delete(handlers::handle_remove_education),
        )
        // Projects
        .route(
            "/api/v1/resume/projects",
            post(handlers::handle_add_project),
        )
        .route(
            "/api/v1/resume/projects/:id",
            patch(handlers::handle_update_project).delete(handlers::handle_remove_project),
        )
        .route(
            "/api/v1/resume/projects/:id/highlights",
            post(handlers::handle_add_highlight),
        )
        .route(
            "/api/v1/resume/projects/:id/highlights/:index",
            put(handlers::handle_update_highlight).delete(handlers::handle_remove_highlight),
        )
        // Skills
        .route("/api/v1/resume/skills", post(handlers::handle_add_skill))
        .route(
            "/api/v1/resume/skills/:id",
            patch(handlers::handle_update_skill).delete(handlers::handle_remove_skill),
        )
        // Output
        .route("/api/v1/suggestions", get(handlers::handle_suggest))
        .route("/api/v1/resume/export", get(handlers::handle_export))
        .route("/api/v1/resume/preview", get(handlers::handle_preview))
        .route("/api/v1/resume/print", get(handlers::handle_print))
        .with_state(state)
}
