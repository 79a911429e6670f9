//! Axum route handlers for the editor API.
//!
//! Every mutation takes the document write lock for one synchronous edit.
//! Reads recompute the checklist from scratch; nothing is cached.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::editor::checklist::{checklist_report, ChecklistReport};
use crate::editor::document::{
    add_entry, find_entry, find_entry_mut, push_line, remove_entry_keep_one, remove_line,
    set_line, update_entry,
};
use crate::editor::export::{export_document, EXPORT_FILE_NAME};
use crate::editor::preview::{render_preview, render_print_html};
use crate::editor::suggestions::{matched_families, suggest_bullets, suggestions_for_experience};
use crate::errors::AppError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::models::resume::{
    Education, EducationPatch, Experience, ExperiencePatch, PersonalInfo, PersonalPatch, Project,
    ProjectPatch, ResumeDocument, SkillBlock, SkillPatch,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct EditorView {
    pub document: ResumeDocument,
    pub checklist: ChecklistReport,
}

#[derive(Debug, Deserialize)]
pub struct LineRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RawSuggestionsResponse {
    /// Rule families that fired; empty when only the generic bullets apply.
    pub matched: Vec<&'static str>,
    pub suggestions: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Document & checklist
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<EditorView> {
    let doc = state.document.read().await;
    Json(EditorView {
        checklist: checklist_report(&doc),
        document: (*doc).clone(),
    })
}

/// GET /api/v1/resume/checklist
pub async fn handle_get_checklist(State(state): State<AppState>) -> Json<ChecklistReport> {
    let doc = state.document.read().await;
    Json(checklist_report(&doc))
}

/// PATCH /api/v1/resume/personal
pub async fn handle_update_personal(
    State(state): State<AppState>,
    ApiJson(patch): ApiJson<PersonalPatch>,
) -> Json<PersonalInfo> {
    let mut doc = state.document.write().await;
    doc.personal.merge(patch);
    debug!("Updated personal details");
    Json(doc.personal.clone())
}

// ────────────────────────────────────────────────────────────────────────────
// Experiences
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/experiences
pub async fn handle_add_experience(
    State(state): State<AppState>,
) -> (StatusCode, Json<Experience>) {
    let mut doc = state.document.write().await;
    let created = add_entry(&mut doc.experiences).clone();
    debug!("Added experience {}", created.id);
    (StatusCode::CREATED, Json(created))
}

/// PATCH /api/v1/resume/experiences/:id
pub async fn handle_update_experience(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(patch): ApiJson<ExperiencePatch>,
) -> Result<Json<Experience>, AppError> {
    let mut doc = state.document.write().await;
    let updated = update_entry(&mut doc.experiences, id, patch)?.clone();
    debug!("Updated experience {id}");
    Ok(Json(updated))
}

/// DELETE /api/v1/resume/experiences/:id
pub async fn handle_remove_experience(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    let mut doc = state.document.write().await;
    remove_entry_keep_one(&mut doc.experiences, id)?;
    debug!("Removed experience {id}");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/resume/experiences/:id/bullets
///
/// Also used to apply a suggestion: the client posts the suggested text.
pub async fn handle_add_bullet(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<LineRequest>,
) -> Result<(StatusCode, Json<Experience>), AppError> {
    let mut doc = state.document.write().await;
    let entry = find_entry_mut(&mut doc.experiences, id)?;
    push_line(&mut entry.bullets, req.text);
    debug!("Added bullet to experience {id} ({} total)", entry.bullets.len());
    Ok((StatusCode::CREATED, Json(entry.clone())))
}

/// PUT /api/v1/resume/experiences/:id/bullets/:index
pub async fn handle_update_bullet(
    State(state): State<AppState>,
    ApiPath((id, index)): ApiPath<(Uuid, usize)>,
    ApiJson(req): ApiJson<LineRequest>,
) -> Result<Json<Experience>, AppError> {
    let mut doc = state.document.write().await;
    let entry = find_entry_mut(&mut doc.experiences, id)?;
    set_line(&mut entry.bullets, index, req.text)?;
    debug!("Updated bullet {index} of experience {id}");
    Ok(Json(entry.clone()))
}

/// DELETE /api/v1/resume/experiences/:id/bullets/:index
pub async fn handle_remove_bullet(
    State(state): State<AppState>,
    ApiPath((id, index)): ApiPath<(Uuid, usize)>,
) -> Result<Json<Experience>, AppError> {
    let mut doc = state.document.write().await;
    let entry = find_entry_mut(&mut doc.experiences, id)?;
    remove_line(&mut entry.bullets, index)?;
    debug!("Removed bullet {index} of experience {id}");
    Ok(Json(entry.clone()))
}

/// GET /api/v1/resume/experiences/:id/suggestions
///
/// Suggestions not yet on the entry, truncated to `limit` (default from config).
pub async fn handle_experience_suggestions(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiQuery(query): ApiQuery<LimitQuery>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    let limit = query.limit.unwrap_or(state.config.suggestion_limit);
    if limit == 0 {
        return Err(AppError::Validation("limit must be at least 1".to_string()));
    }
    let doc = state.document.read().await;
    let entry = find_entry(&doc.experiences, id)?;
    Ok(Json(SuggestionsResponse {
        suggestions: suggestions_for_experience(entry, &doc.personal.summary, limit),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Educations
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/educations
pub async fn handle_add_education(
    State(state): State<AppState>,
) -> (StatusCode, Json<Education>) {
    let mut doc = state.document.write().await;
    let created = add_entry(&mut doc.educations).clone();
    debug!("Added education {}", created.id);
    (StatusCode::CREATED, Json(created))
}

/// PATCH /api/v1/resume/educations/:id
pub async fn handle_update_education(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(patch): ApiJson<EducationPatch>,
) -> Result<Json<Education>, AppError> {
    let mut doc = state.document.write().await;
    let updated = update_entry(&mut doc.educations, id, patch)?.clone();
    debug!("Updated education {id}");
    Ok(Json(updated))
}

/// DELETE /api/v1/resume/educations/:id
pub async fn handle_remove_education(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    let mut doc = state.document.write().await;
    remove_entry_keep_one(&mut doc.educations, id)?;
    debug!("Removed education {id}");
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/projects
pub async fn handle_add_project(State(state): State<AppState>) -> (StatusCode, Json<Project>) {
    let mut doc = state.document.write().await;
    let created = add_entry(&mut doc.projects).clone();
    debug!("Added project {}", created.id);
    (StatusCode::CREATED, Json(created))
}

/// PATCH /api/v1/resume/projects/:id
pub async fn handle_update_project(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(patch): ApiJson<ProjectPatch>,
) -> Result<Json<Project>, AppError> {
    let mut doc = state.document.write().await;
    let updated = update_entry(&mut doc.projects, id, patch)?.clone();
    debug!("Updated project {id}");
    Ok(Json(updated))
}

/// DELETE /api/v1/resume/projects/:id
pub async fn handle_remove_project(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    let mut doc = state.document.write().await;
    remove_entry_keep_one(&mut doc.projects, id)?;
    debug!("Removed project {id}");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/resume/projects/:id/highlights
pub async fn handle_add_highlight(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<LineRequest>,
) -> Result<(StatusCode, Json<Project>), AppError> {
    let mut doc = state.document.write().await;
    let entry = find_entry_mut(&mut doc.projects, id)?;
    push_line(&mut entry.highlights, req.text);
    debug!("Added highlight to project {id}");
    Ok((StatusCode::CREATED, Json(entry.clone())))
}

/// PUT /api/v1/resume/projects/:id/highlights/:index
pub async fn handle_update_highlight(
    State(state): State<AppState>,
    ApiPath((id, index)): ApiPath<(Uuid, usize)>,
    ApiJson(req): ApiJson<LineRequest>,
) -> Result<Json<Project>, AppError> {
    let mut doc = state.document.write().await;
    let entry = find_entry_mut(&mut doc.projects, id)?;
    set_line(&mut entry.highlights, index, req.text)?;
    debug!("Updated highlight {index} of project {id}");
    Ok(Json(entry.clone()))
}

/// DELETE /api/v1/resume/projects/:id/highlights/:index
pub async fn handle_remove_highlight(
    State(state): State<AppState>,
    ApiPath((id, index)): ApiPath<(Uuid, usize)>,
) -> Result<Json<Project>, AppError> {
    let mut doc = state.document.write().await;
    let entry = find_entry_mut(&mut doc.projects, id)?;
    remove_line(&mut entry.highlights, index)?;
    debug!("Removed highlight {index} of project {id}");
    Ok(Json(entry.clone()))
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/skills
pub async fn handle_add_skill(State(state): State<AppState>) -> (StatusCode, Json<SkillBlock>) {
    let mut doc = state.document.write().await;
    let created = add_entry(&mut doc.skills).clone();
    debug!("Added skill block {}", created.id);
    (StatusCode::CREATED, Json(created))
}

/// PATCH /api/v1/resume/skills/:id
pub async fn handle_update_skill(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(patch): ApiJson<SkillPatch>,
) -> Result<Json<SkillBlock>, AppError> {
    let mut doc = state.document.write().await;
    let updated = update_entry(&mut doc.skills, id, patch)?.clone();
    debug!("Updated skill block {id}");
    Ok(Json(updated))
}

/// DELETE /api/v1/resume/skills/:id
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    let mut doc = state.document.write().await;
    remove_entry_keep_one(&mut doc.skills, id)?;
    debug!("Removed skill block {id}");
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Suggestions, export, preview
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/suggestions?role=&summary=
///
/// Raw engine output: no filtering, no truncation.
pub async fn handle_suggest(
    ApiQuery(query): ApiQuery<SuggestionQuery>,
) -> Json<RawSuggestionsResponse> {
    Json(RawSuggestionsResponse {
        matched: matched_families(&query.role, &query.summary),
        suggestions: suggest_bullets(&query.role, &query.summary),
    })
}

/// GET /api/v1/resume/export
///
/// Offers the document as a JSON file download.
pub async fn handle_export(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let body = {
        let doc = state.document.read().await;
        export_document(&doc)?
    };
    debug!("Exported document ({} bytes)", body.len());
    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        body,
    ))
}

/// GET /api/v1/resume/preview
///
/// The resume as Markdown, followed by the checklist panel.
pub async fn handle_preview(State(state): State<AppState>) -> impl IntoResponse {
    let doc = state.document.read().await;
    (
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        render_preview(&doc, &checklist_report(&doc)),
    )
}

/// GET /api/v1/resume/print
///
/// The page the front-end hands to the browser's print dialog.
pub async fn handle_print(State(state): State<AppState>) -> Html<String> {
    let doc = state.document.read().await;
    Html(render_print_html(&doc))
}
