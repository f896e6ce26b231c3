//! Document routes — the editor/preview boundary.
//!
//! Editors mutate through these handlers; previews re-read the snapshot
//! after every mutation. Every mutation handler returns the post-mutation
//! document, and a mutation referencing a missing or mismatched id
//! returns the unchanged document rather than an error (the id may have
//! been deleted by another editor surface moments earlier).

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::models::resume::{
    ContactField, EducationPatch, ExperiencePatch, ProjectPatch, ResumeDocument, SectionKind,
    SectionPatch, SkillPatch,
};
use crate::projection::project;
use crate::state::AppState;
use crate::store::MoveDirection;

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeDocument> {
    Json(state.store.snapshot())
}

/// GET /api/v1/resume/text — the plain-text projection.
pub async fn handle_get_resume_text(State(state): State<AppState>) -> String {
    project(&state.store.snapshot())
}

/// PUT /api/v1/resume — wholesale replacement (restore/import hook).
pub async fn handle_replace_resume(
    State(state): State<AppState>,
    Json(doc): Json<ResumeDocument>,
) -> Json<ResumeDocument> {
    Json(state.store.replace_document(doc))
}

#[derive(Deserialize)]
pub struct ContactUpdate {
    pub field: ContactField,
    pub value: String,
}

/// PATCH /api/v1/resume/contact
pub async fn handle_update_contact(
    State(state): State<AppState>,
    Json(req): Json<ContactUpdate>,
) -> Json<ResumeDocument> {
    Json(state.store.update_contact(req.field, req.value))
}

#[derive(Deserialize)]
pub struct AddSectionRequest {
    #[serde(rename = "type")]
    pub kind: SectionKind,
}

/// POST /api/v1/resume/sections
pub async fn handle_add_section(
    State(state): State<AppState>,
    Json(req): Json<AddSectionRequest>,
) -> Json<ResumeDocument> {
    Json(state.store.add_section(req.kind))
}

/// DELETE /api/v1/resume/sections/:id
pub async fn handle_delete_section(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Json<ResumeDocument> {
    Json(state.store.delete_section(id))
}

/// PATCH /api/v1/resume/sections/:id — title and, for objective/custom
/// sections, content.
pub async fn handle_update_section(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<SectionPatch>,
) -> Json<ResumeDocument> {
    Json(state.store.update_section(id, patch))
}

#[derive(Deserialize)]
pub struct MoveRequest {
    pub direction: MoveDirection,
}

/// POST /api/v1/resume/sections/:id/move
pub async fn handle_move_section(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<MoveRequest>,
) -> Json<ResumeDocument> {
    Json(state.store.move_section(id, req.direction))
}

// ── Experience entries ──────────────────────────────────────────────────

/// POST /api/v1/resume/sections/:id/experience
pub async fn handle_add_experience_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Json<ResumeDocument> {
    Json(state.store.add_experience_entry(id))
}

/// PATCH /api/v1/resume/sections/:id/experience/:entry_id
pub async fn handle_update_experience_entry(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
    Json(patch): Json<ExperiencePatch>,
) -> Json<ResumeDocument> {
    Json(state.store.update_experience_entry(id, entry_id, patch))
}

/// DELETE /api/v1/resume/sections/:id/experience/:entry_id
pub async fn handle_delete_experience_entry(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
) -> Json<ResumeDocument> {
    Json(state.store.delete_experience_entry(id, entry_id))
}

// ── Education entries ───────────────────────────────────────────────────

/// POST /api/v1/resume/sections/:id/education
pub async fn handle_add_education_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Json<ResumeDocument> {
    Json(state.store.add_education_entry(id))
}

/// PATCH /api/v1/resume/sections/:id/education/:entry_id
pub async fn handle_update_education_entry(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
    Json(patch): Json<EducationPatch>,
) -> Json<ResumeDocument> {
    Json(state.store.update_education_entry(id, entry_id, patch))
}

/// DELETE /api/v1/resume/sections/:id/education/:entry_id
pub async fn handle_delete_education_entry(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
) -> Json<ResumeDocument> {
    Json(state.store.delete_education_entry(id, entry_id))
}

// ── Project entries ─────────────────────────────────────────────────────

/// POST /api/v1/resume/sections/:id/projects
pub async fn handle_add_project_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Json<ResumeDocument> {
    Json(state.store.add_project_entry(id))
}

/// PATCH /api/v1/resume/sections/:id/projects/:entry_id
pub async fn handle_update_project_entry(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
    Json(patch): Json<ProjectPatch>,
) -> Json<ResumeDocument> {
    Json(state.store.update_project_entry(id, entry_id, patch))
}

/// DELETE /api/v1/resume/sections/:id/projects/:entry_id
pub async fn handle_delete_project_entry(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
) -> Json<ResumeDocument> {
    Json(state.store.delete_project_entry(id, entry_id))
}

// ── Skills ──────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct AddSkillRequest {
    #[serde(default)]
    pub name: String,
}

/// POST /api/v1/resume/sections/:id/skills
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AddSkillRequest>,
) -> Json<ResumeDocument> {
    Json(state.store.add_skill(id, req.name))
}

/// PATCH /api/v1/resume/sections/:id/skills/:skill_id
pub async fn handle_update_skill(
    State(state): State<AppState>,
    Path((id, skill_id)): Path<(Uuid, Uuid)>,
    Json(patch): Json<SkillPatch>,
) -> Json<ResumeDocument> {
    Json(state.store.update_skill(id, skill_id, patch))
}

/// DELETE /api/v1/resume/sections/:id/skills/:skill_id
pub async fn handle_delete_skill(
    State(state): State<AppState>,
    Path((id, skill_id)): Path<(Uuid, Uuid)>,
) -> Json<ResumeDocument> {
    Json(state.store.delete_skill(id, skill_id))
}
