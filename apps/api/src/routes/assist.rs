//! Assist routes — the request surface for the four generation flows.
//!
//! Each flow has a request handler (runs the flow to completion and
//! returns the suggestion) and, where the flow is appliable, an apply
//! handler that writes the held result through the store. The full-resume
//! flow has no apply handler on purpose: its output is review-only.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assist::FlowStates;
use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct JobDescriptionRequest {
    pub job_description: String,
}

#[derive(Deserialize)]
pub struct SkillsFlowRequest {
    pub section_id: Uuid,
    pub job_description: String,
}

#[derive(Deserialize)]
pub struct ProjectFlowRequest {
    pub section_id: Uuid,
    pub entry_id: Uuid,
    pub job_description: String,
}

#[derive(Serialize)]
pub struct ObjectiveResponse {
    pub resume_objective: String,
}

#[derive(Serialize)]
pub struct SkillsResponse {
    pub suggested_skills: Vec<String>,
}

#[derive(Serialize)]
pub struct AppliedSkillsResponse {
    pub document: ResumeDocument,
    pub added: usize,
}

#[derive(Serialize)]
pub struct ProjectResponse {
    pub optimized_description: String,
}

#[derive(Serialize)]
pub struct FullResumeResponse {
    pub optimized_resume: String,
}

/// GET /api/v1/assist — current state of all four flows.
pub async fn handle_flow_states(State(state): State<AppState>) -> Json<FlowStates> {
    Json(state.assist.flow_states())
}

/// POST /api/v1/assist/reset — close the surface, discard held results.
pub async fn handle_reset(State(state): State<AppState>) -> StatusCode {
    state.assist.reset();
    StatusCode::NO_CONTENT
}

/// POST /api/v1/assist/objective
pub async fn handle_suggest_objective(
    State(state): State<AppState>,
    Json(req): Json<JobDescriptionRequest>,
) -> Result<Json<ObjectiveResponse>, AppError> {
    let resume_objective = state.assist.suggest_objective(&req.job_description).await?;
    Ok(Json(ObjectiveResponse { resume_objective }))
}

/// POST /api/v1/assist/objective/apply
pub async fn handle_apply_objective(
    State(state): State<AppState>,
) -> Result<Json<ResumeDocument>, AppError> {
    Ok(Json(state.assist.apply_objective()?))
}

/// POST /api/v1/assist/skills
pub async fn handle_suggest_skills(
    State(state): State<AppState>,
    Json(req): Json<SkillsFlowRequest>,
) -> Result<Json<SkillsResponse>, AppError> {
    let suggested_skills = state
        .assist
        .suggest_skills(req.section_id, &req.job_description)
        .await?;
    Ok(Json(SkillsResponse { suggested_skills }))
}

/// POST /api/v1/assist/skills/apply
pub async fn handle_apply_skills(
    State(state): State<AppState>,
) -> Result<Json<AppliedSkillsResponse>, AppError> {
    let (document, added) = state.assist.apply_skills()?;
    Ok(Json(AppliedSkillsResponse { document, added }))
}

/// POST /api/v1/assist/project
pub async fn handle_optimize_project(
    State(state): State<AppState>,
    Json(req): Json<ProjectFlowRequest>,
) -> Result<Json<ProjectResponse>, AppError> {
    let optimized_description = state
        .assist
        .optimize_project(req.section_id, req.entry_id, &req.job_description)
        .await?;
    Ok(Json(ProjectResponse {
        optimized_description,
    }))
}

/// POST /api/v1/assist/project/apply
pub async fn handle_apply_project(
    State(state): State<AppState>,
) -> Result<Json<ResumeDocument>, AppError> {
    Ok(Json(state.assist.apply_project_rewrite()?))
}

/// POST /api/v1/assist/resume — review-only; never auto-applied.
pub async fn handle_optimize_resume(
    State(state): State<AppState>,
    Json(req): Json<JobDescriptionRequest>,
) -> Result<Json<FullResumeResponse>, AppError> {
    let optimized_resume = state
        .assist
        .optimize_full_resume(&req.job_description)
        .await?;
    Ok(Json(FullResumeResponse { optimized_resume }))
}
