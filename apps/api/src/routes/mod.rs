pub mod assist;
pub mod health;
pub mod resume;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Document API
        .route(
            "/api/v1/resume",
            get(resume::handle_get_resume).put(resume::handle_replace_resume),
        )
        .route("/api/v1/resume/text", get(resume::handle_get_resume_text))
        .route("/api/v1/resume/contact", patch(resume::handle_update_contact))
        .route("/api/v1/resume/sections", post(resume::handle_add_section))
        .route(
            "/api/v1/resume/sections/:id",
            patch(resume::handle_update_section).delete(resume::handle_delete_section),
        )
        .route(
            "/api/v1/resume/sections/:id/move",
            post(resume::handle_move_section),
        )
        .route(
            "/api/v1/resume/sections/:id/experience",
            post(resume::handle_add_experience_entry),
        )
        .route(
            "/api/v1/resume/sections/:id/experience/:entry_id",
            patch(resume::handle_update_experience_entry)
                .delete(resume::handle_delete_experience_entry),
        )
        .route(
            "/api/v1/resume/sections/:id/education",
            post(resume::handle_add_education_entry),
        )
        .route(
            "/api/v1/resume/sections/:id/education/:entry_id",
            patch(resume::handle_update_education_entry)
                .delete(resume::handle_delete_education_entry),
        )
        .route(
            "/api/v1/resume/sections/:id/projects",
            post(resume::handle_add_project_entry),
        )
        .route(
            "/api/v1/resume/sections/:id/projects/:entry_id",
            patch(resume::handle_update_project_entry).delete(resume::handle_delete_project_entry),
        )
        .route(
            "/api/v1/resume/sections/:id/skills",
            post(resume::handle_add_skill),
        )
        .route(
            "/api/v1/resume/sections/:id/skills/:skill_id",
            patch(resume::handle_update_skill).delete(resume::handle_delete_skill),
        )
        // Assist API
        .route("/api/v1/assist", get(assist::handle_flow_states))
        .route("/api/v1/assist/reset", post(assist::handle_reset))
        .route(
            "/api/v1/assist/objective",
            post(assist::handle_suggest_objective),
        )
        .route(
            "/api/v1/assist/objective/apply",
            post(assist::handle_apply_objective),
        )
        .route("/api/v1/assist/skills", post(assist::handle_suggest_skills))
        .route(
            "/api/v1/assist/skills/apply",
            post(assist::handle_apply_skills),
        )
        .route(
            "/api/v1/assist/project",
            post(assist::handle_optimize_project),
        )
        .route(
            "/api/v1/assist/project/apply",
            post(assist::handle_apply_project),
        )
        .route("/api/v1/assist/resume", post(assist::handle_optimize_resume))
        .with_state(state)
}
