//! Suggestion provider — the seam between the assist flows and the
//! generation capability.
//!
//! The coordinator holds an `Arc<dyn SuggestionProvider>`; the production
//! implementation goes through `LlmClient`, tests swap in a mock. The
//! four calls are single-shot, stateless between calls, and unreliable
//! by contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::assist::prompts::{
    FULL_RESUME_PROMPT_TEMPLATE, FULL_RESUME_SYSTEM, OBJECTIVE_PROMPT_TEMPLATE, OBJECTIVE_SYSTEM,
    PROJECT_PROMPT_TEMPLATE, PROJECT_SYSTEM, SKILLS_PROMPT_TEMPLATE, SKILLS_SYSTEM,
};
use crate::llm_client::{LlmClient, LlmError};

// ────────────────────────────────────────────────────────────────────────────
// Request / response payloads
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ObjectiveRequest {
    pub job_description: String,
    /// Concatenated experience and project lines, or a placeholder when
    /// the resume has neither.
    pub experience_details: String,
}

/// JSON shape the objective prompt instructs the model to return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectiveSuggestion {
    pub resume_objective: String,
}

#[derive(Debug, Clone)]
pub struct SkillsRequest {
    pub job_description: String,
    pub current_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsSuggestion {
    pub suggested_skills: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ProjectRequest {
    pub job_description: String,
    pub project_name: String,
    pub current_description: String,
    pub technologies_used: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSuggestion {
    pub optimized_description: String,
}

#[derive(Debug, Clone)]
pub struct FullResumeRequest {
    /// Plain-text projection of the whole document.
    pub resume: String,
    pub job_description: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Provider trait
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    async fn suggest_objective(
        &self,
        request: ObjectiveRequest,
    ) -> Result<ObjectiveSuggestion, LlmError>;

    async fn suggest_skills(&self, request: SkillsRequest) -> Result<SkillsSuggestion, LlmError>;

    async fn optimize_project_description(
        &self,
        request: ProjectRequest,
    ) -> Result<ProjectSuggestion, LlmError>;

    /// Returns the rewritten resume as free text. Never applied
    /// automatically; surfaced for manual review only.
    async fn optimize_full_resume(&self, request: FullResumeRequest) -> Result<String, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LLM-backed implementation
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmSuggestionProvider {
    llm: LlmClient,
}

impl LlmSuggestionProvider {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl SuggestionProvider for LlmSuggestionProvider {
    async fn suggest_objective(
        &self,
        request: ObjectiveRequest,
    ) -> Result<ObjectiveSuggestion, LlmError> {
        let prompt = OBJECTIVE_PROMPT_TEMPLATE
            .replace("{experience_details}", &request.experience_details)
            .replace("{job_description}", &request.job_description);
        self.llm.call_json(&prompt, OBJECTIVE_SYSTEM).await
    }

    async fn suggest_skills(&self, request: SkillsRequest) -> Result<SkillsSuggestion, LlmError> {
        let current = if request.current_skills.is_empty() {
            "The candidate has not provided a list of current skills.".to_string()
        } else {
            format!(
                "The candidate already has the following skills:\n{}",
                request
                    .current_skills
                    .iter()
                    .map(|s| format!("- {s}"))
                    .collect::<Vec<_>>()
                    .join("\n")
            )
        };
        let prompt = SKILLS_PROMPT_TEMPLATE
            .replace("{current_skills}", &current)
            .replace("{job_description}", &request.job_description);
        self.llm.call_json(&prompt, SKILLS_SYSTEM).await
    }

    async fn optimize_project_description(
        &self,
        request: ProjectRequest,
    ) -> Result<ProjectSuggestion, LlmError> {
        let technologies = if request.technologies_used.is_empty() {
            "(not specified)".to_string()
        } else {
            request.technologies_used.clone()
        };
        let prompt = PROJECT_PROMPT_TEMPLATE
            .replace("{project_name}", &request.project_name)
            .replace("{technologies_used}", &technologies)
            .replace("{current_description}", &request.current_description)
            .replace("{job_description}", &request.job_description);
        self.llm.call_json(&prompt, PROJECT_SYSTEM).await
    }

    async fn optimize_full_resume(&self, request: FullResumeRequest) -> Result<String, LlmError> {
        let prompt = FULL_RESUME_PROMPT_TEMPLATE
            .replace("{resume}", &request.resume)
            .replace("{job_description}", &request.job_description);
        self.llm.call_text(&prompt, FULL_RESUME_SYSTEM).await
    }
}
