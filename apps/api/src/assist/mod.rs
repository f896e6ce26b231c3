//! Generation-Assist Coordinator — bridges the document store and the
//! generation capability.
//!
//! Four independent flows (objective, skills, project description, full
//! resume), each with its own state cell: idle → requesting →
//! succeeded/failed, re-entrant. A flow reads a document snapshot at
//! request-build time and writes back only its own target fields on an
//! explicit apply, so concurrent flows cannot corrupt each other.
//! Overlapping writes to the same section are last-write-wins.
//!
//! Each cell carries an epoch counter. Reset (or a newer request) bumps
//! the epoch, and a completion holding a stale epoch is dropped, so a
//! late response has no visible effect once the surface was reset.

pub mod prompts;
pub mod provider;

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::llm_client::LlmError;
use crate::models::resume::{
    ProjectPatch, ResumeDocument, SectionBody, SectionKind, SectionPatch,
};
use crate::projection::project;
use crate::store::DocumentStore;

use self::provider::{
    FullResumeRequest, ObjectiveRequest, ProjectRequest, SkillsRequest, SuggestionProvider,
};

#[derive(Debug, Error)]
pub enum AssistError {
    /// Required input missing or target absent. Reported before any
    /// network call; the flow stays idle.
    #[error("{0}")]
    Precondition(String),

    /// The generation capability failed; mirrored in the flow's `Failed`
    /// state.
    #[error("generation request failed: {0}")]
    Service(#[from] LlmError),
}

// ────────────────────────────────────────────────────────────────────────────
// Flow state cells
// ────────────────────────────────────────────────────────────────────────────

/// Externally visible state of one flow. A succeeded result is held until
/// applied or reset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FlowState<T> {
    Idle,
    Requesting,
    Succeeded { result: T },
    Failed { reason: String },
}

struct Slot<T> {
    epoch: u64,
    state: FlowState<T>,
}

/// One flow's state plus its stale-completion fence. The mutex is never
/// held across an await.
struct FlowCell<T> {
    slot: Mutex<Slot<T>>,
}

impl<T: Clone> FlowCell<T> {
    fn new() -> Self {
        Self {
            slot: Mutex::new(Slot {
                epoch: 0,
                state: FlowState::Idle,
            }),
        }
    }

    /// Marks the flow requesting and returns the epoch the eventual
    /// completion must present.
    fn begin(&self) -> u64 {
        let mut slot = self.slot.lock().expect("flow cell poisoned");
        slot.epoch += 1;
        slot.state = FlowState::Requesting;
        slot.epoch
    }

    /// Records a success unless the cell moved on since `begin`.
    fn succeed(&self, epoch: u64, result: T) -> bool {
        let mut slot = self.slot.lock().expect("flow cell poisoned");
        if slot.epoch != epoch {
            return false;
        }
        slot.state = FlowState::Succeeded { result };
        true
    }

    fn fail(&self, epoch: u64, reason: String) -> bool {
        let mut slot = self.slot.lock().expect("flow cell poisoned");
        if slot.epoch != epoch {
            return false;
        }
        slot.state = FlowState::Failed { reason };
        true
    }

    fn state(&self) -> FlowState<T> {
        self.slot.lock().expect("flow cell poisoned").state.clone()
    }

    /// Held result, if the flow succeeded. Does not clear it.
    fn peek_success(&self) -> Option<T> {
        match &self.slot.lock().expect("flow cell poisoned").state {
            FlowState::Succeeded { result } => Some(result.clone()),
            _ => None,
        }
    }

    /// Clears a held success (after apply).
    fn clear(&self) {
        self.reset();
    }

    /// Back to idle; any in-flight completion becomes stale.
    fn reset(&self) {
        let mut slot = self.slot.lock().expect("flow cell poisoned");
        slot.epoch += 1;
        slot.state = FlowState::Idle;
    }
}

/// Held skill suggestions, pinned to the section they were computed for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeldSkills {
    pub section_id: Uuid,
    pub names: Vec<String>,
}

/// Held project rewrite, pinned to its target entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeldProjectRewrite {
    pub section_id: Uuid,
    pub entry_id: Uuid,
    pub description: String,
}

/// Snapshot of all four flow states, for the assist surface.
#[derive(Debug, Clone, Serialize)]
pub struct FlowStates {
    pub objective: FlowState<String>,
    pub skills: FlowState<HeldSkills>,
    pub project: FlowState<HeldProjectRewrite>,
    pub full_resume: FlowState<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Coordinator
// ────────────────────────────────────────────────────────────────────────────

pub struct AssistCoordinator {
    store: Arc<DocumentStore>,
    provider: Arc<dyn SuggestionProvider>,
    objective: FlowCell<String>,
    skills: FlowCell<HeldSkills>,
    project: FlowCell<HeldProjectRewrite>,
    full_resume: FlowCell<String>,
}

impl AssistCoordinator {
    pub fn new(store: Arc<DocumentStore>, provider: Arc<dyn SuggestionProvider>) -> Self {
        Self {
            store,
            provider,
            objective: FlowCell::new(),
            skills: FlowCell::new(),
            project: FlowCell::new(),
            full_resume: FlowCell::new(),
        }
    }

    pub fn flow_states(&self) -> FlowStates {
        FlowStates {
            objective: self.objective.state(),
            skills: self.skills.state(),
            project: self.project.state(),
            full_resume: self.full_resume.state(),
        }
    }

    /// Closes the assist surface: all held results are discarded and any
    /// in-flight completion is fenced out.
    pub fn reset(&self) {
        self.objective.reset();
        self.skills.reset();
        self.project.reset();
        self.full_resume.reset();
    }

    // ── Flow 1: suggest objective ───────────────────────────────────────

    pub async fn suggest_objective(&self, job_description: &str) -> Result<String, AssistError> {
        let jd = non_empty(job_description)?;
        let doc = self.store.snapshot();
        let request = ObjectiveRequest {
            job_description: jd.to_string(),
            experience_details: experience_details(&doc),
        };

        let epoch = self.objective.begin();
        match self.provider.suggest_objective(request).await {
            Ok(suggestion) => {
                self.objective
                    .succeed(epoch, suggestion.resume_objective.clone());
                Ok(suggestion.resume_objective)
            }
            Err(e) => {
                warn!("objective suggestion failed: {e}");
                self.objective.fail(epoch, e.to_string());
                Err(e.into())
            }
        }
    }

    /// Writes the held suggestion into the objective section's content.
    /// The suggestion stays held when no objective section exists, so the
    /// user can add one and retry.
    pub fn apply_objective(&self) -> Result<ResumeDocument, AssistError> {
        let suggestion = self
            .objective
            .peek_success()
            .ok_or_else(|| AssistError::Precondition("no suggested objective to apply".into()))?;

        let doc = self.store.snapshot();
        let objective = doc.first_of_kind(SectionKind::Objective).ok_or_else(|| {
            AssistError::Precondition("add an objective section to your resume first".into())
        })?;

        let updated = self.store.update_section(
            objective.id,
            SectionPatch {
                title: None,
                content: Some(suggestion),
            },
        );
        self.objective.clear();
        info!("applied suggested objective");
        Ok(updated)
    }

    // ── Flow 2: suggest skills ──────────────────────────────────────────

    /// Suggests skills for one skills section. The returned list is
    /// post-processed: suggestions already present are dropped
    /// case-insensitively and repeats are deduplicated.
    pub async fn suggest_skills(
        &self,
        section_id: Uuid,
        job_description: &str,
    ) -> Result<Vec<String>, AssistError> {
        let jd = non_empty(job_description)?;
        let current = skills_of(&self.store.snapshot(), section_id)?;

        let request = SkillsRequest {
            job_description: jd.to_string(),
            current_skills: current.clone(),
        };

        let epoch = self.skills.begin();
        match self.provider.suggest_skills(request).await {
            Ok(suggestion) => {
                let net_new = filter_new_skills(&suggestion.suggested_skills, &current);
                self.skills.succeed(
                    epoch,
                    HeldSkills {
                        section_id,
                        names: net_new.clone(),
                    },
                );
                Ok(net_new)
            }
            Err(e) => {
                warn!("skill suggestion failed: {e}");
                self.skills.fail(epoch, e.to_string());
                Err(e.into())
            }
        }
    }

    /// Adds the held suggestions to their section, re-filtering against
    /// the section's current names since time may have passed. Returns
    /// how many skills were actually added.
    pub fn apply_skills(&self) -> Result<(ResumeDocument, usize), AssistError> {
        let held = self
            .skills
            .peek_success()
            .ok_or_else(|| AssistError::Precondition("no suggested skills to apply".into()))?;

        let current = skills_of(&self.store.snapshot(), held.section_id)?;
        let net_new = filter_new_skills(&held.names, &current);

        let mut updated = self.store.snapshot();
        for name in &net_new {
            updated = self.store.add_skill(held.section_id, name.clone());
        }
        self.skills.clear();
        info!(added = net_new.len(), "applied suggested skills");
        Ok((updated, net_new.len()))
    }

    // ── Flow 3: optimize one project description ────────────────────────

    pub async fn optimize_project(
        &self,
        section_id: Uuid,
        entry_id: Uuid,
        job_description: &str,
    ) -> Result<String, AssistError> {
        let jd = non_empty(job_description)?;
        let doc = self.store.snapshot();
        let request = match doc.section(section_id).map(|s| &s.body) {
            Some(SectionBody::Projects { entries }) => entries
                .iter()
                .find(|e| e.id == entry_id)
                .map(|entry| ProjectRequest {
                    job_description: jd.to_string(),
                    project_name: entry.name.clone(),
                    current_description: entry.description.clone(),
                    technologies_used: entry.technologies.clone(),
                })
                .ok_or_else(|| AssistError::Precondition("project entry not found".into()))?,
            _ => {
                return Err(AssistError::Precondition(
                    "projects section not found".into(),
                ))
            }
        };

        let epoch = self.project.begin();
        match self.provider.optimize_project_description(request).await {
            Ok(suggestion) => {
                self.project.succeed(
                    epoch,
                    HeldProjectRewrite {
                        section_id,
                        entry_id,
                        description: suggestion.optimized_description.clone(),
                    },
                );
                Ok(suggestion.optimized_description)
            }
            Err(e) => {
                warn!("project optimization failed: {e}");
                self.project.fail(epoch, e.to_string());
                Err(e.into())
            }
        }
    }

    /// Writes the held rewrite into its project entry, on explicit accept
    /// only.
    pub fn apply_project_rewrite(&self) -> Result<ResumeDocument, AssistError> {
        let held = self
            .project
            .peek_success()
            .ok_or_else(|| AssistError::Precondition("no project rewrite to apply".into()))?;

        let updated = self.store.update_project_entry(
            held.section_id,
            held.entry_id,
            ProjectPatch {
                description: Some(held.description),
                ..Default::default()
            },
        );
        self.project.clear();
        info!("applied project rewrite");
        Ok(updated)
    }

    // ── Flow 4: optimize full resume ────────────────────────────────────

    /// Sends the plain-text projection of the whole document. The result
    /// is held for manual review and never written back; a structural
    /// merge would risk corrupting section typing.
    pub async fn optimize_full_resume(&self, job_description: &str) -> Result<String, AssistError> {
        let jd = non_empty(job_description)?;
        let request = FullResumeRequest {
            resume: project(&self.store.snapshot()),
            job_description: jd.to_string(),
        };

        let epoch = self.full_resume.begin();
        match self.provider.optimize_full_resume(request).await {
            Ok(text) => {
                self.full_resume.succeed(epoch, text.clone());
                Ok(text)
            }
            Err(e) => {
                warn!("full-resume optimization failed: {e}");
                self.full_resume.fail(epoch, e.to_string());
                Err(e.into())
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn non_empty(job_description: &str) -> Result<&str, AssistError> {
    let jd = job_description.trim();
    if jd.is_empty() {
        return Err(AssistError::Precondition(
            "a job description is required".into(),
        ));
    }
    Ok(jd)
}

/// Skill names of the given section, or a precondition error when the id
/// is missing or points at a different kind.
fn skills_of(doc: &ResumeDocument, section_id: Uuid) -> Result<Vec<String>, AssistError> {
    match doc.section(section_id).map(|s| &s.body) {
        Some(SectionBody::Skills { skills }) => {
            Ok(skills.iter().map(|s| s.name.clone()).collect())
        }
        _ => Err(AssistError::Precondition("skills section not found".into())),
    }
}

/// Experience summary for the objective prompt: one line per experience
/// entry, then a `Projects:` block. Placeholder when the resume has
/// neither.
fn experience_details(doc: &ResumeDocument) -> String {
    let mut details = String::new();

    if let Some(SectionBody::Experience { entries }) = doc
        .first_of_kind(SectionKind::Experience)
        .map(|s| &s.body)
    {
        details.push_str(
            &entries
                .iter()
                .map(|e| format!("{} at {}: {}", e.role, e.company, e.description))
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }

    if let Some(SectionBody::Projects { entries }) =
        doc.first_of_kind(SectionKind::Projects).map(|s| &s.body)
    {
        if !entries.is_empty() {
            details.push_str("\nProjects:\n");
            details.push_str(
                &entries
                    .iter()
                    .map(|e| format!("{}: {}", e.name, e.description))
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }
    }

    if details.trim().is_empty() {
        "No specific experience provided.".to_string()
    } else {
        details
    }
}

/// Drops suggestions already present among `current` (case-insensitive)
/// and deduplicates repeats, preserving first-seen order.
fn filter_new_skills(suggested: &[String], current: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = current.iter().map(|s| s.to_lowercase()).collect();
    suggested
        .iter()
        .filter(|s| seen.insert(s.to_lowercase()))
        .cloned()
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
