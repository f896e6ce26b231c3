//! Document Store — sole owner of the mutable `ResumeDocument`.
//!
//! Every operation takes the write lock for the whole transformation and
//! hands back the post-mutation snapshot by clone, so readers always see a
//! consistent document, never a torn write. The lock is never held across
//! an await; mutations do not suspend.
//!
//! Error policy: a mutation that references a missing id, or an entry
//! operation against a section of the wrong kind, degrades to a silent
//! no-op. The id may have been deleted out from under a stale caller, and
//! a kind mismatch is a caller bug rather than a recoverable condition.

use std::sync::RwLock;

use tracing::debug;
use uuid::Uuid;

use crate::models::resume::{
    ContactField, EducationEntry, EducationPatch, ExperienceEntry, ExperiencePatch, ProjectEntry,
    ProjectPatch, ResumeDocument, Section, SectionBody, SectionKind, SectionPatch, Skill,
    SkillPatch,
};

/// Direction for `move_section`. Up means earlier in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

pub struct DocumentStore {
    doc: RwLock<ResumeDocument>,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore {
    /// Store seeded with the default session document.
    pub fn new() -> Self {
        Self::with_document(ResumeDocument::seeded())
    }

    pub fn with_document(doc: ResumeDocument) -> Self {
        Self {
            doc: RwLock::new(doc),
        }
    }

    /// Current document by clone. Observers re-read after every mutation.
    pub fn snapshot(&self) -> ResumeDocument {
        self.doc.read().expect("document lock poisoned").clone()
    }

    /// Runs one atomic transformation under the write lock and returns the
    /// resulting snapshot.
    fn mutate<F>(&self, f: F) -> ResumeDocument
    where
        F: FnOnce(&mut ResumeDocument),
    {
        let mut doc = self.doc.write().expect("document lock poisoned");
        f(&mut doc);
        doc.clone()
    }

    /// Finds the section with the given id AND the expected kind, then
    /// applies `f` to its body. Missing id or kind mismatch is a no-op;
    /// the three entry families and the skill operations all share this
    /// policy.
    fn mutate_body<F>(&self, section_id: Uuid, kind: SectionKind, f: F) -> ResumeDocument
    where
        F: FnOnce(&mut SectionBody),
    {
        self.mutate(|doc| {
            match doc
                .sections
                .iter_mut()
                .find(|s| s.id == section_id && s.kind() == kind)
            {
                Some(section) => f(&mut section.body),
                None => debug!(%section_id, ?kind, "entry operation ignored: no matching section"),
            }
        })
    }

    // ── Contact ─────────────────────────────────────────────────────────

    pub fn update_contact(&self, field: ContactField, value: String) -> ResumeDocument {
        self.mutate(|doc| doc.contact.set(field, value))
    }

    // ── Sections ────────────────────────────────────────────────────────

    /// Instantiates the kind's template, assigns a fresh id and appends it.
    pub fn add_section(&self, kind: SectionKind) -> ResumeDocument {
        self.mutate(|doc| {
            let section = Section {
                id: Uuid::new_v4(),
                title: kind.default_title().to_string(),
                body: kind.template(),
            };
            debug!(id = %section.id, ?kind, "section added");
            doc.sections.push(section);
        })
    }

    /// Removes the section and all nested entries atomically. Idempotent.
    pub fn delete_section(&self, id: Uuid) -> ResumeDocument {
        self.mutate(|doc| doc.sections.retain(|s| s.id != id))
    }

    /// Shallow-merges the patch into the matching section. `content` only
    /// lands on objective/custom bodies; the kind never changes.
    pub fn update_section(&self, id: Uuid, patch: SectionPatch) -> ResumeDocument {
        self.mutate(|doc| {
            let Some(section) = doc.sections.iter_mut().find(|s| s.id == id) else {
                return;
            };
            if let Some(title) = patch.title {
                section.title = title;
            }
            if let Some(content) = patch.content {
                match &mut section.body {
                    SectionBody::Objective { content: c } | SectionBody::Custom { content: c } => {
                        *c = content;
                    }
                    _ => debug!(%id, "content patch ignored: section has no content field"),
                }
            }
        })
    }

    /// Swaps the section with its neighbor in the given direction. Moving
    /// the first section up or the last down is a no-op.
    pub fn move_section(&self, id: Uuid, direction: MoveDirection) -> ResumeDocument {
        self.mutate(|doc| {
            let Some(index) = doc.sections.iter().position(|s| s.id == id) else {
                return;
            };
            match direction {
                MoveDirection::Up if index > 0 => doc.sections.swap(index, index - 1),
                MoveDirection::Down if index + 1 < doc.sections.len() => {
                    doc.sections.swap(index, index + 1)
                }
                _ => {}
            }
        })
    }

    /// Wholesale replacement, the restore/import hook.
    pub fn replace_document(&self, new_doc: ResumeDocument) -> ResumeDocument {
        self.mutate(|doc| *doc = new_doc)
    }

    // ── Experience entries ──────────────────────────────────────────────

    pub fn add_experience_entry(&self, section_id: Uuid) -> ResumeDocument {
        self.mutate_body(section_id, SectionKind::Experience, |body| {
            if let SectionBody::Experience { entries } = body {
                entries.push(ExperienceEntry::blank());
            }
        })
    }

    pub fn update_experience_entry(
        &self,
        section_id: Uuid,
        entry_id: Uuid,
        patch: ExperiencePatch,
    ) -> ResumeDocument {
        self.mutate_body(section_id, SectionKind::Experience, |body| {
            if let SectionBody::Experience { entries } = body {
                if let Some(entry) = entries.iter_mut().find(|e| e.id == entry_id) {
                    patch.apply(entry);
                }
            }
        })
    }

    pub fn delete_experience_entry(&self, section_id: Uuid, entry_id: Uuid) -> ResumeDocument {
        self.mutate_body(section_id, SectionKind::Experience, |body| {
            if let SectionBody::Experience { entries } = body {
                entries.retain(|e| e.id != entry_id);
            }
        })
    }

    // ── Education entries ───────────────────────────────────────────────

    pub fn add_education_entry(&self, section_id: Uuid) -> ResumeDocument {
        self.mutate_body(section_id, SectionKind::Education, |body| {
            if let SectionBody::Education { entries } = body {
                entries.push(EducationEntry::blank());
            }
        })
    }

    pub fn update_education_entry(
        &self,
        section_id: Uuid,
        entry_id: Uuid,
        patch: EducationPatch,
    ) -> ResumeDocument {
        self.mutate_body(section_id, SectionKind::Education, |body| {
            if let SectionBody::Education { entries } = body {
                if let Some(entry) = entries.iter_mut().find(|e| e.id == entry_id) {
                    patch.apply(entry);
                }
            }
        })
    }

    pub fn delete_education_entry(&self, section_id: Uuid, entry_id: Uuid) -> ResumeDocument {
        self.mutate_body(section_id, SectionKind::Education, |body| {
            if let SectionBody::Education { entries } = body {
                entries.retain(|e| e.id != entry_id);
            }
        })
    }

    // ── Project entries ─────────────────────────────────────────────────

    pub fn add_project_entry(&self, section_id: Uuid) -> ResumeDocument {
        self.mutate_body(section_id, SectionKind::Projects, |body| {
            if let SectionBody::Projects { entries } = body {
                entries.push(ProjectEntry::blank());
            }
        })
    }

    pub fn update_project_entry(
        &self,
        section_id: Uuid,
        entry_id: Uuid,
        patch: ProjectPatch,
    ) -> ResumeDocument {
        self.mutate_body(section_id, SectionKind::Projects, |body| {
            if let SectionBody::Projects { entries } = body {
                if let Some(entry) = entries.iter_mut().find(|e| e.id == entry_id) {
                    patch.apply(entry);
                }
            }
        })
    }

    pub fn delete_project_entry(&self, section_id: Uuid, entry_id: Uuid) -> ResumeDocument {
        self.mutate_body(section_id, SectionKind::Projects, |body| {
            if let SectionBody::Projects { entries } = body {
                entries.retain(|e| e.id != entry_id);
            }
        })
    }

    // ── Skills ──────────────────────────────────────────────────────────

    pub fn add_skill(&self, section_id: Uuid, name: impl Into<String>) -> ResumeDocument {
        let skill = Skill::named(name);
        self.mutate_body(section_id, SectionKind::Skills, move |body| {
            if let SectionBody::Skills { skills } = body {
                skills.push(skill);
            }
        })
    }

    pub fn update_skill(&self, section_id: Uuid, skill_id: Uuid, patch: SkillPatch) -> ResumeDocument {
        self.mutate_body(section_id, SectionKind::Skills, |body| {
            if let SectionBody::Skills { skills } = body {
                if let Some(skill) = skills.iter_mut().find(|s| s.id == skill_id) {
                    if let Some(name) = patch.name {
                        skill.name = name;
                    }
                }
            }
        })
    }

    pub fn delete_skill(&self, section_id: Uuid, skill_id: Uuid) -> ResumeDocument {
        self.mutate_body(section_id, SectionKind::Skills, |body| {
            if let SectionBody::Skills { skills } = body {
                skills.retain(|s| s.id != skill_id);
            }
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn section_ids(doc: &ResumeDocument) -> Vec<Uuid> {
        doc.sections.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_add_section_appends_with_fresh_id() {
        let store = DocumentStore::new();
        let before = store.snapshot();
        let after = store.add_section(SectionKind::Projects);

        assert_eq!(after.sections.len(), before.sections.len() + 1);
        let added = after.sections.last().unwrap();
        assert_eq!(added.kind(), SectionKind::Projects);
        assert_eq!(added.title, "Projects");
        assert!(!before.sections.iter().any(|s| s.id == added.id));
    }

    #[test]
    fn test_add_then_delete_leaves_exactly_the_survivors() {
        let store = DocumentStore::with_document(ResumeDocument {
            contact: ResumeDocument::seeded().contact,
            sections: Vec::new(),
        });
        store.add_section(SectionKind::Custom);
        let doc = store.add_section(SectionKind::Custom);
        store.add_section(SectionKind::Custom);

        let middle = doc.sections.last().unwrap().id;
        let after = store.delete_section(middle);

        assert_eq!(after.sections.len(), 2);
        assert!(!after.sections.iter().any(|s| s.id == middle));
        // Insertion order of the survivors is preserved.
        let all = section_ids(&store.snapshot());
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_delete_section_is_idempotent() {
        let store = DocumentStore::new();
        let id = store.snapshot().sections[0].id;
        let once = store.delete_section(id);
        let twice = store.delete_section(id);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_move_up_then_down_restores_order_for_interior_section() {
        let store = DocumentStore::new();
        let original = section_ids(&store.snapshot());
        let second = original[1];

        store.move_section(second, MoveDirection::Up);
        let restored = store.move_section(second, MoveDirection::Down);
        assert_eq!(section_ids(&restored), original);
    }

    #[test]
    fn test_move_is_noop_at_boundaries() {
        let store = DocumentStore::new();
        let original = section_ids(&store.snapshot());

        let after_up = store.move_section(original[0], MoveDirection::Up);
        assert_eq!(section_ids(&after_up), original);

        let last = *original.last().unwrap();
        let after_down = store.move_section(last, MoveDirection::Down);
        assert_eq!(section_ids(&after_down), original);
    }

    #[test]
    fn test_move_unknown_id_is_noop() {
        let store = DocumentStore::new();
        let original = store.snapshot();
        let after = store.move_section(Uuid::new_v4(), MoveDirection::Up);
        assert_eq!(after, original);
    }

    // Scenario from the product: new projects section walks up past
    // education, experience and skills until it sits right after the
    // objective; deleting the objective then makes it first.
    #[test]
    fn test_projects_walks_up_to_second_place_then_first() {
        let store = DocumentStore::new();
        let doc = store.add_section(SectionKind::Projects);
        let projects = doc.sections.last().unwrap().id;

        store.move_section(projects, MoveDirection::Up);
        store.move_section(projects, MoveDirection::Up);
        let doc = store.move_section(projects, MoveDirection::Up);

        assert_eq!(doc.sections[1].id, projects);
        assert_eq!(doc.sections[0].kind(), SectionKind::Objective);

        let objective = doc.sections[0].id;
        let doc = store.delete_section(objective);
        assert_eq!(doc.sections[0].id, projects);
    }

    #[test]
    fn test_update_section_title_and_content() {
        let store = DocumentStore::new();
        let objective = store.snapshot().sections[0].id;

        let doc = store.update_section(
            objective,
            SectionPatch {
                title: Some("Summary".to_string()),
                content: Some("Build reliable systems.".to_string()),
            },
        );
        let section = doc.section(objective).unwrap();
        assert_eq!(section.title, "Summary");
        assert_eq!(
            section.body,
            SectionBody::Objective {
                content: "Build reliable systems.".to_string()
            }
        );
    }

    #[test]
    fn test_content_patch_never_changes_kind() {
        let store = DocumentStore::new();
        let experience = store.snapshot().sections[1].id;

        let before = store.snapshot();
        let after = store.update_section(
            experience,
            SectionPatch {
                title: None,
                content: Some("should be ignored".to_string()),
            },
        );
        assert_eq!(after, before);
    }

    #[test]
    fn test_update_section_unknown_id_is_noop() {
        let store = DocumentStore::new();
        let before = store.snapshot();
        let after = store.update_section(
            Uuid::new_v4(),
            SectionPatch {
                title: Some("ghost".to_string()),
                content: None,
            },
        );
        assert_eq!(after, before);
    }

    #[test]
    fn test_add_and_update_experience_entry() {
        let store = DocumentStore::new();
        let experience = store.snapshot().sections[1].id;

        let doc = store.add_experience_entry(experience);
        let entry_id = match &doc.section(experience).unwrap().body {
            SectionBody::Experience { entries } => {
                assert_eq!(entries.len(), 2);
                entries.last().unwrap().id
            }
            _ => panic!("expected experience body"),
        };

        let doc = store.update_experience_entry(
            experience,
            entry_id,
            ExperiencePatch {
                company: Some("Ferrous Systems".to_string()),
                role: Some("Engineer".to_string()),
                ..Default::default()
            },
        );
        match &doc.section(experience).unwrap().body {
            SectionBody::Experience { entries } => {
                let entry = entries.iter().find(|e| e.id == entry_id).unwrap();
                assert_eq!(entry.company, "Ferrous Systems");
                assert_eq!(entry.role, "Engineer");
                assert!(entry.description.is_empty());
            }
            _ => panic!("expected experience body"),
        }
    }

    #[test]
    fn test_update_entry_with_unknown_entry_id_is_noop() {
        let store = DocumentStore::new();
        let experience = store.snapshot().sections[1].id;
        let before = store.snapshot();

        let after = store.update_experience_entry(
            experience,
            Uuid::new_v4(),
            ExperiencePatch {
                company: Some("Nowhere".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(after, before);
    }

    #[test]
    fn test_entry_op_against_wrong_kind_is_noop() {
        let store = DocumentStore::new();
        let skills = store.snapshot().sections[3].id;
        let before = store.snapshot();

        let after = store.add_experience_entry(skills);
        assert_eq!(after, before);
    }

    #[test]
    fn test_delete_entry_removes_only_that_entry() {
        let store = DocumentStore::new();
        let education = store.snapshot().sections[2].id;
        store.add_education_entry(education);

        let doc = store.snapshot();
        let first = match &doc.section(education).unwrap().body {
            SectionBody::Education { entries } => entries[0].id,
            _ => panic!("expected education body"),
        };

        let doc = store.delete_education_entry(education, first);
        match &doc.section(education).unwrap().body {
            SectionBody::Education { entries } => {
                assert_eq!(entries.len(), 1);
                assert_ne!(entries[0].id, first);
            }
            _ => panic!("expected education body"),
        }
    }

    #[test]
    fn test_project_entry_lifecycle() {
        let store = DocumentStore::new();
        let doc = store.add_section(SectionKind::Projects);
        let projects = doc.sections.last().unwrap().id;

        let doc = store.add_project_entry(projects);
        let entry_id = match &doc.section(projects).unwrap().body {
            SectionBody::Projects { entries } => entries[0].id,
            _ => panic!("expected projects body"),
        };

        let doc = store.update_project_entry(
            projects,
            entry_id,
            ProjectPatch {
                name: Some("Crawler".to_string()),
                link: Some("https://example.com".to_string()),
                ..Default::default()
            },
        );
        match &doc.section(projects).unwrap().body {
            SectionBody::Projects { entries } => {
                assert_eq!(entries[0].name, "Crawler");
                assert_eq!(entries[0].link.as_deref(), Some("https://example.com"));
            }
            _ => panic!("expected projects body"),
        }

        let doc = store.delete_project_entry(projects, entry_id);
        match &doc.section(projects).unwrap().body {
            SectionBody::Projects { entries } => assert!(entries.is_empty()),
            _ => panic!("expected projects body"),
        }
    }

    #[test]
    fn test_skill_operations() {
        let store = DocumentStore::new();
        let skills = store.snapshot().sections[3].id;

        let doc = store.add_skill(skills, "Rust");
        let (count, rust_id) = match &doc.section(skills).unwrap().body {
            SectionBody::Skills { skills } => (skills.len(), skills.last().unwrap().id),
            _ => panic!("expected skills body"),
        };
        assert_eq!(count, 4);

        let doc = store.update_skill(
            skills,
            rust_id,
            SkillPatch {
                name: Some("Rust (async)".to_string()),
            },
        );
        match &doc.section(skills).unwrap().body {
            SectionBody::Skills { skills } => {
                assert_eq!(skills.last().unwrap().name, "Rust (async)");
            }
            _ => panic!("expected skills body"),
        }

        let doc = store.delete_skill(skills, rust_id);
        match &doc.section(skills).unwrap().body {
            SectionBody::Skills { skills } => assert_eq!(skills.len(), 3),
            _ => panic!("expected skills body"),
        }
    }

    #[test]
    fn test_add_skill_against_non_skills_section_is_noop() {
        let store = DocumentStore::new();
        let objective = store.snapshot().sections[0].id;
        let before = store.snapshot();
        let after = store.add_skill(objective, "Go");
        assert_eq!(after, before);
    }

    #[test]
    fn test_update_contact() {
        let store = DocumentStore::new();
        let doc = store.update_contact(ContactField::Phone, "555-0100".to_string());
        assert_eq!(doc.contact.phone, "555-0100");
        assert_eq!(doc.contact.name, "Your Name");
    }

    #[test]
    fn test_replace_document() {
        let store = DocumentStore::new();
        let empty = ResumeDocument {
            contact: store.snapshot().contact,
            sections: Vec::new(),
        };
        let doc = store.replace_document(empty.clone());
        assert_eq!(doc, empty);
        assert_eq!(store.snapshot(), empty);
    }

    #[test]
    fn test_snapshot_is_detached_from_store_state() {
        let store = DocumentStore::new();
        let snapshot = store.snapshot();
        store.delete_section(snapshot.sections[0].id);
        // The earlier snapshot still holds the deleted section.
        assert_eq!(snapshot.sections.len(), 4);
    }
}
