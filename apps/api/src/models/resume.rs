//! Resume document model — the six section variants, their nested entry
//! types, and the default templates used when a section is created.
//!
//! Templates never assign ids; identifier assignment belongs to the
//! document store.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Discriminant for the six section variants. Fixed for the lifetime of a
/// section — retyping requires delete + recreate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Objective,
    Experience,
    Education,
    Skills,
    Projects,
    Custom,
}

impl SectionKind {
    /// Display label a freshly created section starts with. The title is
    /// user-editable afterwards and may diverge from the kind.
    pub fn default_title(self) -> &'static str {
        match self {
            SectionKind::Objective => "Objective",
            SectionKind::Experience => "Experience",
            SectionKind::Education => "Education",
            SectionKind::Skills => "Skills",
            SectionKind::Projects => "Projects",
            SectionKind::Custom => "Custom Section",
        }
    }

    /// Empty payload of the right shape for this kind.
    pub fn template(self) -> SectionBody {
        match self {
            SectionKind::Objective => SectionBody::Objective {
                content: String::new(),
            },
            SectionKind::Experience => SectionBody::Experience {
                entries: Vec::new(),
            },
            SectionKind::Education => SectionBody::Education {
                entries: Vec::new(),
            },
            SectionKind::Skills => SectionBody::Skills { skills: Vec::new() },
            SectionKind::Projects => SectionBody::Projects {
                entries: Vec::new(),
            },
            SectionKind::Custom => SectionBody::Custom {
                content: String::new(),
            },
        }
    }
}

/// Contact block. All fields are free-form and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
}

/// Selector for a single contact field, used by the contact patch route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Linkedin,
    Github,
    Portfolio,
}

impl Contact {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Linkedin => self.linkedin = value,
            ContactField::Github => self.github = value,
            ContactField::Portfolio => self.portfolio = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: Uuid,
    pub company: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    /// Markdown bullets allowed; interpreted by the external renderer.
    pub description: String,
}

impl ExperienceEntry {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            company: String::new(),
            role: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub graduation_date: String,
    pub description: String,
}

impl EducationEntry {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            institution: String::new(),
            degree: String::new(),
            graduation_date: String::new(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Comma-separated list, free-form.
    pub technologies: String,
    pub link: Option<String>,
}

impl ProjectEntry {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            description: String::new(),
            technologies: String::new(),
            link: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
}

impl Skill {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// Variant payload of a section. The serde tag keeps the JSON shape the
/// editor expects: `type` alongside `content` / `entries` / `skills`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SectionBody {
    Objective { content: String },
    Experience { entries: Vec<ExperienceEntry> },
    Education { entries: Vec<EducationEntry> },
    Skills { skills: Vec<Skill> },
    Projects { entries: Vec<ProjectEntry> },
    Custom { content: String },
}

impl SectionBody {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionBody::Objective { .. } => SectionKind::Objective,
            SectionBody::Experience { .. } => SectionKind::Experience,
            SectionBody::Education { .. } => SectionKind::Education,
            SectionBody::Skills { .. } => SectionKind::Skills,
            SectionBody::Projects { .. } => SectionKind::Projects,
            SectionBody::Custom { .. } => SectionKind::Custom,
        }
    }
}

/// One tagged block of the resume: stable id, user-editable title, and a
/// kind-specific payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: Uuid,
    pub title: String,
    #[serde(flatten)]
    pub body: SectionBody,
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        self.body.kind()
    }
}

/// The whole in-memory document: contact block plus the ordered section
/// list. Section order is user-controlled and significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub contact: Contact,
    pub sections: Vec<Section>,
}

impl ResumeDocument {
    /// Session seed: placeholder contact values and four pre-populated
    /// sections (objective, one experience entry, one education entry,
    /// three skills). Ids are fresh per session.
    pub fn seeded() -> Self {
        Self {
            contact: Contact {
                name: "Your Name".to_string(),
                email: "your.email@example.com".to_string(),
                phone: "123-456-7890".to_string(),
                linkedin: "linkedin.com/in/yourprofile".to_string(),
                github: "github.com/yourusername".to_string(),
                portfolio: "yourportfolio.com".to_string(),
            },
            sections: vec![
                Section {
                    id: Uuid::new_v4(),
                    title: "Objective".to_string(),
                    body: SectionBody::Objective {
                        content: "Seeking a challenging role in a dynamic organization..."
                            .to_string(),
                    },
                },
                Section {
                    id: Uuid::new_v4(),
                    title: "Experience".to_string(),
                    body: SectionBody::Experience {
                        entries: vec![ExperienceEntry {
                            id: Uuid::new_v4(),
                            company: "Tech Solutions Inc.".to_string(),
                            role: "Software Engineer".to_string(),
                            start_date: "Jan 2020".to_string(),
                            end_date: "Present".to_string(),
                            description: "- Developed awesome features.\n- Collaborated with team."
                                .to_string(),
                        }],
                    },
                },
                Section {
                    id: Uuid::new_v4(),
                    title: "Education".to_string(),
                    body: SectionBody::Education {
                        entries: vec![EducationEntry {
                            id: Uuid::new_v4(),
                            institution: "State University".to_string(),
                            degree: "B.S. Computer Science".to_string(),
                            graduation_date: "May 2019".to_string(),
                            description: "Relevant coursework: Data Structures, Algorithms."
                                .to_string(),
                        }],
                    },
                },
                Section {
                    id: Uuid::new_v4(),
                    title: "Skills".to_string(),
                    body: SectionBody::Skills {
                        skills: vec![
                            Skill::named("JavaScript"),
                            Skill::named("React"),
                            Skill::named("Node.js"),
                        ],
                    },
                },
            ],
        }
    }

    pub fn section(&self, id: Uuid) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// First section of the given kind, if any. Used by assist flows that
    /// target "the" objective / skills section.
    pub fn first_of_kind(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind() == kind)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Partial updates
// ────────────────────────────────────────────────────────────────────────────

/// Shallow merge for a section: title applies to any variant, `content`
/// only to objective/custom bodies (a patch can never change the kind).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub role: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

impl ExperiencePatch {
    pub fn apply(&self, entry: &mut ExperienceEntry) {
        if let Some(v) = &self.company {
            entry.company = v.clone();
        }
        if let Some(v) = &self.role {
            entry.role = v.clone();
        }
        if let Some(v) = &self.start_date {
            entry.start_date = v.clone();
        }
        if let Some(v) = &self.end_date {
            entry.end_date = v.clone();
        }
        if let Some(v) = &self.description {
            entry.description = v.clone();
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub graduation_date: Option<String>,
    pub description: Option<String>,
}

impl EducationPatch {
    pub fn apply(&self, entry: &mut EducationEntry) {
        if let Some(v) = &self.institution {
            entry.institution = v.clone();
        }
        if let Some(v) = &self.degree {
            entry.degree = v.clone();
        }
        if let Some(v) = &self.graduation_date {
            entry.graduation_date = v.clone();
        }
        if let Some(v) = &self.description {
            entry.description = v.clone();
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<String>,
    pub link: Option<String>,
}

impl ProjectPatch {
    pub fn apply(&self, entry: &mut ProjectEntry) {
        if let Some(v) = &self.name {
            entry.name = v.clone();
        }
        if let Some(v) = &self.description {
            entry.description = v.clone();
        }
        if let Some(v) = &self.technologies {
            entry.technologies = v.clone();
        }
        if let Some(v) = &self.link {
            entry.link = Some(v.clone());
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillPatch {
    pub name: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_match_their_kind() {
        for kind in [
            SectionKind::Objective,
            SectionKind::Experience,
            SectionKind::Education,
            SectionKind::Skills,
            SectionKind::Projects,
            SectionKind::Custom,
        ] {
            assert_eq!(kind.template().kind(), kind);
        }
    }

    #[test]
    fn test_default_titles() {
        assert_eq!(SectionKind::Objective.default_title(), "Objective");
        assert_eq!(SectionKind::Custom.default_title(), "Custom Section");
    }

    #[test]
    fn test_section_json_shape_is_tagged() {
        let section = Section {
            id: Uuid::new_v4(),
            title: "Skills".to_string(),
            body: SectionBody::Skills {
                skills: vec![Skill::named("Rust")],
            },
        };
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["type"], "skills");
        assert_eq!(json["skills"][0]["name"], "Rust");
        assert_eq!(json["title"], "Skills");
    }

    #[test]
    fn test_section_roundtrips_through_json() {
        let section = Section {
            id: Uuid::new_v4(),
            title: "Projects".to_string(),
            body: SectionBody::Projects {
                entries: vec![ProjectEntry::blank()],
            },
        };
        let json = serde_json::to_string(&section).unwrap();
        let recovered: Section = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, section);
    }

    #[test]
    fn test_seed_document_shape() {
        let doc = ResumeDocument::seeded();
        assert_eq!(doc.sections.len(), 4);
        assert_eq!(doc.sections[0].kind(), SectionKind::Objective);
        assert_eq!(doc.sections[1].kind(), SectionKind::Experience);
        assert_eq!(doc.sections[2].kind(), SectionKind::Education);
        assert_eq!(doc.sections[3].kind(), SectionKind::Skills);

        let skills = doc.first_of_kind(SectionKind::Skills).unwrap();
        match &skills.body {
            SectionBody::Skills { skills } => assert_eq!(skills.len(), 3),
            _ => panic!("expected skills body"),
        }
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let doc = ResumeDocument::seeded();
        for (i, a) in doc.sections.iter().enumerate() {
            for b in doc.sections.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_contact_set() {
        let mut contact = ResumeDocument::seeded().contact;
        contact.set(ContactField::Email, "me@example.com".to_string());
        assert_eq!(contact.email, "me@example.com");
        assert_eq!(contact.name, "Your Name");
    }

    #[test]
    fn test_project_patch_keeps_unset_fields() {
        let mut entry = ProjectEntry {
            id: Uuid::new_v4(),
            name: "Search engine".to_string(),
            description: "Indexed things".to_string(),
            technologies: "Rust, Tantivy".to_string(),
            link: None,
        };
        ProjectPatch {
            description: Some("Indexed 10M documents".to_string()),
            ..Default::default()
        }
        .apply(&mut entry);
        assert_eq!(entry.description, "Indexed 10M documents");
        assert_eq!(entry.name, "Search engine");
        assert!(entry.link.is_none());
    }
}
