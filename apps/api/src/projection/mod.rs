//! Plain-Text Projector — deterministic line-oriented rendering of the
//! document. This is the canonical text form fed to the full-resume
//! optimization flow and the export fallback; same document in, same
//! string out.

use std::fmt::Write;

use crate::models::resume::{ResumeDocument, SectionBody};

/// Renders the contact block (six labeled lines) followed by one block
/// per section in document order, each headed `## TITLE ##` with the
/// uppercased section title. Every section block ends with an extra
/// blank line.
pub fn project(doc: &ResumeDocument) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Name: {}", doc.contact.name);
    let _ = writeln!(out, "Email: {}", doc.contact.email);
    let _ = writeln!(out, "Phone: {}", doc.contact.phone);
    let _ = writeln!(out, "LinkedIn: {}", doc.contact.linkedin);
    let _ = writeln!(out, "GitHub: {}", doc.contact.github);
    let _ = writeln!(out, "Portfolio: {}", doc.contact.portfolio);
    out.push('\n');

    for section in &doc.sections {
        let _ = writeln!(out, "## {} ##", section.title.to_uppercase());
        match &section.body {
            SectionBody::Objective { content } | SectionBody::Custom { content } => {
                let _ = writeln!(out, "{content}");
            }
            SectionBody::Experience { entries } => {
                for entry in entries {
                    let _ = writeln!(
                        out,
                        "{} at {} ({} - {})",
                        entry.role, entry.company, entry.start_date, entry.end_date
                    );
                    let _ = writeln!(out, "{}\n", entry.description);
                }
            }
            SectionBody::Education { entries } => {
                for entry in entries {
                    let _ = writeln!(
                        out,
                        "{} from {} (Graduated: {})",
                        entry.degree, entry.institution, entry.graduation_date
                    );
                    let _ = writeln!(out, "{}\n", entry.description);
                }
            }
            SectionBody::Skills { skills } => {
                let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
                let _ = writeln!(out, "{}", names.join(", "));
            }
            SectionBody::Projects { entries } => {
                for entry in entries {
                    let _ = writeln!(out, "{}: {}", entry.name, entry.description);
                    let _ = writeln!(out, "Technologies: {}", entry.technologies);
                    let _ = writeln!(out, "Link: {}\n", entry.link.as_deref().unwrap_or("N/A"));
                }
            }
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ProjectEntry, ResumeDocument, Section, SectionBody, SectionKind};
    use uuid::Uuid;

    #[test]
    fn test_projection_is_stable() {
        let doc = ResumeDocument::seeded();
        assert_eq!(project(&doc), project(&doc));
    }

    #[test]
    fn test_seed_projection_contains_expected_lines() {
        let text = project(&ResumeDocument::seeded());

        assert!(text.starts_with("Name: Your Name\n"));
        assert!(text.contains("Email: your.email@example.com\n"));
        assert!(text.contains("## OBJECTIVE ##\n"));
        assert!(text.contains("Software Engineer at Tech Solutions Inc. (Jan 2020 - Present)\n"));
        assert!(text.contains("B.S. Computer Science from State University (Graduated: May 2019)\n"));
        assert!(text.contains("JavaScript, React, Node.js\n"));
    }

    #[test]
    fn test_title_is_uppercased_even_when_user_edited() {
        let mut doc = ResumeDocument::seeded();
        doc.sections[0].title = "Career Goal".to_string();
        assert!(project(&doc).contains("## CAREER GOAL ##\n"));
    }

    #[test]
    fn test_project_without_link_renders_na() {
        let doc = ResumeDocument {
            contact: ResumeDocument::seeded().contact,
            sections: vec![Section {
                id: Uuid::new_v4(),
                title: SectionKind::Projects.default_title().to_string(),
                body: SectionBody::Projects {
                    entries: vec![ProjectEntry {
                        id: Uuid::new_v4(),
                        name: "Crawler".to_string(),
                        description: "Fetches pages".to_string(),
                        technologies: "Rust, reqwest".to_string(),
                        link: None,
                    }],
                },
            }],
        };
        let text = project(&doc);
        assert!(text.contains("Crawler: Fetches pages\n"));
        assert!(text.contains("Technologies: Rust, reqwest\n"));
        assert!(text.contains("Link: N/A\n"));
    }

    #[test]
    fn test_every_section_block_ends_with_blank_line() {
        let text = project(&ResumeDocument::seeded());
        // Skills is the last section: one newline from the line itself plus
        // the block terminator.
        assert!(text.ends_with("JavaScript, React, Node.js\n\n"));
    }

    #[test]
    fn test_mutating_one_field_changes_only_that_substring() {
        let mut doc = ResumeDocument::seeded();
        let before = project(&doc);
        doc.contact.phone = "555-0100".to_string();
        let after = project(&doc);

        assert!(before.contains("Phone: 123-456-7890\n"));
        assert!(after.contains("Phone: 555-0100\n"));
        assert_eq!(
            before.replace("Phone: 123-456-7890", "Phone: 555-0100"),
            after
        );
    }
}
