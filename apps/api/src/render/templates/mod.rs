//! Template renderers, one per visual style, plus the section builders they share.
//!
//! A builder returns `None` when its view-model field is empty, so no template can
//! emit a heading without content.

mod classic;
mod minimal;
mod minimal_image;
mod modern;
mod professional;

pub use classic::ClassicTemplate;
pub use minimal::MinimalTemplate;
pub use minimal_image::MinimalImageTemplate;
pub use modern::ModernTemplate;
pub use professional::ProfessionalTemplate;

use crate::render::document::{Contact, ContactKind, Entry, Section, SectionBody, SectionKind};
use crate::render::format::{
    date_range, degree_line, format_display_date, linkedin_handle, linkedin_href, split_bullets,
    website_href,
};
use crate::resume::{PersonalInfo, SanitizedViewModel};

const NAME_PLACEHOLDER: &str = "Your Name";
const SKILL_SEPARATOR: &str = " • ";

pub(crate) fn display_name(info: &PersonalInfo) -> String {
    match info.full_name.trim() {
        "" => NAME_PLACEHOLDER.to_string(),
        name => name.to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Header contacts
// ────────────────────────────────────────────────────────────────────────────

/// How a template displays the LinkedIn value.
#[derive(Debug, Clone, Copy)]
pub(crate) enum LinkedinDisplay {
    /// Exactly as stored (after normalization).
    Verbatim,
    /// Profile URL prefix removed.
    Handle,
}

pub(crate) fn contacts(
    info: &PersonalInfo,
    kinds: &[ContactKind],
    linkedin: LinkedinDisplay,
) -> Vec<Contact> {
    kinds
        .iter()
        .filter_map(|&kind| contact(info, kind, linkedin))
        .collect()
}

fn contact(info: &PersonalInfo, kind: ContactKind, linkedin: LinkedinDisplay) -> Option<Contact> {
    let value = match kind {
        ContactKind::Email => &info.email,
        ContactKind::Phone => &info.phone,
        ContactKind::Location => &info.location,
        ContactKind::Linkedin => &info.linkedin,
        ContactKind::Website => &info.website,
    }
    .trim();
    if value.is_empty() {
        return None;
    }

    let (text, href) = match kind {
        ContactKind::Email => (value.to_string(), Some(format!("mailto:{value}"))),
        ContactKind::Phone => (value.to_string(), Some(format!("tel:{value}"))),
        ContactKind::Location => (value.to_string(), None),
        ContactKind::Linkedin => {
            let text = match linkedin {
                LinkedinDisplay::Verbatim => value.to_string(),
                LinkedinDisplay::Handle => linkedin_handle(value),
            };
            (text, Some(linkedin_href(value)))
        }
        ContactKind::Website => (value.to_string(), Some(website_href(value))),
    };

    Some(Contact { kind, text, href })
}

// ────────────────────────────────────────────────────────────────────────────
// Section builders
// ────────────────────────────────────────────────────────────────────────────

pub(crate) fn summary_section(view: &SanitizedViewModel, heading: Option<&str>) -> Option<Section> {
    let summary = view.professional_summary.trim();
    if summary.is_empty() {
        return None;
    }
    Some(Section {
        kind: SectionKind::Summary,
        heading: heading.map(String::from),
        body: SectionBody::Paragraph(summary.to_string()),
    })
}

/// Per-template tweaks to experience entries.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ExperienceOptions {
    /// Title shown when the position is blank.
    pub position_placeholder: Option<&'static str>,
    /// Show the pass-through `location` field as a meta line.
    pub show_location: bool,
}

pub(crate) fn experience_section(
    view: &SanitizedViewModel,
    heading: &str,
    options: ExperienceOptions,
) -> Option<Section> {
    if view.experience.is_empty() {
        return None;
    }

    let entries = view
        .experience
        .iter()
        .map(|exp| {
            let title = match (exp.position.trim(), options.position_placeholder) {
                ("", Some(placeholder)) => placeholder.to_string(),
                (position, _) => position.to_string(),
            };
            let meta = exp
                .extra_text("location")
                .filter(|_| options.show_location)
                .map(|loc| vec![loc.trim().to_string()])
                .unwrap_or_default();

            Entry {
                title,
                subtitle: non_blank(&exp.company),
                date: date_range(&exp.start_date, &exp.end_date, exp.is_current),
                meta,
                link: None,
                bullets: split_bullets(&exp.description),
            }
        })
        .collect();

    Some(entries_section(SectionKind::Experience, heading, entries))
}

pub(crate) fn projects_section(view: &SanitizedViewModel, heading: &str) -> Option<Section> {
    if view.project.is_empty() {
        return None;
    }

    let entries = view
        .project
        .iter()
        .map(|project| Entry {
            title: project.name.trim().to_string(),
            subtitle: project
                .extra
                .get("type")
                .and_then(|v| v.as_str())
                .and_then(non_blank),
            link: project.link().map(website_href),
            bullets: split_bullets(&project.description),
            ..Entry::default()
        })
        .collect();

    Some(entries_section(SectionKind::Projects, heading, entries))
}

/// Only entries with an institution are shown; without any, the section is omitted.
pub(crate) fn education_section(view: &SanitizedViewModel, heading: &str) -> Option<Section> {
    let entries: Vec<Entry> = view
        .education
        .iter()
        .filter(|edu| edu.has_institution())
        .map(|edu| Entry {
            title: degree_line(&edu.degree, &edu.field),
            subtitle: non_blank(&edu.institution),
            date: non_blank(&format_display_date(&edu.graduation_date)),
            meta: non_blank(&edu.gpa)
                .map(|gpa| vec![format!("GPA: {gpa}")])
                .unwrap_or_default(),
            ..Entry::default()
        })
        .collect();

    if entries.is_empty() {
        return None;
    }
    Some(entries_section(SectionKind::Education, heading, entries))
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum SkillsStyle {
    Tags,
    Inline,
}

pub(crate) fn skills_section(
    view: &SanitizedViewModel,
    heading: &str,
    style: SkillsStyle,
) -> Option<Section> {
    let skills: Vec<String> = view
        .skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    if skills.is_empty() {
        return None;
    }

    let body = match style {
        SkillsStyle::Tags => SectionBody::Tags(skills),
        SkillsStyle::Inline => SectionBody::Inline(skills.join(SKILL_SEPARATOR)),
    };
    Some(Section {
        kind: SectionKind::Skills,
        heading: Some(heading.to_string()),
        body,
    })
}

fn entries_section(kind: SectionKind, heading: &str, entries: Vec<Entry>) -> Section {
    Section {
        kind,
        heading: Some(heading.to_string()),
        body: SectionBody::Entries(entries),
    }
}

fn non_blank(value: &str) -> Option<String> {
    match value.trim() {
        "" => None,
        trimmed => Some(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::normalize;
    use serde_json::json;

    #[test]
    fn test_contacts_skip_blank_values() {
        let view = normalize(&json!({"personal_info": {"email": "a@b.c", "phone": "  "}}));
        let items = contacts(
            &view.personal_info,
            &[ContactKind::Email, ContactKind::Phone],
            LinkedinDisplay::Verbatim,
        );
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].href.as_deref(), Some("mailto:a@b.c"));
    }

    #[test]
    fn test_linkedin_display_modes() {
        let view = normalize(&json!({
            "personal_info": {"linkedin": "https://www.linkedin.com/in/jdoe"}
        }));
        let verbatim = contacts(&view.personal_info, &[ContactKind::Linkedin], LinkedinDisplay::Verbatim);
        let handle = contacts(&view.personal_info, &[ContactKind::Linkedin], LinkedinDisplay::Handle);
        assert_eq!(verbatim[0].text, "https://www.linkedin.com/in/jdoe");
        assert_eq!(handle[0].text, "jdoe");
        assert_eq!(handle[0].href, verbatim[0].href);
    }

    #[test]
    fn test_experience_placeholder_and_location() {
        let view = normalize(&json!({"experience": [{"company": "Acme", "location": "Berlin"}]}));
        let options = ExperienceOptions {
            position_placeholder: Some("Position Title"),
            show_location: true,
        };
        let section = experience_section(&view, "Experience", options).unwrap();
        let SectionBody::Entries(entries) = section.body else {
            panic!("expected entries");
        };
        assert_eq!(entries[0].title, "Position Title");
        assert_eq!(entries[0].meta, vec!["Berlin"]);
        assert_eq!(entries[0].date, None);
    }

    #[test]
    fn test_education_entry_shape() {
        let view = normalize(&json!({"education": [{
            "institution": "MIT", "degree": "BSc", "field": "Physics",
            "graduation_date": "2019-05", "gpa": 3.8
        }]}));
        let section = education_section(&view, "Education").unwrap();
        let SectionBody::Entries(entries) = section.body else {
            panic!("expected entries");
        };
        assert_eq!(entries[0].title, "BSc in Physics");
        assert_eq!(entries[0].subtitle.as_deref(), Some("MIT"));
        assert_eq!(entries[0].date.as_deref(), Some("May 2019"));
        assert_eq!(entries[0].meta, vec!["GPA: 3.8"]);
    }

    #[test]
    fn test_skills_inline_joined() {
        let view = normalize(&json!({"skills": ["Go", " ", "Rust"]}));
        let section = skills_section(&view, "Skills", SkillsStyle::Inline).unwrap();
        assert_eq!(section.body, SectionBody::Inline("Go • Rust".to_string()));
    }

    #[test]
    fn test_project_link_and_type() {
        let view = normalize(&json!({"project": [{"name": "Site", "type": "Web", "link": "site.dev"}]}));
        let section = projects_section(&view, "Projects").unwrap();
        let SectionBody::Entries(entries) = section.body else {
            panic!("expected entries");
        };
        assert_eq!(entries[0].subtitle.as_deref(), Some("Web"));
        assert_eq!(entries[0].link.as_deref(), Some("https://site.dev"));
        assert!(entries[0].bullets.is_empty());
    }
}
