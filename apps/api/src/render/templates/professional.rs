//! Professional: black-ink default, experience location, bare LinkedIn handle.

use crate::render::document::{Accent, ContactKind, Header, Layout, RenderedDocument};
use crate::render::registry::{Renderer, TemplateId};
use crate::render::templates::{
    contacts, display_name, education_section, experience_section, projects_section,
    skills_section, summary_section, ExperienceOptions, LinkedinDisplay, SkillsStyle,
};
use crate::resume::SanitizedViewModel;

const CONTACT_ORDER: [ContactKind; 5] = [
    ContactKind::Email,
    ContactKind::Phone,
    ContactKind::Location,
    ContactKind::Linkedin,
    ContactKind::Website,
];

const FALLBACK_ACCENT: &str = "#000";

pub struct ProfessionalTemplate;

impl Renderer for ProfessionalTemplate {
    fn render(&self, view: &SanitizedViewModel, accent: Accent) -> RenderedDocument {
        let accent = if accent.primary.trim().is_empty() {
            Accent::new(FALLBACK_ACCENT)
        } else {
            accent
        };
        let experience = ExperienceOptions {
            show_location: true,
            ..ExperienceOptions::default()
        };

        let sections = [
            summary_section(view, Some("Summary")),
            experience_section(view, "Experience", experience),
            projects_section(view, "Projects"),
            education_section(view, "Education"),
            skills_section(view, "Skills", SkillsStyle::Inline),
        ]
        .into_iter()
        .flatten()
        .collect();

        RenderedDocument {
            template: TemplateId::Professional,
            accent,
            layout: Layout::SingleColumn,
            header: Header {
                name: display_name(&view.personal_info),
                profession: None,
                portrait: None,
                contacts: contacts(&view.personal_info, &CONTACT_ORDER, LinkedinDisplay::Handle),
            },
            sidebar: Vec::new(),
            sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::document::{SectionBody, SectionKind};
    use crate::resume::normalize;
    use serde_json::json;

    #[test]
    fn test_professional_blank_accent_defaults_to_black() {
        let doc = ProfessionalTemplate.render(&SanitizedViewModel::default(), Accent::new(""));
        assert_eq!(doc.accent.primary, "#000");
        let doc = ProfessionalTemplate.render(&SanitizedViewModel::default(), Accent::new("#123456"));
        assert_eq!(doc.accent.primary, "#123456");
    }

    #[test]
    fn test_professional_shows_experience_location() {
        let view = normalize(&json!({
            "experience": [{"position": "Dev", "company": "Acme", "location": "Remote"}]
        }));
        let doc = ProfessionalTemplate.render(&view, Accent::new("#000"));
        let SectionBody::Entries(entries) = &doc.section(SectionKind::Experience).unwrap().body else {
            panic!("expected entries");
        };
        assert_eq!(entries[0].meta, vec!["Remote"]);
    }
}
