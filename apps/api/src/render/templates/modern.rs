//! Modern: accent-colored header band, skills rendered as tags at the end.

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

pub struct ModernTemplate;

impl Renderer for ModernTemplate {
    fn render(&self, view: &SanitizedViewModel, accent: Accent) -> RenderedDocument {
        let sections = [
            summary_section(view, Some("Professional Summary")),
            experience_section(view, "Experience", ExperienceOptions::default()),
            projects_section(view, "Key Projects"),
            education_section(view, "Education"),
            skills_section(view, "Technical Skills", SkillsStyle::Tags),
        ]
        .into_iter()
        .flatten()
        .collect();

        RenderedDocument {
            template: TemplateId::Modern,
            accent,
            layout: Layout::SingleColumn,
            header: Header {
                name: display_name(&view.personal_info),
                profession: None,
                portrait: None,
                contacts: contacts(&view.personal_info, &CONTACT_ORDER, LinkedinDisplay::Verbatim),
            },
            sidebar: Vec::new(),
            sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::document::SectionKind;
    use crate::resume::normalize;
    use serde_json::json;

    #[test]
    fn test_modern_skills_last() {
        let view = normalize(&json!({
            "professional_summary": "Builder.",
            "experience": [{"position": "Dev"}],
            "skills": ["Go"]
        }));
        let doc = ModernTemplate.render(&view, Accent::new("#000"));
        let kinds: Vec<_> = doc.sections.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![SectionKind::Summary, SectionKind::Experience, SectionKind::Skills]
        );
    }

    #[test]
    fn test_modern_linkedin_verbatim() {
        let view = normalize(&json!({
            "personal_info": {"linkedin": "https://linkedin.com/in/jdoe"}
        }));
        let doc = ModernTemplate.render(&view, Accent::new("#000"));
        assert_eq!(
            doc.contact(ContactKind::Linkedin).unwrap().text,
            "https://linkedin.com/in/jdoe"
        );
    }
}
