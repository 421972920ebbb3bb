//! Minimal: typographic layout, unheaded summary, bare LinkedIn handle.

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

pub struct MinimalTemplate;

impl Renderer for MinimalTemplate {
    fn render(&self, view: &SanitizedViewModel, accent: Accent) -> RenderedDocument {
        let sections = [
            summary_section(view, None),
            experience_section(view, "Professional Experience", ExperienceOptions::default()),
            projects_section(view, "Selected Work"),
            education_section(view, "Education"),
            skills_section(view, "Core Competencies", SkillsStyle::Inline),
        ]
        .into_iter()
        .flatten()
        .collect();

        RenderedDocument {
            template: TemplateId::Minimal,
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
    use crate::render::document::SectionKind;
    use crate::resume::normalize;
    use serde_json::json;

    #[test]
    fn test_minimal_summary_has_no_heading() {
        let view = normalize(&json!({"professional_summary": "Builder."}));
        let doc = MinimalTemplate.render(&view, Accent::new("#000"));
        assert_eq!(doc.section(SectionKind::Summary).unwrap().heading, None);
    }

    #[test]
    fn test_minimal_linkedin_handle() {
        let view = normalize(&json!({
            "personal_info": {"linkedin": "https://www.linkedin.com/in/jdoe"}
        }));
        let doc = MinimalTemplate.render(&view, Accent::new("#000"));
        let linkedin = doc.contact(ContactKind::Linkedin).unwrap();
        assert_eq!(linkedin.text, "jdoe");
        assert_eq!(linkedin.href.as_deref(), Some("https://www.linkedin.com/in/jdoe"));
    }
}
