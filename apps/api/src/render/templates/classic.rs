//! Classic: centered header, single column, skills up front.

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

pub struct ClassicTemplate;

impl Renderer for ClassicTemplate {
    fn render(&self, view: &SanitizedViewModel, accent: Accent) -> RenderedDocument {
        let experience = ExperienceOptions {
            position_placeholder: Some("Position Title"),
            ..ExperienceOptions::default()
        };

        let sections = [
            summary_section(view, Some("Professional Summary")),
            skills_section(view, "Technical Skills", SkillsStyle::Inline),
            experience_section(view, "Professional Experience", experience),
            projects_section(view, "Key Projects"),
            education_section(view, "Education"),
        ]
        .into_iter()
        .flatten()
        .collect();

        RenderedDocument {
            template: TemplateId::Classic,
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
    use crate::render::document::{SectionBody, SectionKind};
    use crate::resume::normalize;
    use serde_json::json;

    #[test]
    fn test_classic_section_order() {
        let view = normalize(&json!({
            "professional_summary": "Builder.",
            "experience": [{"position": "Dev"}],
            "project": [{"name": "P"}],
            "education": [{"institution": "MIT"}],
            "skills": ["Go"]
        }));
        let doc = ClassicTemplate.render(&view, Accent::new("#000"));
        let headings: Vec<_> = doc.sections.iter().filter_map(|s| s.heading.as_deref()).collect();
        assert_eq!(
            headings,
            vec![
                "Professional Summary",
                "Technical Skills",
                "Professional Experience",
                "Key Projects",
                "Education"
            ]
        );
        assert_eq!(
            doc.section(SectionKind::Skills).unwrap().body,
            SectionBody::Inline("Go".to_string())
        );
    }

    #[test]
    fn test_classic_position_placeholder() {
        let view = normalize(&json!({"experience": [{"company": "Acme"}]}));
        let doc = ClassicTemplate.render(&view, Accent::new("#000"));
        let SectionBody::Entries(entries) = &doc.section(SectionKind::Experience).unwrap().body else {
            panic!("expected entries");
        };
        assert_eq!(entries[0].title, "Position Title");
    }
}
