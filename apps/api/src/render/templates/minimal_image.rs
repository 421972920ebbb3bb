//! Minimal with image: two columns, portrait and profession in the header.
//! Education and skills live in the sidebar.

use crate::render::document::{Accent, ContactKind, Header, Layout, Portrait, RenderedDocument};
use crate::render::registry::{Renderer, TemplateId};
use crate::render::templates::{
    contacts, display_name, education_section, experience_section, projects_section,
    skills_section, summary_section, ExperienceOptions, LinkedinDisplay, SkillsStyle,
};
use crate::resume::SanitizedViewModel;

const CONTACT_ORDER: [ContactKind; 4] = [
    ContactKind::Email,
    ContactKind::Phone,
    ContactKind::Location,
    ContactKind::Linkedin,
];

pub struct MinimalImageTemplate;

impl Renderer for MinimalImageTemplate {
    fn render(&self, view: &SanitizedViewModel, accent: Accent) -> RenderedDocument {
        let info = &view.personal_info;

        let portrait = match info.image.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Portrait::Photo(url.to_string()),
            _ => Portrait::Placeholder,
        };
        let profession = Some(info.profession.trim())
            .filter(|p| !p.is_empty())
            .map(String::from);

        let sidebar = [
            education_section(view, "Education"),
            skills_section(view, "Skills", SkillsStyle::Tags),
        ]
        .into_iter()
        .flatten()
        .collect();

        let sections = [
            summary_section(view, Some("About Me")),
            experience_section(view, "Experience", ExperienceOptions::default()),
            projects_section(view, "Projects"),
        ]
        .into_iter()
        .flatten()
        .collect();

        RenderedDocument {
            template: TemplateId::MinimalImage,
            accent,
            layout: Layout::Sidebar,
            header: Header {
                name: display_name(info),
                profession,
                portrait: Some(portrait),
                contacts: contacts(info, &CONTACT_ORDER, LinkedinDisplay::Handle),
            },
            sidebar,
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
    fn test_sidebar_holds_education_and_skills() {
        let view = normalize(&json!({
            "professional_summary": "Builder.",
            "education": [{"institution": "MIT"}],
            "skills": ["Go"]
        }));
        let doc = MinimalImageTemplate.render(&view, Accent::new("#000"));
        assert_eq!(doc.layout, Layout::Sidebar);
        let sidebar: Vec<_> = doc.sidebar.iter().map(|s| s.kind).collect();
        assert_eq!(sidebar, vec![SectionKind::Education, SectionKind::Skills]);
        assert_eq!(doc.sections[0].heading.as_deref(), Some("About Me"));
    }

    #[test]
    fn test_portrait_photo_or_placeholder() {
        let with_photo = normalize(&json!({
            "personal_info": {"image": "https://img.example/me.png", "profession": "Engineer"}
        }));
        let doc = MinimalImageTemplate.render(&with_photo, Accent::new("#000"));
        assert_eq!(
            doc.header.portrait,
            Some(Portrait::Photo("https://img.example/me.png".to_string()))
        );
        assert_eq!(doc.header.profession.as_deref(), Some("Engineer"));

        let without = MinimalImageTemplate.render(&SanitizedViewModel::default(), Accent::new("#000"));
        assert_eq!(without.header.portrait, Some(Portrait::Placeholder));
        assert_eq!(without.header.profession, None);
    }
}
