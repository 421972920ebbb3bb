//! The closed set of template identifiers and the renderer registered for each.

use serde::{Deserialize, Serialize};

use crate::render::document::{Accent, RenderedDocument};
use crate::render::templates::{
    ClassicTemplate, MinimalImageTemplate, MinimalTemplate, ModernTemplate, ProfessionalTemplate,
};
use crate::resume::SanitizedViewModel;

/// Template identifier. The serialized strings are part of the stored-data contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    #[default]
    Classic,
    Modern,
    Minimal,
    MinimalImage,
    Professional,
}

impl TemplateId {
    pub const ALL: [TemplateId; 5] = [
        TemplateId::Classic,
        TemplateId::Modern,
        TemplateId::Minimal,
        TemplateId::MinimalImage,
        TemplateId::Professional,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::Classic => "classic",
            TemplateId::Modern => "modern",
            TemplateId::Minimal => "minimal",
            TemplateId::MinimalImage => "minimal-image",
            TemplateId::Professional => "professional",
        }
    }

    /// Exact, case-sensitive lookup. `None` when the id is not registered.
    pub fn lookup(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == id)
    }

    /// Resolves a stored or requested id; unknown and absent ids fall back to `classic`.
    pub fn from_id(id: Option<&str>) -> Self {
        id.and_then(Self::lookup).unwrap_or_default()
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A presentation-only renderer for one template style.
///
/// Renderers read the already-sanitized view model and never re-derive fields
/// from raw input. Section visibility is decided per call.
pub trait Renderer: Send + Sync {
    fn render(&self, view: &SanitizedViewModel, accent: Accent) -> RenderedDocument;
}

pub fn renderer_for(id: TemplateId) -> &'static dyn Renderer {
    match id {
        TemplateId::Classic => &ClassicTemplate,
        TemplateId::Modern => &ModernTemplate,
        TemplateId::Minimal => &MinimalTemplate,
        TemplateId::MinimalImage => &MinimalImageTemplate,
        TemplateId::Professional => &ProfessionalTemplate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ids_resolve() {
        for id in TemplateId::ALL {
            assert_eq!(TemplateId::from_id(Some(id.as_str())), id);
        }
    }

    #[test]
    fn test_unknown_and_absent_fall_back_to_classic() {
        assert_eq!(TemplateId::from_id(Some("nonexistent-id")), TemplateId::Classic);
        assert_eq!(TemplateId::from_id(Some("Modern")), TemplateId::Classic);
        assert_eq!(TemplateId::from_id(Some("")), TemplateId::Classic);
        assert_eq!(TemplateId::from_id(None), TemplateId::Classic);
    }

    #[test]
    fn test_serialized_ids_match_vocabulary() {
        let ids: Vec<String> = TemplateId::ALL
            .iter()
            .map(|t| serde_json::to_value(t).unwrap().as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            ids,
            vec!["classic", "modern", "minimal", "minimal-image", "professional"]
        );
    }
}
