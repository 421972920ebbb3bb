//! SanitizedViewModel: the render-ready projection of a stored resume record.
//!
//! Every field here has already been canonicalized by [`crate::resume::normalize`].
//! Renderers read these types only; they never look at the raw record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizedViewModel {
    pub personal_info: PersonalInfo,
    pub professional_summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub project: Vec<ProjectEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    /// Top-level keys the normalizer does not own (title, template, accent_color, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Never carries the legacy `linked:` prefix.
    pub linkedin: String,
    pub website: String,
    pub profession: String,
    /// Profile image URL. Binary upload handles do not survive normalization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    /// Resolved from `position`, `role` or `title`, in that order.
    pub position: String,
    pub company: String,
    pub start_date: String,
    /// `"Present"` when the role is current and no explicit end date was stored.
    pub end_date: String,
    pub is_current: bool,
    /// Bullet lines joined with `\n`.
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ExperienceEntry {
    /// Free-form string field carried through from the raw record (e.g. `location`).
    pub fn extra_text(&self, key: &str) -> Option<&str> {
        self.extra
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub name: String,
    /// Bullet lines joined with `\n`.
    pub description: String,
    /// `type`, `link` and anything else stored on the project.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProjectEntry {
    pub fn link(&self) -> Option<&str> {
        self.extra
            .get("link")
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub graduation_date: String,
    /// Stored either as a number or a string upstream; always text here.
    pub gpa: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EducationEntry {
    /// Presentation-time filter: entries without an institution are not shown.
    pub fn has_institution(&self) -> bool {
        !self.institution.trim().is_empty()
    }
}
