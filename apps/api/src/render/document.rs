//! RenderedDocument: the presentational tree produced by every template renderer.
//!
//! The tree is template-agnostic: renderers decide *what* goes where (section order,
//! headings, layout), and the downstream presentation layer (HTML emitter, PDF
//! capture, a browser client consuming JSON) decides how it looks.

use serde::{Deserialize, Serialize};

use crate::render::registry::TemplateId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedDocument {
    pub template: TemplateId,
    pub accent: Accent,
    pub layout: Layout,
    pub header: Header,
    /// Sections placed in the side column. Empty for single-column layouts.
    pub sidebar: Vec<Section>,
    pub sections: Vec<Section>,
}

impl RenderedDocument {
    /// Looks up a section by kind in either column.
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections
            .iter()
            .chain(self.sidebar.iter())
            .find(|s| s.kind == kind)
    }

    pub fn contact(&self, kind: ContactKind) -> Option<&Contact> {
        self.header.contacts.iter().find(|c| c.kind == kind)
    }
}

/// Accent palette. `border` and `faint` are the accent with an alpha suffix, so
/// they are only meaningful for hex color tokens; other tokens pass through as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accent {
    pub primary: String,
    pub border: String,
    pub faint: String,
}

impl Accent {
    pub fn new(color: &str) -> Self {
        Self {
            primary: color.to_string(),
            border: format!("{color}40"),
            faint: format!("{color}20"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    SingleColumn,
    Sidebar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    pub profession: Option<String>,
    pub portrait: Option<Portrait>,
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "url", rename_all = "snake_case")]
pub enum Portrait {
    Photo(String),
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub kind: ContactKind,
    pub text: String,
    pub href: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Email,
    Phone,
    Location,
    Linkedin,
    Website,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    pub heading: Option<String>,
    pub body: SectionBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Experience,
    Projects,
    Education,
    Skills,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SectionBody {
    Paragraph(String),
    Entries(Vec<Entry>),
    Tags(Vec<String>),
    /// Items shown on one line, joined with ` • `.
    Inline(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,
    pub subtitle: Option<String>,
    pub date: Option<String>,
    pub meta: Vec<String>,
    pub link: Option<String>,
    pub bullets: Vec<String>,
}
