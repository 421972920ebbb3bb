// Template Dispatcher: (view model, template id, accent color) → RenderedDocument.
// Pure and total. Unknown template ids fall back to `classic`; the accent color
// is forwarded to the renderer without validation.

pub mod document;
pub mod format;
pub mod handlers;
pub mod html;
pub mod registry;
pub mod templates;

use tracing::debug;

pub use document::{RenderedDocument, SectionKind};
pub use registry::TemplateId;

use crate::render::document::Accent;
use crate::render::registry::renderer_for;
use crate::resume::SanitizedViewModel;

/// Accent used when neither the stored resume nor the request supplies one.
pub const DEFAULT_ACCENT_COLOR: &str = "#10b981";

pub fn render(
    view: &SanitizedViewModel,
    template_id: Option<&str>,
    accent_color: &str,
) -> RenderedDocument {
    let template = TemplateId::from_id(template_id);
    if let Some(requested) = template_id.filter(|id| TemplateId::lookup(id).is_none()) {
        debug!("Unknown template '{requested}', falling back to {template}");
    }
    debug!("Rendering resume with template={template} accent={accent_color}");

    renderer_for(template).render(view, Accent::new(accent_color))
}
