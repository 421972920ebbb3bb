//! HTML emission for a RenderedDocument.
//!
//! One embedded template serves every style; the template id becomes a CSS class.
//! All text is auto-escaped because the template name ends in `.html`.

use minijinja::{context, Environment};

use crate::render::document::RenderedDocument;

const DOCUMENT_TEMPLATE: &str = "document.html";

fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template(
        DOCUMENT_TEMPLATE,
        include_str!("../../templates/document.html"),
    )?;
    Ok(env)
}

pub fn to_html(doc: &RenderedDocument) -> Result<String, minijinja::Error> {
    let env = environment()?;
    let template = env.get_template(DOCUMENT_TEMPLATE)?;
    template.render(context! { doc => doc })
}
