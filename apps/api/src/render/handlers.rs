//! Stateless rendering endpoints: the caller supplies the resume record inline.

use axum::{
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::render::{html::to_html, render, RenderedDocument, TemplateId, DEFAULT_ACCENT_COLOR};
use crate::resume::normalize;

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    /// Raw ResumeRecord. Absent means an empty resume.
    #[serde(default)]
    pub resume: Value,
    pub template: Option<String>,
    pub accent_color: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    pub templates: Vec<TemplateId>,
    pub default: TemplateId,
}

fn render_request(request: &RenderRequest) -> RenderedDocument {
    let view = normalize(&request.resume);
    let accent = request
        .accent_color
        .as_deref()
        .filter(|a| !a.trim().is_empty())
        .unwrap_or(DEFAULT_ACCENT_COLOR);
    render(&view, request.template.as_deref(), accent)
}

/// POST /api/v1/render
pub async fn handle_render(Json(request): Json<RenderRequest>) -> Json<RenderedDocument> {
    Json(render_request(&request))
}

/// POST /api/v1/render/html
pub async fn handle_render_html(
    Json(request): Json<RenderRequest>,
) -> Result<Html<String>, AppError> {
    Ok(Html(to_html(&render_request(&request))?))
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<TemplateListResponse> {
    Json(TemplateListResponse {
        templates: TemplateId::ALL.to_vec(),
        default: TemplateId::default(),
    })
}

/// Routes that need no application state; merged into the main router.
pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/api/v1/render", post(handle_render))
        .route("/api/v1/render/html", post(handle_render_html))
        .route("/api/v1/templates", get(handle_list_templates))
}
