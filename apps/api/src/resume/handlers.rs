//! Axum route handlers for resume storage, preview and public sharing.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ResumeRow, ResumeSummaryRow};
use crate::render::{self, html::to_html, RenderedDocument, TemplateId, DEFAULT_ACCENT_COLOR};
use crate::resume::normalize;
use crate::resume::store::{self, NewResume, ResumePatch};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateResumeRequest {
    pub user_id: Uuid,
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct UpdateResumeRequest {
    pub user_id: Uuid,
    pub title: Option<String>,
    pub data: Option<Value>,
    pub template: Option<String>,
    pub accent_color: Option<String>,
    pub public: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    pub user_id: Uuid,
    pub template: Option<String>,
    pub accent_color: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub resumes: Vec<ResumeSummaryRow>,
}

#[derive(Debug, Serialize)]
pub struct PublicResumeResponse {
    pub resume: ResumeRow,
    pub document: RenderedDocument,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes
///
/// Creates a blank, private resume with the default template and accent.
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Json(request): Json<CreateResumeRequest>,
) -> Result<(StatusCode, Json<ResumeRow>), AppError> {
    let title = require_title(&request.title)?;

    let row = store::insert_resume(
        &state.db,
        NewResume {
            user_id: request.user_id,
            title,
            data: &json!({}),
            template: TemplateId::default().as_str(),
            accent_color: DEFAULT_ACCENT_COLOR,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/resumes?user_id=
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<ResumeListResponse>, AppError> {
    let resumes = store::list_resumes(&state.db, query.user_id).await?;
    Ok(Json(ResumeListResponse { resumes }))
}

/// GET /api/v1/resumes/:id?user_id=
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<ResumeRow>, AppError> {
    let row = store::fetch_owned(&state.db, resume_id, query.user_id)
        .await?
        .ok_or_else(|| not_found(resume_id))?;
    Ok(Json(row))
}

/// PUT /api/v1/resumes/:id
///
/// Partial update. `data` is merged key-by-key into the stored record.
pub async fn handle_update_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
    Json(request): Json<UpdateResumeRequest>,
) -> Result<Json<ResumeRow>, AppError> {
    let title = request
        .title
        .as_deref()
        .map(require_title)
        .transpose()?
        .map(String::from);

    if let Some(data) = &request.data {
        if !data.is_object() {
            return Err(AppError::Validation("data must be a JSON object".to_string()));
        }
    }

    let patch = ResumePatch {
        title,
        data: request.data,
        template: request.template,
        accent_color: request.accent_color,
        public: request.public,
    };

    let row = store::update_resume(&state.db, resume_id, request.user_id, patch)
        .await?
        .ok_or_else(|| not_found(resume_id))?;

    info!("Updated resume {resume_id}");
    Ok(Json(row))
}

/// DELETE /api/v1/resumes/:id?user_id=
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
    Query(query): Query<OwnerQuery>,
) -> Result<StatusCode, AppError> {
    if !store::delete_resume(&state.db, resume_id, query.user_id).await? {
        return Err(not_found(resume_id));
    }
    info!("Deleted resume {resume_id}");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/resumes/:id/preview?user_id=&template=&accent_color=
///
/// Renders the owned resume. Query parameters override the stored template and accent.
pub async fn handle_preview_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
    Query(query): Query<PreviewQuery>,
) -> Result<Json<RenderedDocument>, AppError> {
    let row = store::fetch_owned(&state.db, resume_id, query.user_id)
        .await?
        .ok_or_else(|| not_found(resume_id))?;

    Ok(Json(render_row(
        &row,
        query.template.as_deref(),
        query.accent_color.as_deref(),
    )))
}

/// GET /api/v1/resumes/public/:id
pub async fn handle_get_public_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<PublicResumeResponse>, AppError> {
    let resume = store::fetch_public(&state.db, resume_id)
        .await?
        .ok_or_else(|| not_found(resume_id))?;
    let document = render_row(&resume, None, None);

    Ok(Json(PublicResumeResponse { resume, document }))
}

/// GET /view/:id
///
/// Shareable HTML page for a public resume.
pub async fn handle_view_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let resume = store::fetch_public(&state.db, resume_id)
        .await?
        .ok_or_else(|| not_found(resume_id))?;

    Ok(Html(to_html(&render_row(&resume, None, None))?))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn render_row(
    row: &ResumeRow,
    template: Option<&str>,
    accent_color: Option<&str>,
) -> RenderedDocument {
    let view = normalize(&row.data);
    let template = template.unwrap_or(&row.template);
    let accent = accent_color
        .or(Some(row.accent_color.as_str()))
        .filter(|a| !a.trim().is_empty())
        .unwrap_or(DEFAULT_ACCENT_COLOR);

    render::render(&view, Some(template), accent)
}

fn require_title(title: &str) -> Result<&str, AppError> {
    match title.trim() {
        "" => Err(AppError::Validation("title cannot be empty".to_string())),
        trimmed => Ok(trimmed),
    }
}

fn not_found(resume_id: Uuid) -> AppError {
    AppError::NotFound(format!("Resume {resume_id} not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn row(data: Value, template: &str, accent_color: &str) -> ResumeRow {
        ResumeRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Backend".to_string(),
            data,
            template: template.to_string(),
            accent_color: accent_color.to_string(),
            public: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_render_row_uses_stored_settings() {
        let doc = render_row(&row(json!({}), "professional", "#1e40af"), None, None);
        assert_eq!(doc.template, TemplateId::Professional);
        assert_eq!(doc.accent.primary, "#1e40af");
    }

    #[test]
    fn test_render_row_query_overrides() {
        let stored = row(json!({}), "professional", "#1e40af");
        let doc = render_row(&stored, Some("minimal"), Some("#ff0000"));
        assert_eq!(doc.template, TemplateId::Minimal);
        assert_eq!(doc.accent.primary, "#ff0000");
    }

    #[test]
    fn test_render_row_blank_accent_uses_default() {
        let doc = render_row(&row(json!({}), "unknown", ""), None, None);
        assert_eq!(doc.template, TemplateId::Classic);
        assert_eq!(doc.accent.primary, DEFAULT_ACCENT_COLOR);
    }

    #[test]
    fn test_render_row_normalizes_stored_data() {
        let stored = row(
            json!({"personal_info": {"full_name": "Ann", "linkedin": "linked:ann"}}),
            "classic",
            "#000",
        );
        let doc = render_row(&stored, None, None);
        assert_eq!(doc.header.name, "Ann");
        assert_eq!(
            doc.contact(crate::render::document::ContactKind::Linkedin)
                .unwrap()
                .text,
            "ann"
        );
    }

    #[test]
    fn test_require_title() {
        assert_eq!(require_title("  CV  ").unwrap(), "CV");
        assert!(matches!(require_title("   "), Err(AppError::Validation(_))));
    }
}
