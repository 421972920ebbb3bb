//! Axum route handlers for the AI API.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::ai::ats::{self, AtsReport};
use crate::ai::enhance;
use crate::ai::parser::{extract_pdf_text, parse_resume_text};
use crate::errors::AppError;
use crate::render::{TemplateId, DEFAULT_ACCENT_COLOR};
use crate::resume::store::{self, NewResume};
use crate::resume::{normalize, to_plain_text};
use crate::state::AppState;

const DEFAULT_UPLOAD_TITLE: &str = "Imported Resume";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    #[serde(default)]
    pub user_content: String,
}

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub enhanced_content: String,
}

#[derive(Debug, Deserialize)]
pub struct UploadResumeRequest {
    pub user_id: Uuid,
    pub title: Option<String>,
    #[serde(default)]
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResumeResponse {
    pub resume_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct AtsScanRequest {
    pub resume_text: Option<String>,
    /// A raw ResumeRecord, used when `resume_text` is absent.
    pub resume: Option<Value>,
    pub job_description: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ai/enhance-summary
pub async fn handle_enhance_summary(
    State(state): State<AppState>,
    Json(request): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let content = require_content(&request.user_content)?;
    let enhanced_content = enhance::enhance_summary(state.oracle.as_ref(), content).await?;
    Ok(Json(EnhanceResponse { enhanced_content }))
}

/// POST /api/v1/ai/enhance-job-description
pub async fn handle_enhance_job_description(
    State(state): State<AppState>,
    Json(request): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let content = require_content(&request.user_content)?;
    let enhanced_content =
        enhance::enhance_job_description(state.oracle.as_ref(), content).await?;
    Ok(Json(EnhanceResponse { enhanced_content }))
}

/// POST /api/v1/ai/enhance-project-description
pub async fn handle_enhance_project_description(
    State(state): State<AppState>,
    Json(request): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let content = require_content(&request.user_content)?;
    let enhanced_content =
        enhance::enhance_project_description(state.oracle.as_ref(), content).await?;
    Ok(Json(EnhanceResponse { enhanced_content }))
}

/// POST /api/v1/ai/upload-resume
///
/// Parses pasted resume text into a record and stores it as a new resume.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Json(request): Json<UploadResumeRequest>,
) -> Result<(StatusCode, Json<UploadResumeResponse>), AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }
    import_resume(
        &state,
        request.user_id,
        request.title.as_deref(),
        &request.resume_text,
    )
    .await
}

/// POST /api/v1/ai/upload-resume/pdf
///
/// Multipart form: `file` (PDF bytes), `user_id`, optional `title`.
pub async fn handle_upload_resume_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResumeResponse>), AppError> {
    let mut file: Option<Vec<u8>> = None;
    let mut user_id: Option<Uuid> = None;
    let mut title: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read file: {e}")))?;
                file = Some(bytes.to_vec());
            }
            "user_id" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read user_id: {e}")))?;
                let id = Uuid::parse_str(text.trim())
                    .map_err(|_| AppError::Validation("user_id must be a UUID".to_string()))?;
                user_id = Some(id);
            }
            "title" => {
                title = field.text().await.ok();
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| AppError::Validation("file is required".to_string()))?;
    let user_id = user_id.ok_or_else(|| AppError::Validation("user_id is required".to_string()))?;

    let text = extract_pdf_text(file).await?;
    import_resume(&state, user_id, title.as_deref(), &text).await
}

/// POST /api/v1/ai/ats-scan
pub async fn handle_ats_scan(
    State(state): State<AppState>,
    Json(request): Json<AtsScanRequest>,
) -> Result<Json<AtsReport>, AppError> {
    let resume_text = resolve_resume_text(&request)?;
    let report = ats::scan(
        state.oracle.as_ref(),
        &resume_text,
        request.job_description.as_deref(),
    )
    .await?;
    Ok(Json(report))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn import_resume(
    state: &AppState,
    user_id: Uuid,
    title: Option<&str>,
    resume_text: &str,
) -> Result<(StatusCode, Json<UploadResumeResponse>), AppError> {
    let record = parse_resume_text(state.oracle.as_ref(), resume_text).await?;
    let title = title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_UPLOAD_TITLE);

    let row = store::insert_resume(
        &state.db,
        NewResume {
            user_id,
            title,
            data: &record,
            template: TemplateId::default().as_str(),
            accent_color: DEFAULT_ACCENT_COLOR,
        },
    )
    .await?;

    info!("Imported resume {} for user {}", row.id, user_id);
    Ok((StatusCode::CREATED, Json(UploadResumeResponse { resume_id: row.id })))
}

/// Text to score: explicit text wins; otherwise the record is exported as plain text.
fn resolve_resume_text(request: &AtsScanRequest) -> Result<String, AppError> {
    if let Some(text) = request.resume_text.as_deref().filter(|t| !t.trim().is_empty()) {
        return Ok(text.to_string());
    }
    if let Some(record) = &request.resume {
        let text = to_plain_text(&normalize(record));
        if !text.trim().is_empty() {
            return Ok(text);
        }
    }
    Err(AppError::Validation("Resume content is missing".to_string()))
}

fn require_content(content: &str) -> Result<&str, AppError> {
    if content.trim().is_empty() {
        return Err(AppError::Validation("user_content cannot be empty".to_string()));
    }
    Ok(content)
}
