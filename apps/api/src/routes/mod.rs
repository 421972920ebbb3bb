pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::ai::handlers as ai;
use crate::render::handlers as render;
use crate::resume::handlers as resumes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes();

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume storage
        .route(
            "/api/v1/resumes",
            post(resumes::handle_create_resume).get(resumes::handle_list_resumes),
        )
        .route(
            "/api/v1/resumes/:id",
            get(resumes::handle_get_resume)
                .put(resumes::handle_update_resume)
                .delete(resumes::handle_delete_resume),
        )
        .route(
            "/api/v1/resumes/:id/preview",
            get(resumes::handle_preview_resume),
        )
        .route(
            "/api/v1/resumes/public/:id",
            get(resumes::handle_get_public_resume),
        )
        .route("/view/:id", get(resumes::handle_view_resume))
        // AI features
        .route("/api/v1/ai/enhance-summary", post(ai::handle_enhance_summary))
        .route(
            "/api/v1/ai/enhance-job-description",
            post(ai::handle_enhance_job_description),
        )
        .route(
            "/api/v1/ai/enhance-project-description",
            post(ai::handle_enhance_project_description),
        )
        .route("/api/v1/ai/upload-resume", post(ai::handle_upload_resume))
        .route(
            "/api/v1/ai/upload-resume/pdf",
            post(ai::handle_upload_resume_pdf).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/ai/ats-scan", post(ai::handle_ats_scan))
        // Stateless rendering
        .merge(render::routes::<AppState>())
        .with_state(state)
}
