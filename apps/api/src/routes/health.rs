use axum::Json;
use serde_json::{json, Value};

use crate::render::TemplateId;

/// GET /health
/// Returns a status object with service version and the registered templates.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-api",
        "templates": TemplateId::ALL,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_lists_templates() {
        let Json(body) = health_handler().await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "resume-api");
        assert_eq!(body["templates"].as_array().unwrap().len(), 5);
        assert_eq!(body["templates"][3], "minimal-image");
    }
}
