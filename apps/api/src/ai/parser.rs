//! Turns an uploaded resume (raw text or a PDF) into a ResumeRecord-shaped object.

use serde_json::Value;
use tracing::{debug, info};

use crate::ai::prompts::PARSE_RESUME_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::{complete_json, CompletionOracle};

/// Asks the oracle to structure `resume_text`. The reply must be a JSON object.
pub async fn parse_resume_text(
    oracle: &dyn CompletionOracle,
    resume_text: &str,
) -> Result<Value, AppError> {
    let prompt = PARSE_RESUME_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
    let record: Value = complete_json(oracle, &prompt).await?;

    if !record.is_object() {
        return Err(AppError::Llm(
            "Resume parser returned a non-object JSON value".to_string(),
        ));
    }

    info!(
        "Parsed resume text ({} chars) into {} top-level fields",
        resume_text.len(),
        record.as_object().map_or(0, |o| o.len())
    );
    Ok(record)
}

/// Extracts the text layer of a PDF on the blocking pool.
pub async fn extract_pdf_text(bytes: Vec<u8>) -> Result<String, AppError> {
    debug!("Extracting text from {} byte PDF", bytes.len());

    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}")))?
        .map_err(|e| AppError::UnprocessableEntity(format!("Could not read PDF: {e}")))?;

    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "The PDF contains no extractable text".to_string(),
        ));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;

    struct CannedOracle(&'static str);

    #[async_trait]
    impl CompletionOracle for CannedOracle {
        async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    #[tokio::test]
    async fn test_parse_resume_text_returns_object() {
        let oracle = CannedOracle(
            "```json\n{\"personal_info\": {\"full_name\": \"Jane Doe\"}, \"skills\": [\"Go\"]}\n```",
        );
        let record = parse_resume_text(&oracle, "Jane Doe\nGo developer").await.unwrap();
        assert_eq!(record["personal_info"]["full_name"], "Jane Doe");
    }

    #[tokio::test]
    async fn test_parse_resume_text_rejects_non_object() {
        let oracle = CannedOracle("[1, 2, 3]");
        let err = parse_resume_text(&oracle, "text").await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }

    #[tokio::test]
    async fn test_extract_pdf_text_rejects_garbage() {
        let err = extract_pdf_text(b"not a pdf".to_vec()).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::UnprocessableEntity(_) | AppError::Internal(_)
        ));
    }
}
