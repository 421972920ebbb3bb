use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::CompletionOracle;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Completion service behind every AI feature. Production: the Gemini `LlmClient`.
    pub oracle: Arc<dyn CompletionOracle>,
    pub config: Config,
}
