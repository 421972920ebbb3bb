//! ATS report: an oracle-graded audit of a resume against a job description.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::ai::prompts::ATS_SCAN_PROMPT_TEMPLATE;
use crate::llm_client::{complete_json, CompletionOracle, LlmError};

pub const DEFAULT_JOB_DESCRIPTION: &str = "Generic technical role";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AtsReport {
    pub score: f64,
    pub metrics: AtsMetrics,
    pub keyword_gaps: Vec<KeywordGap>,
    /// Suggested rewrites in ResumeRecord shape. Passed through untouched.
    pub optimized_data: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtsMetrics {
    pub content: MetricScore,
    pub sections: MetricScore,
    pub contact: MetricScore,
    pub tailoring: MetricScore,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricScore {
    pub score: f64,
    pub wrong: String,
    pub fix: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordGap {
    pub skill: String,
}

/// Scores `resume_text` against `job_description` (or a generic role when absent).
pub async fn scan(
    oracle: &dyn CompletionOracle,
    resume_text: &str,
    job_description: Option<&str>,
) -> Result<AtsReport, LlmError> {
    let job_description = job_description
        .map(str::trim)
        .filter(|jd| !jd.is_empty())
        .unwrap_or(DEFAULT_JOB_DESCRIPTION);

    let prompt = ATS_SCAN_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description);

    let report: AtsReport = complete_json(oracle, &prompt).await?;
    info!(
        "ATS scan complete: score={}, keyword_gaps={}",
        report.score,
        report.keyword_gaps.len()
    );
    Ok(report)
}
