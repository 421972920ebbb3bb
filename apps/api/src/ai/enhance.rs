//! Rewrites of individual resume fields by the completion oracle.
//!
//! Each rewrite sends a fixed prompt and post-processes the reply into the shape
//! the editor stores: a plain paragraph, or one bullet per line.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ai::prompts::{
    ENHANCE_JOB_DESCRIPTION_PROMPT_TEMPLATE, ENHANCE_PROJECT_DESCRIPTION_PROMPT_TEMPLATE,
    ENHANCE_SUMMARY_PROMPT_TEMPLATE,
};
use crate::llm_client::{strip_json_fences, CompletionOracle, LlmError};

static BULLET_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\s*#•-]+").expect("valid bullet marker pattern"));

static FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```[a-zA-Z]*").expect("valid fence pattern"));

pub async fn enhance_summary(
    oracle: &dyn CompletionOracle,
    content: &str,
) -> Result<String, LlmError> {
    let prompt = ENHANCE_SUMMARY_PROMPT_TEMPLATE.replace("{content}", content);
    let reply = oracle.complete(&prompt).await?;
    Ok(clean_summary(&reply))
}

pub async fn enhance_job_description(
    oracle: &dyn CompletionOracle,
    content: &str,
) -> Result<String, LlmError> {
    let prompt = ENHANCE_JOB_DESCRIPTION_PROMPT_TEMPLATE.replace("{content}", content);
    let reply = oracle.complete(&prompt).await?;
    Ok(clean_bullets(&reply))
}

pub async fn enhance_project_description(
    oracle: &dyn CompletionOracle,
    content: &str,
) -> Result<String, LlmError> {
    let prompt = ENHANCE_PROJECT_DESCRIPTION_PROMPT_TEMPLATE.replace("{content}", content);
    let reply = oracle.complete(&prompt).await?;
    Ok(clean_paragraph_lines(&reply))
}

fn clean_summary(reply: &str) -> String {
    strip_json_fences(reply).to_string()
}

/// One bullet per line, with code fences and leading list markers removed.
fn clean_bullets(reply: &str) -> String {
    FENCE
        .replace_all(reply, "")
        .lines()
        .map(|line| BULLET_MARKER.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// CRLF normalized, blank lines collapsed, outer whitespace trimmed.
fn clean_paragraph_lines(reply: &str) -> String {
    reply
        .replace("\r\n", "\n")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
