//! AI-assisted features. Every call goes through a [`crate::llm_client::CompletionOracle`];
//! no scoring or parsing logic lives here beyond prompt assembly and reply cleanup.

pub mod ats;
pub mod enhance;
pub mod handlers;
pub mod parser;
pub mod prompts;
