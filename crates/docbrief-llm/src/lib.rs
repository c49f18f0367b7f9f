use serde::{Deserialize, Serialize};

pub mod client;
pub mod interpret;
pub mod prompt;

pub use client::{ChatBackend, ChatClient, LlmError};
pub use interpret::{Interpretation, PARSE_FAILURE_SUMMARY, interpret_response};

/// Structured summary of a legal document.
///
/// Every field defaults to empty so the shape is always complete, even when
/// the model returned valid JSON with fields missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub key_legal_clauses: Vec<String>,
    #[serde(default)]
    pub flagged_clauses: Vec<String>,
    #[serde(default)]
    pub plain_english_explanation: String,
}
