//! Interpretation of raw model output as a structured summary.

use crate::SummaryResult;

/// Summary text used when the model output cannot be parsed as JSON.
pub const PARSE_FAILURE_SUMMARY: &str = "Failed to parse LLM response.";

/// Outcome of interpreting raw model output.
///
/// The fallback path is an explicit variant rather than a swallowed parse
/// error; callers that only want the value use [`into_summary`](Self::into_summary).
#[derive(Debug, Clone, PartialEq)]
pub enum Interpretation {
    /// The output parsed as JSON; fields the model omitted are empty.
    Parsed(SummaryResult),
    /// The output was not valid JSON; this is the fixed fallback value.
    Fallback(SummaryResult),
}

impl Interpretation {
    pub fn into_summary(self) -> SummaryResult {
        match self {
            Self::Parsed(summary) | Self::Fallback(summary) => summary,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Parse the model's text output, falling back to a fixed placeholder
/// summary when it is not valid JSON. Never fails.
pub fn interpret_response(raw: &str) -> Interpretation {
    match serde_json::from_str::<SummaryResult>(raw.trim()) {
        Ok(summary) => Interpretation::Parsed(summary),
        Err(e) => {
            tracing::warn!(error = %e, "model output was not valid JSON, using fallback");
            Interpretation::Fallback(SummaryResult {
                summary: PARSE_FAILURE_SUMMARY.to_string(),
                ..SummaryResult::default()
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_json_round_trips_unchanged() {
        let raw = r#"{
            "summary": "S",
            "key_legal_clauses": ["Clause A"],
            "flagged_clauses": [],
            "plain_english_explanation": "E"
        }"#;

        let interpretation = interpret_response(raw);
        assert!(!interpretation.is_fallback());

        let summary = interpretation.into_summary();
        assert_eq!(summary.summary, "S");
        assert_eq!(summary.key_legal_clauses, vec!["Clause A"]);
        assert!(summary.flagged_clauses.is_empty());
        assert_eq!(summary.plain_english_explanation, "E");
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let interpretation = interpret_response("\n  {\"summary\": \"S\"}  \n");
        assert!(!interpretation.is_fallback());
        assert_eq!(interpretation.into_summary().summary, "S");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let summary = interpret_response(r#"{"summary": "only this"}"#).into_summary();
        assert_eq!(summary.summary, "only this");
        assert!(summary.key_legal_clauses.is_empty());
        assert!(summary.flagged_clauses.is_empty());
        assert!(summary.plain_english_explanation.is_empty());
    }

    #[test]
    fn invalid_json_returns_the_fixed_fallback() {
        let interpretation = interpret_response("not json");
        assert!(interpretation.is_fallback());

        let summary = interpretation.into_summary();
        assert_eq!(summary.summary, PARSE_FAILURE_SUMMARY);
        assert!(summary.key_legal_clauses.is_empty());
        assert!(summary.flagged_clauses.is_empty());
        assert!(summary.plain_english_explanation.is_empty());
    }

    #[test]
    fn prose_around_json_still_falls_back() {
        let raw = "Here is your summary:\n{\"summary\": \"S\"}";
        assert!(interpret_response(raw).is_fallback());
    }
}
