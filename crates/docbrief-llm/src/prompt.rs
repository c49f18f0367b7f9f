//! Prompt construction for the summarization request.

/// Maximum number of characters of document text substituted into the prompt.
/// Longer documents are cut hard at this limit, mid-word if need be.
pub const MAX_DOCUMENT_CHARS: usize = 8000;

const TEMPLATE: &str = include_str!("./prompts/summarize_0.txt");

/// Render the instructional template with the document text substituted in.
pub fn build_prompt(document_text: &str) -> String {
    TEMPLATE.replace("{document}", truncate_chars(document_text, MAX_DOCUMENT_CHARS))
}

/// Truncate to the first `max` characters without splitting a code point.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
