use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to extract text: {0}")]
    Extraction(String),
}

/// Trait for document text extraction backends.
///
/// Implementors convert raw document bytes into plain text. Extraction is
/// all-or-nothing: failure is propagated, there is no partial-text recovery.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractError>;
}
