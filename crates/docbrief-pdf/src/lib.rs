use docbrief_core::{ExtractError, TextExtractor};

/// PDF implementation of [`TextExtractor`], kept in its own crate so that
/// non-PDF code paths do not pull in the pdf-extract dependency.
///
/// Extraction works directly on the uploaded bytes; nothing touches disk.
#[derive(Debug, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractError::Extraction(e.to_string()))
    }
}
