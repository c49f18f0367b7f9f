use std::sync::Arc;

use thiserror::Error;

use docbrief_llm::{ChatBackend, LlmError, SummaryResult, interpret_response, prompt};

use crate::extract::{ExtractError, TextExtractor};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("text extraction failed: {0}")]
    Extraction(#[from] ExtractError),
    #[error(transparent)]
    Llm(#[from] LlmError),
}

/// The document summarization pipeline.
///
/// Runs upload bytes through extraction, prompt construction, a single
/// completion call, and interpretation. Failures up to and including the
/// completion call reject the request; a completion that is not valid JSON
/// is absorbed into the fallback summary instead.
pub struct SummaryPipeline {
    extractor: Arc<dyn TextExtractor>,
    chat: Arc<dyn ChatBackend>,
}

impl SummaryPipeline {
    pub fn new(extractor: Arc<dyn TextExtractor>, chat: Arc<dyn ChatBackend>) -> Self {
        Self { extractor, chat }
    }

    pub async fn summarize(&self, file_bytes: &[u8]) -> Result<SummaryResult, PipelineError> {
        let text = self.extractor.extract_text(file_bytes)?;
        tracing::debug!(chars = text.chars().count(), "extracted document text");

        let prompt = prompt::build_prompt(&text);
        let raw = self.chat.complete(&prompt).await?;
        tracing::info!(bytes = raw.len(), "received completion");

        Ok(interpret_response(&raw).into_summary())
    }
}
