use std::sync::{Arc, Mutex};

use docbrief_core::{ExtractError, TextExtractor};

/// A [`TextExtractor`] that returns canned text (or fails) and records the
/// byte payloads it was handed.
pub struct MockExtractor {
    text: String,
    fail_with: Option<String>,
    pub calls: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MockExtractor {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            fail_with: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            text: String::new(),
            fail_with: Some(message.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl TextExtractor for MockExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        self.calls.lock().unwrap().push(bytes.to_vec());
        match &self.fail_with {
            Some(message) => Err(ExtractError::Extraction(message.clone())),
            None => Ok(self.text.clone()),
        }
    }
}
