use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use docbrief_core::{ChatBackend, LlmError};

/// A hand-rolled [`ChatBackend`] for tests: fixed response text or a
/// configured failure, with prompt recording.
pub struct MockChat {
    response: String,
    fail_with: Option<String>,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl MockChat {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            fail_with: None,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: String::new(),
            fail_with: Some(message.to_string()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl ChatBackend for MockChat {
    fn complete<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, LlmError>> + Send + 'a>> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let result = match &self.fail_with {
            Some(message) => Err(LlmError::Api {
                status: 500,
                message: message.clone(),
            }),
            None => Ok(self.response.clone()),
        };
        Box::pin(async move { result })
    }
}
