/*!
 * Mock provider implementation for testing.
 *
 * - `MockProvider::working()` - prefixes the text with the target code, e.g. `[fr] Hello`
 * - `MockProvider::echo()` - returns the text unchanged
 * - `MockProvider::failing()` - always fails with an error
 * - `MockProvider::empty()` - returns an empty response error
 *
 * Every request is recorded so tests can assert on what reached the backend.
 */

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::errors::ProviderError;
use crate::providers::{Provider, TranslationRequest};

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Succeeds with `[<target>] <text>`
    Working,
    /// Succeeds with the input text
    Echo,
    /// Always fails with an error
    Failing,
    /// Answers without any text
    Empty,
}

/// Mock provider for testing translation behavior
#[derive(Debug, Clone)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Requests received so far
    requests: Arc<Mutex<Vec<TranslationRequest>>>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock provider that returns its input
    pub fn echo() -> Self {
        Self::new(MockBehavior::Echo)
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that returns empty responses
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Snapshot of the recorded requests
    pub fn requests(&self) -> Vec<TranslationRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Number of requests received
    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &str {
        "Mock"
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<String, ProviderError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        match self.behavior {
            MockBehavior::Working => Ok(format!("[{}] {}", request.target_language, request.text)),
            MockBehavior::Echo => Ok(request.text.clone()),
            MockBehavior::Failing => Err(ProviderError::ConnectionError(
                "Simulated provider failure".to_string(),
            )),
            MockBehavior::Empty => Err(ProviderError::EmptyResponse),
        }
    }
}
