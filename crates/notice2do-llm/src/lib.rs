//! Notice2Do LLM Provider Layer
//!
//! Implementations of the `StructuredGenerator` trait from `notice2do-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OpenAiProvider`: OpenAI Responses API with strict JSON-schema output
//!
//! # Examples
//!
//! ```
//! use notice2do_domain::{Credential, StructuredGenerator, StructuredRequest};
//! use notice2do_llm::MockProvider;
//!
//! let provider = MockProvider::new(r#"{"ok": true}"#);
//! let request = StructuredRequest {
//!     schema_name: "demo".to_string(),
//!     system: "system".to_string(),
//!     user: "user".to_string(),
//!     schema: serde_json::json!({"type": "object"}),
//! };
//! let credential = Credential::new("sk-test");
//! let result = provider.generate_structured(&credential, &request).unwrap();
//! assert_eq!(result, r#"{"ok": true}"#);
//! ```

#![warn(missing_docs)]

pub mod openai;

use notice2do_domain::{Credential, StructuredGenerator, StructuredRequest};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use openai::OpenAiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Backend rejected the credential
    #[error("Unauthorized: the backend rejected the credential")]
    Unauthorized,

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Model declined to answer
    #[error("Model refused: {0}")]
    Refused(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured payloads without making any network calls, and
/// remembers how often it was called and with what.
///
/// # Examples
///
/// ```
/// use notice2do_domain::{Credential, StructuredGenerator, StructuredRequest};
/// use notice2do_llm::MockProvider;
///
/// let mut provider = MockProvider::default();
/// provider.add_response("notice A", "payload A");
/// provider.add_error("notice B");
///
/// let credential = Credential::new("sk-test");
/// let mut request = StructuredRequest {
///     schema_name: "demo".to_string(),
///     system: String::new(),
///     user: "notice A".to_string(),
///     schema: serde_json::json!({}),
/// };
/// assert_eq!(provider.generate_structured(&credential, &request).unwrap(), "payload A");
///
/// request.user = "notice B".to_string();
/// assert!(provider.generate_structured(&credential, &request).is_err());
/// assert_eq!(provider.call_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    model_name: String,
    responses: Arc<Mutex<HashMap<String, MockReply>>>,
    call_count: Arc<Mutex<usize>>,
    last_request: Arc<Mutex<Option<StructuredRequest>>>,
}

#[derive(Debug, Clone)]
enum MockReply {
    Payload(String),
    Error,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed payload for all requests
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            model_name: "mock".to_string(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Set the model name reported to callers
    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// Add a specific payload for a given user message
    pub fn add_response(&mut self, user: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(user.into(), MockReply::Payload(response.into()));
    }

    /// Configure to return an error for a specific user message
    pub fn add_error(&mut self, user: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(user.into(), MockReply::Error);
    }

    /// Get the number of times generate_structured was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }

    /// The most recent request received, if any
    pub fn last_request(&self) -> Option<StructuredRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("{}")
    }
}

impl StructuredGenerator for MockProvider {
    type Error = LlmError;

    fn generate_structured(
        &self,
        _credential: &Credential,
        request: &StructuredRequest,
    ) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;
        *self.last_request.lock().unwrap() = Some(request.clone());

        let responses = self.responses.lock().unwrap();
        match responses.get(&request.user) {
            Some(MockReply::Payload(payload)) => Ok(payload.clone()),
            Some(MockReply::Error) => Err(LlmError::Communication("Mock error".to_string())),
            None => Ok(self.default_response.clone()),
        }
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
