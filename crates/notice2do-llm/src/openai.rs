//! OpenAI Provider Implementation
//!
//! Calls the OpenAI Responses API with a strict `json_schema` text format, so
//! the backend itself rejects or repairs output that does not match the
//! declared schema.
//!
//! # Features
//!
//! - Async HTTP communication with the Responses API
//! - Configurable endpoint, model and optional request timeout
//! - Exactly one attempt per call (no retries)
//!
//! # Examples
//!
//! ```no_run
//! use notice2do_llm::OpenAiProvider;
//!
//! let provider = OpenAiProvider::new("gpt-4o-mini");
//!
//! // `generate` is async; the `StructuredGenerator` impl wraps it for
//! // synchronous callers.
//! ```

use crate::LlmError;
use notice2do_domain::{Credential, StructuredGenerator, StructuredRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Default OpenAI API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// Default model
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// OpenAI Responses API provider
pub struct OpenAiProvider {
    endpoint: String,
    model: String,
    client: reqwest::Client,
    timeout: Option<Duration>,
}

/// Request body for the Responses API
#[derive(Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: [InputMessage<'a>; 2],
    text: TextOptions<'a>,
}

#[derive(Serialize)]
struct InputMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct TextOptions<'a> {
    format: JsonSchemaFormat<'a>,
}

#[derive(Serialize)]
struct JsonSchemaFormat<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    name: &'a str,
    strict: bool,
    schema: &'a Value,
}

/// Response from the Responses API (only the fields we read)
#[derive(Deserialize)]
struct ResponsesResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error: Option<ApiError>,
    #[serde(default)]
    incomplete_details: Option<IncompleteDetails>,
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

#[derive(Deserialize)]
struct IncompleteDetails {
    #[serde(default)]
    reason: Option<String>,
}

#[derive(Deserialize)]
struct OutputItem {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Deserialize)]
struct ContentPart {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    refusal: Option<String>,
}

impl OpenAiProvider {
    /// Create a new provider for the given model on the default endpoint
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use notice2do_llm::OpenAiProvider;
    ///
    /// let provider = OpenAiProvider::new("gpt-4o-mini")
    ///     .with_endpoint("http://localhost:8080/v1");
    /// ```
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: model.into(),
            client: reqwest::Client::new(),
            timeout: None,
        }
    }

    /// Point the provider at a different API base URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Bound the request duration; without this the transport default applies
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Issue one strict structured-generation request
    ///
    /// # Returns
    ///
    /// The raw JSON text the model produced
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The endpoint cannot be reached
    /// - The backend answers with a non-success status
    /// - The model refuses or the response carries no output text
    pub async fn generate(
        &self,
        credential: &Credential,
        request: &StructuredRequest,
    ) -> Result<String, LlmError> {
        self.generate_with(&self.client, credential, request).await
    }

    async fn generate_with(
        &self,
        client: &reqwest::Client,
        credential: &Credential,
        request: &StructuredRequest,
    ) -> Result<String, LlmError> {
        let url = format!("{}/responses", self.endpoint);
        let body = build_request_body(&self.model, request);

        debug!(model = %self.model, schema = %request.schema_name, "sending structured generation request");

        let mut builder = client
            .post(&url)
            .bearer_auth(credential.expose())
            .json(&body);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status {
                reqwest::StatusCode::UNAUTHORIZED => LlmError::Unauthorized,
                reqwest::StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded,
                reqwest::StatusCode::NOT_FOUND => LlmError::ModelNotAvailable(self.model.clone()),
                _ => {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    LlmError::Communication(format!("HTTP {}: {}", status, error_text))
                }
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| LlmError::Communication(format!("Failed to read response: {}", e)))?;

        extract_output_text(&text)
    }
}

impl StructuredGenerator for OpenAiProvider {
    type Error = LlmError;

    fn generate_structured(
        &self,
        credential: &Credential,
        request: &StructuredRequest,
    ) -> Result<String, Self::Error> {
        // Blocking wrapper for the async call. Pooled connections are bound to
        // the runtime that opened them, so the client lives only as long as it.
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to start runtime: {}", e)))?;
        let client = reqwest::Client::new();
        runtime.block_on(self.generate_with(&client, credential, request))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

fn build_request_body<'a>(model: &'a str, request: &'a StructuredRequest) -> ResponsesRequest<'a> {
    ResponsesRequest {
        model,
        input: [
            InputMessage {
                role: "system",
                content: &request.system,
            },
            InputMessage {
                role: "user",
                content: &request.user,
            },
        ],
        text: TextOptions {
            format: JsonSchemaFormat {
                kind: "json_schema",
                name: &request.schema_name,
                strict: true,
                schema: &request.schema,
            },
        },
    }
}

/// Concatenate the `output_text` parts of a Responses API body
fn extract_output_text(body: &str) -> Result<String, LlmError> {
    let parsed: ResponsesResponse = serde_json::from_str(body)
        .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

    if let Some(error) = parsed.error {
        return Err(LlmError::InvalidResponse(error.message));
    }

    if parsed.status.as_deref() == Some("incomplete") {
        let reason = parsed
            .incomplete_details
            .and_then(|d| d.reason)
            .unwrap_or_else(|| "unknown".to_string());
        return Err(LlmError::InvalidResponse(format!("Incomplete response: {}", reason)));
    }

    let mut output = String::new();
    let mut found = false;
    for item in parsed.output.iter().filter(|item| item.kind == "message") {
        for part in &item.content {
            match part.kind.as_str() {
                "output_text" => {
                    output.push_str(part.text.as_deref().unwrap_or_default());
                    found = true;
                }
                "refusal" => {
                    return Err(LlmError::Refused(part.refusal.clone().unwrap_or_default()));
                }
                _ => {}
            }
        }
    }

    if !found {
        return Err(LlmError::InvalidResponse("No output_text in response".to_string()));
    }

    Ok(output)
}
