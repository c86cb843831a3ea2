//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::Credential;
use serde_json::Value;

/// One schema-constrained generation request
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredRequest {
    /// Name the backend attaches to the output schema
    pub schema_name: String,

    /// Fixed system instruction
    pub system: String,

    /// User message carrying the raw notice text
    pub user: String,

    /// JSON Schema the output must conform to exactly
    pub schema: Value,
}

/// Trait for schema-constrained generation backends
///
/// Implemented by the infrastructure layer (notice2do-llm). Implementations
/// must request strict schema mode; callers still validate what comes back.
pub trait StructuredGenerator {
    /// Error type for generation operations
    type Error;

    /// Issue exactly one generation call and return the raw JSON payload
    fn generate_structured(
        &self,
        credential: &Credential,
        request: &StructuredRequest,
    ) -> Result<String, Self::Error>;

    /// Name of the model answering requests
    fn model_name(&self) -> &str;
}
