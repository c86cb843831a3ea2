//! Prompt and output schema for notice extraction

use notice2do_domain::record::{SUMMARY_MAX, SUMMARY_MIN, TASKS_MAX, TASKS_MIN};
use notice2do_domain::{Priority, StructuredRequest};
use serde_json::{json, Value};

/// Builds the structured generation request for one notice
pub struct PromptBuilder {
    text: String,
    schema_name: String,
}

impl PromptBuilder {
    /// Create a new prompt builder
    pub fn new(text: impl Into<String>, schema_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            schema_name: schema_name.into(),
        }
    }

    /// Build the user message wrapping the raw notice
    pub fn user_message(&self) -> String {
        format!("[Notice]\n{}\n", self.text)
    }

    /// Build the complete request
    pub fn build(&self) -> StructuredRequest {
        StructuredRequest {
            schema_name: self.schema_name.clone(),
            system: SYSTEM_INSTRUCTION.to_string(),
            user: self.user_message(),
            schema: output_schema(),
        }
    }
}

/// JSON Schema the generation backend must satisfy in strict mode
///
/// Every object closes `additionalProperties` and lists all of its
/// properties as required; `due_local` is nullable rather than optional.
pub fn output_schema() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "title": {"type": "string"},
            "summary": {
                "type": "array",
                "items": {"type": "string"},
                "minItems": SUMMARY_MIN,
                "maxItems": SUMMARY_MAX
            },
            "tasks": {
                "type": "array",
                "minItems": TASKS_MIN,
                "maxItems": TASKS_MAX,
                "items": {
                    "type": "object",
                    "additionalProperties": false,
                    "properties": {
                        "task": {"type": "string"},
                        "due_local": {"anyOf": [{"type": "string"}, {"type": "null"}]},
                        "priority": {"type": "string", "enum": Priority::ALL.map(|p| p.as_str())},
                        "source_quote": {"type": "string"}
                    },
                    "required": ["task", "due_local", "priority", "source_quote"]
                }
            },
            "uncertainties": {"type": "array", "items": {"type": "string"}}
        },
        "required": ["title", "summary", "tasks", "uncertainties"]
    })
}

const SYSTEM_INSTRUCTION: &str = r#"You are an assistant that organizes notices and assignment announcements.

Rules:
- Use only information that appears in the notice text.
- If a date or time cannot be verified directly from the text, set due_local to null. Never guess or infer one.
- When a date and time are both stated, write due_local as YYYY-MM-DD HH:MM in the notice's local time.
- Keep summary bullets short and clear.
- Phrase every task as a concrete, actionable step.
- Quote the supporting sentence verbatim in source_quote, or leave it empty.
- List anything ambiguous or missing in uncertainties."#;
