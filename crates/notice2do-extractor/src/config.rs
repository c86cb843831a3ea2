//! Configuration for the Extractor

use serde::Deserialize;

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Minimum trimmed input length (characters) accepted by `guard_input`
    pub min_input_chars: usize,

    /// Maximum input text length (characters)
    pub max_input_chars: usize,

    /// Name attached to the output schema in the generation request
    pub schema_name: String,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_input_chars == 0 {
            return Err("max_input_chars must be greater than 0".to_string());
        }
        if self.min_input_chars > self.max_input_chars {
            return Err("min_input_chars cannot exceed max_input_chars".to_string());
        }
        if self.schema_name.is_empty() {
            return Err("schema_name must not be empty".to_string());
        }
        if !self
            .schema_name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(format!(
                "schema_name '{}' may only contain letters, digits, '_' and '-'",
                self.schema_name
            ));
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            min_input_chars: 30,
            max_input_chars: 50_000,
            schema_name: "notice2do".to_string(),
        }
    }
}
