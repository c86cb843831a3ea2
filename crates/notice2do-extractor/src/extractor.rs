//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::credential::validate_credential;
use crate::error::ExtractorError;
use crate::parser::parse_notice_record;
use crate::prompt::PromptBuilder;
use notice2do_domain::{Credential, NoticeRecord, StructuredGenerator, StructuredRequest};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// The Extractor turns one notice into a validated `NoticeRecord`
pub struct Extractor<G>
where
    G: StructuredGenerator,
{
    generator: Arc<G>,
    config: ExtractorConfig,
}

impl<G> Extractor<G>
where
    G: StructuredGenerator + Send + Sync + 'static,
    G::Error: std::fmt::Display,
{
    /// Create a new Extractor
    pub fn new(generator: G, config: ExtractorConfig) -> Self {
        Self {
            generator: Arc::new(generator),
            config,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Name of the model behind the generator
    pub fn model_name(&self) -> &str {
        self.generator.model_name()
    }

    /// Extract a structured record from raw notice text
    ///
    /// The credential is checked before anything else; a `Config` error
    /// guarantees no request was sent. Exactly one generation call is made
    /// otherwise, with no retry.
    pub async fn extract(
        &self,
        raw_text: &str,
        credential: Option<&str>,
    ) -> Result<NoticeRecord, ExtractorError> {
        let credential = validate_credential(credential)?;

        let chars = raw_text.chars().count();
        if chars > self.config.max_input_chars {
            return Err(ExtractorError::TextTooLong {
                chars,
                max: self.config.max_input_chars,
            });
        }

        info!(
            "Starting extraction: {} chars, model '{}'",
            chars,
            self.model_name()
        );
        let start = Instant::now();

        let request = PromptBuilder::new(raw_text, self.config.schema_name.as_str()).build();
        debug!("User message length: {} chars", request.user.len());

        let payload = self.call_generator(credential, request).await?;
        debug!("Response length: {} chars", payload.len());

        let record = parse_notice_record(&payload)?;

        info!(
            "Extraction complete in {} ms: {} summary bullets, {} tasks, {} uncertainties",
            start.elapsed().as_millis(),
            record.summary.len(),
            record.tasks.len(),
            record.uncertainties.len()
        );

        Ok(record)
    }

    /// Call the generator on a blocking thread
    async fn call_generator(
        &self,
        credential: Credential,
        request: StructuredRequest,
    ) -> Result<String, ExtractorError> {
        let generator = Arc::clone(&self.generator);

        // StructuredGenerator is synchronous
        tokio::task::spawn_blocking(move || {
            generator
                .generate_structured(&credential, &request)
                .map_err(|e| ExtractorError::Upstream(e.to_string()))
        })
        .await
        .map_err(|e| ExtractorError::Upstream(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notice2do_llm::MockProvider;

    #[tokio::test]
    async fn test_extract_text_too_long() {
        let llm = MockProvider::new("{}");
        let config = ExtractorConfig {
            max_input_chars: 100,
            ..ExtractorConfig::default()
        };
        let extractor = Extractor::new(llm.clone(), config);

        let long_text = "a".repeat(101);
        let result = extractor.extract(&long_text, Some("sk-test")).await;

        assert!(matches!(
            result,
            Err(ExtractorError::TextTooLong { chars: 101, max: 100 })
        ));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_model_name_comes_from_generator() {
        let llm = MockProvider::new("{}").with_model_name("test-model");
        let extractor = Extractor::new(llm, ExtractorConfig::default());
        assert_eq!(extractor.model_name(), "test-model");
    }
}
