//! Notice2Do Extractor
//!
//! Converts free-text notices into structured records using a
//! schema-constrained LLM call.
//!
//! # Architecture
//!
//! ```text
//! Text → guard_input → Extractor → StructuredGenerator → NoticeRecord
//! ```
//!
//! # Key Features
//!
//! - **Credential checks first**: missing, non-ASCII or malformed keys fail before any request
//! - **Strict output schema**: closed objects and array bounds declared to the backend
//! - **Validation on receipt**: the payload is re-checked even though strict mode promises conformance
//! - **Single attempt**: one call per extraction, failures surfaced as-is
//!
//! # Example Usage
//!
//! ```no_run
//! use notice2do_extractor::{guard_input, Extractor, ExtractorConfig};
//! use notice2do_llm::OpenAiProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ExtractorConfig::default();
//! let extractor = Extractor::new(OpenAiProvider::new("gpt-4o-mini"), config);
//!
//! let notice = "Homework 4 is due 2025-03-10 09:00. Submit a PDF on the portal.";
//! guard_input(notice, extractor.config().min_input_chars)?;
//!
//! let api_key = std::env::var("OPENAI_API_KEY").ok();
//! let record = extractor.extract(notice, api_key.as_deref()).await?;
//!
//! println!("{}: {} tasks", record.title, record.tasks.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod credential;
mod error;
mod extractor;
mod input;
mod parser;
mod prompt;

#[cfg(test)]
mod tests;

pub use config::ExtractorConfig;
pub use credential::{validate_credential, CREDENTIAL_PREFIX};
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use input::guard_input;
pub use parser::parse_notice_record;
pub use prompt::{output_schema, PromptBuilder};
