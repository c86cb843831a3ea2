//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Credential missing, contaminated or malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generation backend failed or answered outside the schema
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Notice text too short to be worth a paid call
    #[error("Input too short: {chars} chars (min: {min})")]
    InputTooShort {
        /// Characters after trimming
        chars: usize,
        /// Required minimum
        min: usize,
    },

    /// Notice text exceeds the configured ceiling
    #[error("Text too long: {chars} chars (max: {max})")]
    TextTooLong {
        /// Characters in the submitted text
        chars: usize,
        /// Configured maximum
        max: usize,
    },
}
