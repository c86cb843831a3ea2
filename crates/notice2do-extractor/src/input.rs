//! Caller-side input guard

use crate::error::ExtractorError;

/// Reject notices too short to be worth a generation call
///
/// Not part of `Extractor::extract`: callers run it on the raw submission
/// before spending a paid request. Length is counted in characters of the
/// trimmed text.
pub fn guard_input(text: &str, min_chars: usize) -> Result<(), ExtractorError> {
    let chars = text.trim().chars().count();
    if chars < min_chars {
        return Err(ExtractorError::InputTooShort {
            chars,
            min: min_chars,
        });
    }
    Ok(())
}
