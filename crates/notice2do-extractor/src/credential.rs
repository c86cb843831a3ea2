//! Credential checks that run before any network call

use crate::error::ExtractorError;
use notice2do_domain::Credential;

/// Prefix every provider key carries
pub const CREDENTIAL_PREFIX: &str = "sk-";

/// Maximum number of offending characters listed in an error
const MAX_REPORTED: usize = 10;

/// Validate a raw credential and wrap it
///
/// Checks, in order: present and non-empty after trimming, 7-bit ASCII only,
/// expected prefix. Error messages never include the credential itself; for
/// non-ASCII contamination they list `(char index, code point)` pairs so
/// invisible characters such as a byte-order mark can be located.
///
/// # Examples
///
/// ```
/// use notice2do_extractor::validate_credential;
///
/// assert!(validate_credential(Some("  sk-abc123  ")).is_ok());
/// assert!(validate_credential(None).is_err());
/// assert!(validate_credential(Some("\u{feff}sk-abc123")).is_err());
/// assert!(validate_credential(Some("pk-abc123")).is_err());
/// ```
pub fn validate_credential(raw: Option<&str>) -> Result<Credential, ExtractorError> {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(ExtractorError::Config("missing credential".to_string()));
    }

    let offending: Vec<(usize, u32)> = trimmed
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_ascii())
        .map(|(idx, c)| (idx, c as u32))
        .collect();
    if !offending.is_empty() {
        let listed: Vec<String> = offending
            .iter()
            .take(MAX_REPORTED)
            .map(|(idx, code)| format!("({}, {})", idx, code))
            .collect();
        return Err(ExtractorError::Config(format!(
            "credential contains {} non-ASCII character(s) at (position, code point): [{}] \
             (65279 is a byte-order mark, 8203 a zero-width space)",
            offending.len(),
            listed.join(", ")
        )));
    }

    if !trimmed.starts_with(CREDENTIAL_PREFIX) {
        return Err(ExtractorError::Config(format!(
            "malformed credential: expected a key starting with '{}'",
            CREDENTIAL_PREFIX
        )));
    }

    Ok(Credential::new(trimmed))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn any_non_ascii_char_is_rejected(
            prefix in "[a-zA-Z0-9]{0,8}",
            bad in any::<char>().prop_filter("non-ascii, non-space", |c| !c.is_ascii() && !c.is_whitespace()),
            suffix in "[a-zA-Z0-9]{0,8}",
        ) {
            let raw = format!("sk-{}{}{}", prefix, bad, suffix);
            let is_config_error = matches!(
                validate_credential(Some(&raw)),
                Err(ExtractorError::Config(_))
            );
            prop_assert!(is_config_error);
        }

        #[test]
        fn keys_without_prefix_are_rejected(key in "[a-zA-Z0-9_-]{1,40}") {
            prop_assume!(!key.starts_with(CREDENTIAL_PREFIX));
            let is_config_error = matches!(
                validate_credential(Some(&key)),
                Err(ExtractorError::Config(_))
            );
            prop_assert!(is_config_error);
        }
    }
}
