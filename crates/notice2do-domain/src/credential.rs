//! Credential module - the generation backend secret

use std::fmt;

/// Secret used to authenticate against the generation backend
///
/// Deliberately has no `Display` impl and a redacted `Debug` impl so the
/// value cannot end up in logs or error messages.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap an already validated secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Expose the secret for the outbound request
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let credential = Credential::new("sk-very-secret");
        let debug = format!("{:?}", credential);
        assert_eq!(debug, "Credential(***)");
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_expose_returns_value() {
        let credential = Credential::new("sk-abc");
        assert_eq!(credential.expose(), "sk-abc");
    }
}
