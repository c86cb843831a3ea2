//! Priority module - urgency level attached to every task

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority of a task as judged from the notice
///
/// The set is closed: a value outside `high`/`mid`/`low` fails
/// deserialization instead of being mapped to a new category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Must be handled first
    High,
    /// Normal urgency
    Mid,
    /// Can wait
    Low,
}

impl Priority {
    /// All priorities, highest first
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Mid, Priority::Low];

    /// Get the wire name of this priority
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Mid => "mid",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_wire_names() {
        for priority in Priority::ALL {
            let json = format!("\"{}\"", priority.as_str());
            assert_eq!(serde_json::from_str::<Priority>(&json).unwrap(), priority);
            assert_eq!(priority.to_string(), priority.as_str());
        }
    }

    #[test]
    fn test_priority_serde_lowercase() {
        let json = serde_json::to_string(&Priority::Mid).unwrap();
        assert_eq!(json, "\"mid\"");

        let parsed: Priority = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(parsed, Priority::High);
    }

    #[test]
    fn test_unknown_priority_rejected() {
        assert!(serde_json::from_str::<Priority>("\"urgent\"").is_err());
        assert!(serde_json::from_str::<Priority>("\"High\"").is_err());
        assert!(serde_json::from_str::<Priority>("\"medium\"").is_err());
    }
}
