//! Record module - the structured result of extracting one notice

use crate::Priority;
use serde::{Deserialize, Deserializer, Serialize};

/// Minimum number of summary bullets
pub const SUMMARY_MIN: usize = 3;

/// Maximum number of summary bullets
pub const SUMMARY_MAX: usize = 8;

/// Minimum number of tasks
pub const TASKS_MIN: usize = 1;

/// Maximum number of tasks
pub const TASKS_MAX: usize = 10;

/// Structured view of a single notice
///
/// Unknown fields are rejected during deserialization, matching the
/// `additionalProperties: false` contract declared to the backend.
///
/// # Examples
///
/// ```
/// use notice2do_domain::NoticeRecord;
///
/// let json = r#"{
///     "title": "Midterm report",
///     "summary": ["Report due Friday", "Upload as PDF", "Max 5 pages"],
///     "tasks": [{
///         "task": "Upload the report",
///         "due_local": "2025-03-14 23:59",
///         "priority": "high",
///         "source_quote": "due Friday 23:59"
///     }],
///     "uncertainties": []
/// }"#;
///
/// let record: NoticeRecord = serde_json::from_str(json).unwrap();
/// assert!(record.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoticeRecord {
    /// Short title for the notice
    pub title: String,

    /// Ordered summary bullets
    pub summary: Vec<String>,

    /// Ordered actionable tasks
    pub tasks: Vec<TaskItem>,

    /// Ambiguous or missing information worth double-checking
    pub uncertainties: Vec<String>,
}

/// One actionable item extracted from a notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskItem {
    /// Imperative description of what to do
    pub task: String,

    /// Due date-time in the notice's local convention, or `None`
    ///
    /// The key itself is mandatory; only its value may be `null`.
    #[serde(deserialize_with = "required_nullable")]
    pub due_local: Option<String>,

    /// Urgency level
    pub priority: Priority,

    /// Verbatim excerpt supporting the task (may be empty)
    pub source_quote: String,
}

impl TaskItem {
    /// Create a task without a due date or supporting quote
    pub fn new(task: impl Into<String>, priority: Priority) -> Self {
        Self {
            task: task.into(),
            due_local: None,
            priority,
            source_quote: String::new(),
        }
    }

    /// Set the local due date-time
    pub fn with_due(mut self, due_local: impl Into<String>) -> Self {
        self.due_local = Some(due_local.into());
        self
    }

    /// Set the supporting quote
    pub fn with_quote(mut self, quote: impl Into<String>) -> Self {
        self.source_quote = quote.into();
        self
    }
}

impl NoticeRecord {
    /// Check the bounds the output schema promises
    ///
    /// Strict generation is supposed to guarantee these already; the check
    /// runs again on receipt because the payload comes from a third party.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title is empty".to_string());
        }
        if self.summary.len() < SUMMARY_MIN || self.summary.len() > SUMMARY_MAX {
            return Err(format!(
                "summary has {} items (expected {}..={})",
                self.summary.len(),
                SUMMARY_MIN,
                SUMMARY_MAX
            ));
        }
        if self.tasks.len() < TASKS_MIN || self.tasks.len() > TASKS_MAX {
            return Err(format!(
                "tasks has {} items (expected {}..={})",
                self.tasks.len(),
                TASKS_MIN,
                TASKS_MAX
            ));
        }
        for (idx, task) in self.tasks.iter().enumerate() {
            if task.task.trim().is_empty() {
                return Err(format!("task {} has an empty description", idx));
            }
        }
        Ok(())
    }
}

/// `Option` fields default to `None` when the key is absent; routing through
/// a custom deserializer turns a missing key into a "missing field" error.
fn required_nullable<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}
