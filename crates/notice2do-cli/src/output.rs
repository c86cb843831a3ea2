//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use notice2do_domain::{NoticeRecord, Priority};
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an extracted record.
    pub fn format_record(&self, record: &NoticeRecord) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
            OutputFormat::Text => Ok(self.format_record_text(record)),
        }
    }

    /// Format a record as sections: title, summary, tasks, open questions.
    fn format_record_text(&self, record: &NoticeRecord) -> String {
        let mut out = String::new();

        out.push_str(&self.colorize(&record.title, "cyan"));
        out.push_str("\n\n");

        out.push_str("Summary\n");
        for bullet in &record.summary {
            out.push_str(&format!("  • {}\n", bullet));
        }
        out.push('\n');

        out.push_str("Tasks\n");
        out.push_str(&self.format_tasks_table(record));
        out.push('\n');

        out.push_str("\nNeeds checking\n");
        if record.uncertainties.is_empty() {
            out.push_str("  (none)\n");
        } else {
            for item in &record.uncertainties {
                out.push_str(&format!("  • {}\n", self.colorize(item, "yellow")));
            }
        }

        out
    }

    /// Format tasks as a table.
    fn format_tasks_table(&self, record: &NoticeRecord) -> String {
        let mut builder = Builder::default();
        builder.push_record(["", "Priority", "Task", "Due", "Evidence"]);

        for task in &record.tasks {
            let priority = self.colorize(task.priority.as_str(), priority_color(task.priority));
            builder.push_record([
                "[ ]",
                priority.as_str(),
                task.task.as_str(),
                task.due_local.as_deref().unwrap_or("-"),
                task.source_quote.as_str(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format the calendar-written message.
    pub fn calendar_written(&self, path: &Path, events: usize, tasks: usize) -> String {
        let msg = format!(
            "Calendar written to {} ({} of {} task(s) had a usable due date)",
            path.display(),
            events,
            tasks
        );
        if events == 0 {
            self.warning(&msg)
        } else {
            self.success(&msg)
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().bold().to_string(),
            _ => text.to_string(),
        }
    }
}

fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "red",
        Priority::Mid => "yellow",
        Priority::Low => "green",
    }
}
