//! ICS document generation

use crate::parse::parse_due_local;
use crate::{DEFAULT_PRODUCT_ID, DEFAULT_SUMMARY, DEFAULT_ZONE_ID};
use chrono::{DateTime, Utc};
use notice2do_domain::TaskItem;
use tracing::debug;

/// RFC 5545 line terminator
const CRLF: &str = "\r\n";

/// Basic-format UTC timestamp used for DTSTAMP
const UTC_STAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Basic-format local timestamp used for DTSTART/DTEND and the UID
const LOCAL_STAMP_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Rendering options for a calendar document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarOptions {
    /// TZID attached to every start and end time
    pub zone_id: String,

    /// PRODID of the document
    pub product_id: String,

    /// SUMMARY for tasks whose description is empty
    pub placeholder_summary: String,
}

impl CalendarOptions {
    /// Default options with a different zone
    pub fn new(zone_id: impl Into<String>) -> Self {
        Self {
            zone_id: zone_id.into(),
            ..Self::default()
        }
    }
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            zone_id: DEFAULT_ZONE_ID.to_string(),
            product_id: DEFAULT_PRODUCT_ID.to_string(),
            placeholder_summary: DEFAULT_SUMMARY.to_string(),
        }
    }
}

/// Render tasks as a calendar document stamped with the current time
///
/// See [`to_calendar_at`] for the rules.
pub fn to_calendar(tasks: &[TaskItem], zone_id: &str) -> String {
    to_calendar_at(tasks, &CalendarOptions::new(zone_id), Utc::now())
}

/// Render tasks as a calendar document stamped with `generated_at`
///
/// Tasks are visited in order. A task with no due date, or one that
/// [`parse_due_local`] rejects, produces no event. Every other task produces
/// one VEVENT whose start and end are the same instant, tagged with the
/// configured zone, and whose UID combines the task's index with its start
/// time. All events share one DTSTAMP. Same inputs give byte-identical
/// output.
pub fn to_calendar_at(
    tasks: &[TaskItem],
    options: &CalendarOptions,
    generated_at: DateTime<Utc>,
) -> String {
    let dtstamp = generated_at.format(UTC_STAMP_FORMAT).to_string();

    let mut lines: Vec<String> = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", options.product_id),
        "CALSCALE:GREGORIAN".to_string(),
    ];

    let mut emitted = 0;
    for (idx, task) in tasks.iter().enumerate() {
        let Some(raw_due) = task.due_local.as_deref() else {
            debug!(index = idx, "skipping task without due date");
            continue;
        };
        let Some(due) = parse_due_local(raw_due) else {
            debug!(index = idx, "skipping task with unparseable due date");
            continue;
        };

        let start = due.format(LOCAL_STAMP_FORMAT).to_string();
        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("UID:notice2do-{}-{}@local", idx, start));
        lines.push(format!("DTSTAMP:{}", dtstamp));
        lines.push(format!("DTSTART;TZID={}:{}", options.zone_id, start));
        lines.push(format!("DTEND;TZID={}:{}", options.zone_id, start));
        lines.push(format!(
            "SUMMARY:{}",
            summary_text(&task.task, &options.placeholder_summary)
        ));
        lines.push("END:VEVENT".to_string());
        emitted += 1;
    }

    lines.push("END:VCALENDAR".to_string());

    debug!("Encoded {} of {} tasks as events", emitted, tasks.len());

    lines.join(CRLF)
}

/// Collapse line breaks to spaces and trim; fall back to `placeholder` if
/// nothing is left
///
/// `\r\n` counts as one break.
///
/// # Examples
///
/// ```
/// use notice2do_calendar::summary_text;
///
/// assert_eq!(summary_text("Submit\nreport", "Task"), "Submit report");
/// assert_eq!(summary_text(" \r\n ", "Task"), "Task");
/// ```
pub fn summary_text(task: &str, placeholder: &str) -> String {
    let collapsed = task.replace("\r\n", " ").replace(|c: char| c == '\r' || c == '\n', " ");
    let trimmed = collapsed.trim();
    if trimmed.is_empty() {
        placeholder.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use notice2do_domain::Priority;

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 15).unwrap()
    }

    fn task(text: &str, due: Option<&str>) -> TaskItem {
        let item = TaskItem::new(text, Priority::Mid);
        match due {
            Some(due) => item.with_due(due),
            None => item,
        }
    }

    #[test]
    fn test_empty_task_list_is_header_and_footer() {
        let ics = to_calendar_at(&[], &CalendarOptions::default(), generated_at());
        assert_eq!(
            ics,
            "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//Notice2Do//KR//EN\r\nCALSCALE:GREGORIAN\r\nEND:VCALENDAR"
        );
    }

    #[test]
    fn test_single_event_exact_output() {
        let tasks = vec![task("Submit report", Some("2025-03-10T09:00"))];
        let ics = to_calendar_at(&tasks, &CalendarOptions::default(), generated_at());

        let expected = [
            "BEGIN:VCALENDAR",
            "VERSION:2.0",
            "PRODID:-//Notice2Do//KR//EN",
            "CALSCALE:GREGORIAN",
            "BEGIN:VEVENT",
            "UID:notice2do-0-20250310T090000@local",
            "DTSTAMP:20250301T123015Z",
            "DTSTART;TZID=Asia/Seoul:20250310T090000",
            "DTEND;TZID=Asia/Seoul:20250310T090000",
            "SUMMARY:Submit report",
            "END:VEVENT",
            "END:VCALENDAR",
        ]
        .join("\r\n");
        assert_eq!(ics, expected);
    }

    #[test]
    fn test_uid_uses_input_index() {
        let tasks = vec![
            task("no date", None),
            task("bad date", Some("soon")),
            task("dated", Some("2025-03-10 09:00")),
        ];
        let ics = to_calendar_at(&tasks, &CalendarOptions::default(), generated_at());
        assert!(ics.contains("UID:notice2do-2-20250310T090000@local"));
    }

    #[test]
    fn test_custom_zone_and_product() {
        let options = CalendarOptions {
            zone_id: "Europe/Berlin".to_string(),
            product_id: "-//Test//EN".to_string(),
            placeholder_summary: "Task".to_string(),
        };
        let tasks = vec![task("", Some("2025-07-01 08:15"))];
        let ics = to_calendar_at(&tasks, &options, generated_at());

        assert!(ics.contains("PRODID:-//Test//EN"));
        assert!(ics.contains("DTSTART;TZID=Europe/Berlin:20250701T081500"));
        assert!(ics.contains("DTEND;TZID=Europe/Berlin:20250701T081500"));
        assert!(ics.contains("SUMMARY:Task"));
    }

    #[test]
    fn test_to_calendar_uses_zone_argument() {
        let tasks = vec![task("Exam", Some("2025-06-20 14:00"))];
        let ics = to_calendar(&tasks, "America/New_York");
        assert!(ics.contains("DTSTART;TZID=America/New_York:20250620T140000"));
        assert!(ics.starts_with("BEGIN:VCALENDAR"));
        assert!(ics.ends_with("END:VCALENDAR"));
    }

    #[test]
    fn test_summary_text_collapses_breaks() {
        assert_eq!(summary_text("Submit\nreport", "x"), "Submit report");
        assert_eq!(summary_text("Submit\r\nreport", "x"), "Submit report");
        assert_eq!(summary_text("Submit\rreport", "x"), "Submit report");
        assert_eq!(summary_text("  a\n\nb  ", "x"), "a  b");
    }

    #[test]
    fn test_summary_text_placeholder() {
        assert_eq!(summary_text("", DEFAULT_SUMMARY), "할 일");
        assert_eq!(summary_text("\n\n", "Task"), "Task");
    }
}
