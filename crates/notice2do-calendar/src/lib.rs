//! Notice2Do Calendar Encoder
//!
//! Renders extracted tasks as an iCalendar (RFC 5545) document, one
//! instantaneous event per task with a parseable due date.
//!
//! # Architecture
//!
//! ```text
//! [TaskItem] → parse_due_local → VEVENT blocks → VCALENDAR text
//! ```
//!
//! The encoder never fails. Due dates come from model output and are
//! untrusted; anything that is not exactly `YYYY-MM-DD HH:MM` (or the same
//! with a `T` separator) is left out of the document.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use notice2do_calendar::{to_calendar_at, CalendarOptions};
//! use notice2do_domain::{Priority, TaskItem};
//!
//! let tasks = vec![
//!     TaskItem::new("Submit report", Priority::High).with_due("2025-03-10T09:00"),
//!     TaskItem::new("Read syllabus", Priority::Low),
//! ];
//! let generated_at = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
//!
//! let ics = to_calendar_at(&tasks, &CalendarOptions::default(), generated_at);
//! assert!(ics.contains("DTSTART;TZID=Asia/Seoul:20250310T090000"));
//! assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1);
//! ```

#![warn(missing_docs)]

mod encode;
mod parse;

pub use encode::{summary_text, to_calendar, to_calendar_at, CalendarOptions};
pub use parse::{parse_due_local, DUE_LOCAL_FORMAT};

/// Suggested download file name
pub const ICS_FILE_NAME: &str = "notice2do.ics";

/// Media type of the calendar document
pub const ICS_MEDIA_TYPE: &str = "text/calendar";

/// Zone used when the caller names none
pub const DEFAULT_ZONE_ID: &str = "Asia/Seoul";

/// PRODID of generated documents
pub const DEFAULT_PRODUCT_ID: &str = "-//Notice2Do//KR//EN";

/// SUMMARY used for tasks with an empty description
pub const DEFAULT_SUMMARY: &str = "할 일";
