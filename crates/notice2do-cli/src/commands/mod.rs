//! Command implementations.

pub mod calendar;
pub mod extract;

pub use self::calendar::execute_calendar;
pub use self::extract::execute_extract;

use crate::error::Result;
use notice2do_calendar::parse_due_local;
use notice2do_domain::TaskItem;
use std::fs;
use std::path::Path;

/// Number of tasks that will become calendar events.
fn usable_due_dates(tasks: &[TaskItem]) -> usize {
    tasks
        .iter()
        .filter(|t| t.due_local.as_deref().and_then(parse_due_local).is_some())
        .count()
}

/// Write an encoded calendar document.
fn write_calendar(path: &Path, ics: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, ics)?;
    Ok(())
}
