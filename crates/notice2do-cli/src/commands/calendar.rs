//! Calendar command implementation.

use super::{usable_due_dates, write_calendar};
use crate::cli::CalendarArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use notice2do_calendar::to_calendar;
use notice2do_domain::NoticeRecord;
use std::fs;
use std::path::Path;

/// Execute the calendar command.
pub fn execute_calendar(
    args: CalendarArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let record = load_record(&args.record)?;
    let zone = args.zone.as_deref().unwrap_or(&config.settings.zone_id);

    let ics = to_calendar(&record.tasks, zone);
    write_calendar(&args.ics, &ics)?;

    println!(
        "{}",
        formatter.calendar_written(&args.ics, usable_due_dates(&record.tasks), record.tasks.len())
    );

    Ok(())
}

/// Load and validate a saved record.
fn load_record(path: &Path) -> Result<NoticeRecord> {
    let json = fs::read_to_string(path)?;
    let record: NoticeRecord = serde_json::from_str(&json)?;
    record
        .validate()
        .map_err(|e| CliError::InvalidInput(format!("Invalid record {}: {}", path.display(), e)))?;
    Ok(record)
}
