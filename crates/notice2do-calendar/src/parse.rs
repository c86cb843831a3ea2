//! Due date parsing

use chrono::{Datelike, NaiveDateTime};

/// The only accepted layout, after `T` is normalized to a space
pub const DUE_LOCAL_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a model-supplied due date
///
/// Returns `None` for blanks, for the literal tokens `null` and `none`
/// (any case), and for anything that is not exactly `YYYY-MM-DD HH:MM` with
/// in-range values. A single `T` between date and time is accepted. There is
/// no fallback format: seconds, date-only values and other punctuation are
/// all rejected.
///
/// # Examples
///
/// ```
/// use notice2do_calendar::parse_due_local;
///
/// assert!(parse_due_local("2025-03-10 09:00").is_some());
/// assert!(parse_due_local(" 2025-03-10T09:00 ").is_some());
/// assert!(parse_due_local("2025/03/10 09:00").is_none());
/// assert!(parse_due_local("2025-03-10").is_none());
/// assert!(parse_due_local("NULL").is_none());
/// ```
pub fn parse_due_local(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("none")
    {
        return None;
    }

    let normalized = trimmed.replace('T', " ");
    if !has_expected_shape(&normalized) {
        return None;
    }

    NaiveDateTime::parse_from_str(&normalized, DUE_LOCAL_FORMAT)
        .ok()
        .filter(|due| due.year() >= MIN_YEAR)
}

/// Calendar years start at 1; chrono would otherwise accept year 0000.
const MIN_YEAR: i32 = 1;

/// chrono accepts single-digit fields and signed years, so the fixed
/// `DDDD-DD-DD DD:DD` layout is checked byte by byte first.
fn has_expected_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 16
        && bytes.iter().enumerate().all(|(idx, b)| match idx {
            4 | 7 => *b == b'-',
            10 => *b == b' ',
            13 => *b == b':',
            _ => b.is_ascii_digit(),
        })
}
