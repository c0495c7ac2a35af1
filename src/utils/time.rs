//! Time utilities: HH:MM:SS formatting and date parsing for week navigation.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime};

/// Format a second count as `HH:MM:SS`. Hours are not wrapped at 24;
/// minutes and seconds are zero-padded to two digits.
pub fn format_seconds_hms(total_seconds: i64) -> String {
    let sign = if total_seconds < 0 { "-" } else { "" };
    let s = total_seconds.abs();
    format!("{}{:02}:{:02}:{:02}", sign, s / 3600, (s % 3600) / 60, s % 60)
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Validate an optional user-supplied reference date (week navigation).
pub fn parse_optional_date(input: Option<&String>) -> AppResult<Option<NaiveDate>> {
    if let Some(s) = input {
        let d = parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
        Ok(Some(d))
    } else {
        Ok(None)
    }
}

/// Current naive local wall-clock time, the evaluation instant for all
/// open-session math.
pub fn now_local() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}
