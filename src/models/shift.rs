use crate::utils::time::format_seconds_hms;
use chrono::NaiveDateTime;
use serde::Serialize;

/// A work interval clamped to a week window. Derived for display and
/// aggregation only, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shift {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub seconds: i64,
    /// True when the end boundary is "now" rather than a stored OUT event.
    pub open: bool,
}

impl Shift {
    pub fn start_str(&self) -> String {
        self.start.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn duration_hms(&self) -> String {
        format_seconds_hms(self.seconds)
    }
}
