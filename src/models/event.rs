use super::action::Action;
use chrono::NaiveDateTime;

/// Fixed timestamp format of the on-disk log (naive local time, second resolution).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Reserved label applied when a row carries no department.
pub const DEFAULT_DEPARTMENT: &str = "Default";

/// One clock action as stored in the event log. Immutable once written.
#[derive(Debug, Clone)]
pub struct Event {
    pub timestamp: NaiveDateTime,
    pub action: Action,
    pub department: String,
}

impl Event {
    pub fn new(timestamp: NaiveDateTime, action: Action, department: &str) -> Self {
        Self {
            timestamp,
            action,
            department: Self::normalize_department(department),
        }
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT).ok()
    }

    /// A blank department always reads back as the reserved default label.
    pub fn normalize_department(s: &str) -> String {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            DEFAULT_DEPARTMENT.to_string()
        } else {
            trimmed.to_string()
        }
    }
}
