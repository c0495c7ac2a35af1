use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

/// Half-open week window `[Monday 00:00:00, next Monday 00:00:00)`.
///
/// All arithmetic is naive wall-clock days: the window is always exactly
/// seven calendar days, regardless of DST shifts in the local timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl WeekWindow {
    /// Window of the week containing the given date (Monday-first week).
    pub fn containing(date: NaiveDate) -> Self {
        let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
        let start = monday.and_hms_opt(0, 0, 0).unwrap();
        Self {
            start,
            end: start + Duration::days(7),
        }
    }

    /// Window of the week containing `now`.
    pub fn current(now: NaiveDateTime) -> Self {
        Self::containing(now.date())
    }

    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        ts >= self.start && ts < self.end
    }

    /// Human label, e.g. `2025-08-25 → 2025-08-31`.
    pub fn label(&self) -> String {
        format!(
            "{} → {}",
            self.start.format("%Y-%m-%d"),
            (self.end - Duration::days(1)).format("%Y-%m-%d")
        )
    }
}
