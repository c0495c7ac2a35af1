//! Weekly aggregation: clamp reconstructed intervals to a week window and
//! sum their durations.

use super::reconstruct::reconstruct;
use crate::models::event::Event;
use crate::models::shift::Shift;
use crate::models::week::WeekWindow;
use chrono::NaiveDateTime;

/// Shifts of one department inside a week window, in chronological start
/// order. Open intervals end at `now`; anything clamped to zero or
/// negative length is omitted.
pub fn shifts_in_window(events: &[Event], window: &WeekWindow, now: NaiveDateTime) -> Vec<Shift> {
    let mut shifts = Vec::new();

    for interval in reconstruct(events) {
        let open = interval.end.is_none();
        let end = interval.end.unwrap_or(now);

        let clamped_start = interval.start.max(window.start);
        let clamped_end = end.min(window.end);

        if clamped_end > clamped_start {
            // num_seconds truncates toward zero, never rounds
            let seconds = (clamped_end - clamped_start).num_seconds();
            shifts.push(Shift {
                start: clamped_start,
                end: clamped_end,
                seconds,
                open,
            });
        }
    }

    shifts
}

/// Total clocked-in seconds over the window. Zero for an empty log.
pub fn total_seconds_in_window(events: &[Event], window: &WeekWindow, now: NaiveDateTime) -> i64 {
    shifts_in_window(events, window, now)
        .iter()
        .map(|s| s.seconds)
        .sum()
}
