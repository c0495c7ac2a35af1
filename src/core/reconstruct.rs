//! Session reconstruction: turn one department's sorted event sequence
//! into work intervals.

use crate::models::action::Action;
use crate::models::event::Event;
use chrono::NaiveDateTime;

/// A reconstructed IN→OUT pairing. `end == None` means the session is
/// still open and its end boundary is the evaluation instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
}

/// Pair chronologically sorted events into intervals.
///
/// A second IN with no OUT in between discards the earlier IN (the toggle
/// model assumes alternation); an OUT with no pending IN is dropped. By
/// construction only the last interval can be open.
pub fn reconstruct(events: &[Event]) -> Vec<Interval> {
    let mut intervals = Vec::new();
    let mut last_in: Option<NaiveDateTime> = None;

    for ev in events {
        match ev.action {
            Action::In => last_in = Some(ev.timestamp),
            Action::Out => {
                if let Some(start) = last_in.take() {
                    intervals.push(Interval {
                        start,
                        end: Some(ev.timestamp),
                    });
                }
            }
        }
    }

    if let Some(start) = last_in {
        intervals.push(Interval { start, end: None });
    }

    intervals
}

/// Start of the open session, when the last event is an unmatched IN.
pub fn open_since(events: &[Event]) -> Option<NaiveDateTime> {
    match events.last() {
        Some(ev) if ev.action == Action::In => Some(ev.timestamp),
        _ => None,
    }
}

pub fn is_clocked_in(events: &[Event]) -> bool {
    open_since(events).is_some()
}
