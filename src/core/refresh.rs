//! Live-refresh contract: a full stateless recomputation of everything the
//! presentation layer displays.
//!
//! The core owns no timers. An external scheduler (the `watch` command, or
//! any UI tick) calls `refresh` at its own cadence and immediately after
//! every state-changing action; no cached total is trusted between calls.

use super::aggregate::shifts_in_window;
use super::reconstruct::open_since;
use crate::errors::AppResult;
use crate::models::shift::Shift;
use crate::models::week::WeekWindow;
use crate::store::EventStore;
use chrono::NaiveDateTime;

#[derive(Debug, Clone)]
pub struct Snapshot {
    pub department: String,
    pub clocked_in: bool,
    pub open_since: Option<NaiveDateTime>,
    pub window: WeekWindow,
    pub shifts: Vec<Shift>,
    pub total_seconds: i64,
    /// Department whose log currently ends in an unmatched IN, across the
    /// whole store (the displayed "clocked in elsewhere" hint).
    pub open_department: Option<String>,
}

pub struct RefreshLogic;

impl RefreshLogic {
    pub fn refresh(
        store: &EventStore,
        department: &str,
        window: &WeekWindow,
        now: NaiveDateTime,
    ) -> AppResult<Snapshot> {
        let events = store.load(department)?;
        let shifts = shifts_in_window(&events, window, now);
        let total_seconds = shifts.iter().map(|s| s.seconds).sum();
        let since = open_since(&events);

        Ok(Snapshot {
            department: department.to_string(),
            clocked_in: since.is_some(),
            open_since: since,
            window: *window,
            shifts,
            total_seconds,
            open_department: store.current_open_department()?,
        })
    }
}
