//! The IN/OUT toggle state machine. Stateless between calls: the clock
//! state of a department is always re-derived from the log.

use super::reconstruct::is_clocked_in;
use crate::errors::AppResult;
use crate::models::action::Action;
use crate::store::EventStore;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// `closed` names the other department whose open session was ended
    /// as part of the switch, if there was one.
    ClockedIn { closed: Option<String> },
    ClockedOut,
}

pub struct ToggleLogic;

impl ToggleLogic {
    /// Flip the clock state of one department.
    ///
    /// Normal usage keeps at most one department open at a time: clocking
    /// in while another department's session is open first appends an OUT
    /// to that department, then the IN.
    ///
    /// The next action is derived from a fresh read of the log, appended,
    /// and the resulting state re-derived from another read. The log, not
    /// process memory, is the source of truth; a failed append therefore
    /// never reports a successful clock action.
    pub fn apply(store: &EventStore, department: &str, now: NaiveDateTime) -> AppResult<ToggleOutcome> {
        let events = store.load(department)?;

        if is_clocked_in(&events) {
            store.append(Action::Out, department, now)?;
            let reread = store.load(department)?;
            if is_clocked_in(&reread) {
                return Ok(ToggleOutcome::ClockedIn { closed: None });
            }
            return Ok(ToggleOutcome::ClockedOut);
        }

        let closed = match store.current_open_department()? {
            Some(open) if open != department => {
                store.append(Action::Out, &open, now)?;
                Some(open)
            }
            _ => None,
        };

        store.append(Action::In, department, now)?;

        let reread = store.load(department)?;
        Ok(if is_clocked_in(&reread) {
            ToggleOutcome::ClockedIn { closed }
        } else {
            ToggleOutcome::ClockedOut
        })
    }
}
