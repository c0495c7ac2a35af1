//! Session reconstruction and toggle state machine tests.

use chrono::NaiveDateTime;
use shiftlogger::core::reconstruct::{is_clocked_in, open_since, reconstruct};
use shiftlogger::core::toggle::{ToggleLogic, ToggleOutcome};
use shiftlogger::models::action::Action;
use shiftlogger::models::event::Event;
use shiftlogger::store::EventStore;

mod common;
use common::setup_test_log;

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").expect("test datetime")
}

fn ev(ts: &str, action: Action) -> Event {
    Event::new(dt(ts), action, "Default")
}

#[test]
fn empty_log_has_no_intervals() {
    assert!(reconstruct(&[]).is_empty());
    assert!(open_since(&[]).is_none());
}

#[test]
fn single_in_yields_one_open_interval() {
    let events = vec![ev("2025-08-25T09:00:00", Action::In)];
    let intervals = reconstruct(&events);

    assert_eq!(intervals.len(), 1);
    assert_eq!(intervals[0].start, dt("2025-08-25T09:00:00"));
    assert!(intervals[0].end.is_none());
    assert!(is_clocked_in(&events));
}

#[test]
fn in_out_yields_one_closed_interval() {
    let events = vec![
        ev("2025-08-25T09:00:00", Action::In),
        ev("2025-08-25T17:00:00", Action::Out),
    ];
    let intervals = reconstruct(&events);

    assert_eq!(intervals.len(), 1);
    assert_eq!(intervals[0].end, Some(dt("2025-08-25T17:00:00")));
    assert!(!is_clocked_in(&events));
}

#[test]
fn stray_out_is_discarded() {
    let events = vec![ev("2025-08-25T10:00:00", Action::Out)];
    assert!(reconstruct(&events).is_empty());
}

#[test]
fn stray_out_between_sessions_is_discarded() {
    let events = vec![
        ev("2025-08-25T09:00:00", Action::In),
        ev("2025-08-25T12:00:00", Action::Out),
        ev("2025-08-25T12:30:00", Action::Out),
        ev("2025-08-25T13:00:00", Action::In),
        ev("2025-08-25T17:00:00", Action::Out),
    ];
    let intervals = reconstruct(&events);

    assert_eq!(intervals.len(), 2);
    assert_eq!(intervals[0].end, Some(dt("2025-08-25T12:00:00")));
    assert_eq!(intervals[1].start, dt("2025-08-25T13:00:00"));
}

#[test]
fn second_consecutive_in_discards_the_earlier_one() {
    let events = vec![
        ev("2025-08-25T09:00:00", Action::In),
        ev("2025-08-25T10:00:00", Action::In),
        ev("2025-08-25T12:00:00", Action::Out),
    ];
    let intervals = reconstruct(&events);

    assert_eq!(intervals.len(), 1);
    assert_eq!(intervals[0].start, dt("2025-08-25T10:00:00"));
    assert_eq!(intervals[0].end, Some(dt("2025-08-25T12:00:00")));
}

#[test]
fn open_since_only_when_last_event_is_in() {
    let clocked_in = vec![
        ev("2025-08-25T09:00:00", Action::In),
        ev("2025-08-25T12:00:00", Action::Out),
        ev("2025-08-25T13:00:00", Action::In),
    ];
    assert_eq!(open_since(&clocked_in), Some(dt("2025-08-25T13:00:00")));

    let clocked_out = vec![
        ev("2025-08-25T09:00:00", Action::In),
        ev("2025-08-25T12:00:00", Action::Out),
    ];
    assert!(open_since(&clocked_out).is_none());
}

#[test]
fn toggle_alternates_in_and_out() {
    let log_path = setup_test_log("toggle_alternates");
    let store = EventStore::open(&log_path).expect("open store");

    let first = ToggleLogic::apply(&store, "Default", dt("2025-08-25T09:00:00")).expect("toggle");
    assert_eq!(first, ToggleOutcome::ClockedIn { closed: None });

    let second = ToggleLogic::apply(&store, "Default", dt("2025-08-25T17:00:00")).expect("toggle");
    assert_eq!(second, ToggleOutcome::ClockedOut);

    let events = store.load("Default").expect("load");
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].action, Action::In);
    assert_eq!(events[1].action, Action::Out);
}

#[test]
fn toggle_into_another_department_closes_the_open_one() {
    let log_path = setup_test_log("toggle_switch");
    let store = EventStore::open(&log_path).expect("open store");

    ToggleLogic::apply(&store, "Police", dt("2025-08-25T09:00:00")).expect("toggle");
    let outcome = ToggleLogic::apply(&store, "EMS", dt("2025-08-25T09:05:00")).expect("toggle");

    assert_eq!(
        outcome,
        ToggleOutcome::ClockedIn {
            closed: Some("Police".to_string())
        }
    );

    // Police got an OUT at the switch instant; only EMS stays open
    let police = store.load("Police").expect("load");
    assert!(!is_clocked_in(&police));
    assert_eq!(police.last().map(|e| e.action), Some(Action::Out));
    assert_eq!(
        police.last().map(|e| e.timestamp),
        Some(dt("2025-08-25T09:05:00"))
    );
    assert!(is_clocked_in(&store.load("EMS").expect("load")));
}

#[test]
fn toggle_back_into_the_open_department_just_clocks_out() {
    let log_path = setup_test_log("toggle_same_department");
    let store = EventStore::open(&log_path).expect("open store");

    ToggleLogic::apply(&store, "Police", dt("2025-08-25T09:00:00")).expect("toggle");
    let outcome = ToggleLogic::apply(&store, "Police", dt("2025-08-25T12:00:00")).expect("toggle");

    assert_eq!(outcome, ToggleOutcome::ClockedOut);
    assert_eq!(store.load("Police").expect("load").len(), 2);
}
