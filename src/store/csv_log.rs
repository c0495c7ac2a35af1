//! CSV-backed event store: a durable, append-only table of clock actions,
//! logically partitioned by department.
//!
//! The store is tolerant on read (hand-edited or partially written rows are
//! skipped) and strict on write (append failures propagate to the caller,
//! so the UI never claims a clock action that did not durably land).

use crate::errors::AppResult;
use crate::models::action::Action;
use crate::models::event::Event;
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

const LOG_HEADER: [&str; 3] = ["timestamp", "action", "department"];

pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Open the store for use: create it with its header if this is the
    /// first run, then normalize any legacy on-disk shape.
    pub fn open<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let store = Self::new(path);
        store.ensure_exists()?;
        store.migrate_if_needed()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the log file with its header row if it does not exist yet.
    pub fn ensure_exists(&self) -> AppResult<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut wtr = csv::Writer::from_path(&self.path)?;
        wtr.write_record(LOG_HEADER)?;
        wtr.flush()?;
        Ok(())
    }

    /// Rewrite a legacy log (header narrower than 3 columns, or a data row
    /// wider than the header) into the current 3-column shape.
    ///
    /// Idempotent: a no-op on an already-migrated store. Row order is
    /// preserved and no row with a timestamp and an action is dropped;
    /// an absent or blank department becomes "Default".
    ///
    /// Returns true when a rewrite took place.
    pub fn migrate_if_needed(&self) -> AppResult<bool> {
        if !self.path.exists() {
            return Ok(false);
        }

        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_path(&self.path)?;

        let mut rows: Vec<csv::StringRecord> = Vec::new();
        for rec in rdr.records() {
            let Ok(row) = rec else { continue };
            rows.push(row);
        }

        let Some(header) = rows.first() else {
            return Ok(false);
        };

        let legacy =
            header.len() < 3 || rows.iter().skip(1).any(|r| r.len() > header.len());
        if !legacy {
            return Ok(false);
        }

        let mut wtr = csv::Writer::from_path(&self.path)?;
        wtr.write_record(LOG_HEADER)?;
        for row in rows.iter().skip(1) {
            if row.len() < 2 {
                continue;
            }
            let ts = row.get(0).unwrap_or("").trim();
            let action = row.get(1).unwrap_or("").trim();
            let dept = Event::normalize_department(row.get(2).unwrap_or(""));
            wtr.write_record([ts, action, &dept])?;
        }
        wtr.flush()?;
        Ok(true)
    }

    /// Append one clock action with the given timestamp.
    ///
    /// Unlike load, this never swallows I/O failure: a full disk or a
    /// permission error must reach the caller.
    pub fn append(&self, action: Action, department: &str, now: chrono::NaiveDateTime) -> AppResult<()> {
        self.ensure_exists()?;
        let event = Event::new(now, action, department);
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut wtr = csv::Writer::from_writer(file);
        wtr.write_record([
            event.timestamp_str().as_str(),
            event.action.as_str(),
            event.department.as_str(),
        ])?;
        wtr.flush()?;
        Ok(())
    }

    /// All events of one department, sorted ascending by timestamp
    /// (ties keep file order).
    pub fn load(&self, department: &str) -> AppResult<Vec<Event>> {
        let target = Event::normalize_department(department);
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|e| e.department == target)
            .collect())
    }

    /// All events of every department, sorted ascending by timestamp.
    ///
    /// A missing file reads as an empty log (first-ever use); rows with an
    /// unparseable timestamp, an unknown action or too few fields are
    /// skipped silently. Column positions follow the header when one is
    /// present, falling back to the standard order.
    pub fn load_all(&self) -> AppResult<Vec<Event>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_path(&self.path)?;

        let mut records = rdr.records();
        let header = match records.next() {
            Some(Ok(h)) => h,
            _ => return Ok(Vec::new()),
        };

        let ts_idx = header
            .iter()
            .position(|c| c.trim() == "timestamp")
            .unwrap_or(0);
        let action_idx = header
            .iter()
            .position(|c| c.trim() == "action")
            .unwrap_or(1);
        let dept_idx = header
            .iter()
            .position(|c| c.trim() == "department")
            .or(if header.len() > 2 { Some(2) } else { None });

        let mut events = Vec::new();
        for rec in records {
            let Ok(row) = rec else { continue };

            let Some(ts) = row.get(ts_idx).and_then(Event::parse_timestamp) else {
                continue;
            };
            let Some(action) = row.get(action_idx).and_then(|s| Action::parse(s)) else {
                continue;
            };
            let dept = dept_idx.and_then(|i| row.get(i)).unwrap_or("");

            events.push(Event::new(ts, action, dept));
        }

        // stable sort: equal timestamps keep their append order
        events.sort_by_key(|e| e.timestamp);
        Ok(events)
    }

    /// Department whose log currently ends in an unmatched IN, if any.
    ///
    /// Departments are scanned in lexicographic order, so when a hand-edited
    /// log leaves several departments open the result is deterministic: the
    /// lexicographically first one wins.
    pub fn current_open_department(&self) -> AppResult<Option<String>> {
        let mut by_dept: BTreeMap<String, Vec<Event>> = BTreeMap::new();
        for ev in self.load_all()? {
            by_dept.entry(ev.department.clone()).or_default().push(ev);
        }

        for (dept, events) in by_dept {
            if let Some(last) = events.last() {
                if last.action == Action::In {
                    return Ok(Some(dept));
                }
            }
        }
        Ok(None)
    }

    /// Rewrite the department column in place, preserving row order.
    /// Rows that do not match (or have no department field) pass through
    /// untouched.
    pub fn rename_department(&self, old: &str, new: &str) -> AppResult<()> {
        if !self.path.exists() {
            return Ok(());
        }

        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_path(&self.path)?;

        let mut rows: Vec<Vec<String>> = Vec::new();
        for rec in rdr.records() {
            let Ok(row) = rec else { continue };
            rows.push(row.iter().map(|f| f.to_string()).collect());
        }

        let mut wtr = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;
        for (i, row) in rows.iter().enumerate() {
            let mut row = row.clone();
            if i > 0 && row.len() >= 3 && row[2].trim() == old {
                row[2] = new.to_string();
            }
            wtr.write_record(&row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
