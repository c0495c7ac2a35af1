use std::fmt;

/// Clock action recorded in the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    In,
    Out,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::In => "IN",
            Action::Out => "OUT",
        }
    }

    /// Parse an action field from the log, case-insensitively.
    /// Returns None for anything that is not IN/OUT (the row is then skipped).
    pub fn parse(s: &str) -> Option<Action> {
        match s.trim().to_uppercase().as_str() {
            "IN" => Some(Action::In),
            "OUT" => Some(Action::Out),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
