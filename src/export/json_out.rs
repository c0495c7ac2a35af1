use crate::errors::{AppError, AppResult};
use crate::models::event::TIMESTAMP_FORMAT;
use crate::models::shift::Shift;
use crate::models::week::WeekWindow;
use serde_json::json;

/// Write the shifts as formatted JSON, with the window and total alongside.
pub fn write_json(
    path: &str,
    department: &str,
    window: &WeekWindow,
    shifts: &[Shift],
) -> AppResult<()> {
    let doc = json!({
        "department": department,
        "week_start": window.start.format(TIMESTAMP_FORMAT).to_string(),
        "week_end": window.end.format(TIMESTAMP_FORMAT).to_string(),
        "total_seconds": shifts.iter().map(|s| s.seconds).sum::<i64>(),
        "shifts": shifts,
    });

    let out = serde_json::to_string_pretty(&doc).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, out)?;
    Ok(())
}
