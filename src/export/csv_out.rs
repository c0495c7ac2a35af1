use crate::errors::AppResult;
use crate::models::shift::Shift;
use csv::Writer;

/// Write the shifts as CSV with one row per shift.
pub fn write_csv(path: &str, department: &str, shifts: &[Shift]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["department", "start", "end", "seconds", "duration"])?;

    for shift in shifts {
        wtr.write_record(&[
            department.to_string(),
            shift.start_str(),
            shift.end_str(),
            shift.seconds.to_string(),
            shift.duration_hms(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
