use super::{ExportFormat, csv_out, json_out};
use crate::errors::{AppError, AppResult};
use crate::models::shift::Shift;
use crate::models::week::WeekWindow;
use crate::ui::messages::success;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write one week's reconstructed shifts to a file.
    pub fn export(
        format: &ExportFormat,
        file: &str,
        department: &str,
        window: &WeekWindow,
        shifts: &[Shift],
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        if path.exists() && !force {
            return Err(AppError::Export(format!(
                "File already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }

        match format {
            ExportFormat::Csv => csv_out::write_csv(file, department, shifts)?,
            ExportFormat::Json => json_out::write_json(file, department, window, shifts)?,
        }

        success(format!(
            "{} export completed: {}",
            format.as_str(),
            path.display()
        ));
        Ok(())
    }
}
