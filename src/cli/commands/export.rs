use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::shifts_in_window;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::week::WeekWindow;
use crate::store::EventStore;
use crate::utils::time::{now_local, parse_optional_date};

/// Export one week's shifts for a department.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        week,
        dept,
        force,
    } = cmd
    {
        let department = dept
            .clone()
            .unwrap_or_else(|| cfg.current_department.clone());

        let now = now_local();
        let reference = parse_optional_date(week.as_ref())?.unwrap_or_else(|| now.date());
        let window = WeekWindow::containing(reference);

        let store = EventStore::open(&cfg.log_file)?;
        let events = store.load(&department)?;
        let shifts = shifts_in_window(&events, &window, now);

        ExportLogic::export(format, file, &department, &window, &shifts, *force)?;
    }

    Ok(())
}
