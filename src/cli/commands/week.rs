use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::refresh::RefreshLogic;
use crate::errors::AppResult;
use crate::models::week::WeekWindow;
use crate::store::EventStore;
use crate::utils::time::{format_seconds_hms, now_local, parse_optional_date};

use super::status::print_shift_table;

/// List the shifts of the week containing a reference date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { date, dept } = cmd {
        let department = dept
            .clone()
            .unwrap_or_else(|| cfg.current_department.clone());

        let now = now_local();
        let reference = parse_optional_date(date.as_ref())?.unwrap_or_else(|| now.date());
        let window = WeekWindow::containing(reference);

        let store = EventStore::open(&cfg.log_file)?;
        let snap = RefreshLogic::refresh(&store, &department, &window, now)?;

        println!("Shifts for {} — week {}", department, window.label());
        print_shift_table(&snap);
        println!("Total: {}", format_seconds_hms(snap.total_seconds));
    }

    Ok(())
}
