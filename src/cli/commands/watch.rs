use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::refresh::RefreshLogic;
use crate::errors::AppResult;
use crate::models::week::WeekWindow;
use crate::store::EventStore;
use crate::utils::time::{format_seconds_hms, now_local};
use std::io::Write;
use std::thread;
use std::time::Duration;

/// Drive the refresh contract: recompute and redraw the status line at a
/// fixed cadence. Each tick is a full stateless recomputation, so an open
/// session's displayed total advances with the wall clock.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch {
        interval,
        ticks,
        dept,
    } = cmd
    {
        let department = dept
            .clone()
            .unwrap_or_else(|| cfg.current_department.clone());

        let store = EventStore::open(&cfg.log_file)?;
        let every = Duration::from_secs(interval.unwrap_or(cfg.refresh_secs).max(1));
        let mut remaining = *ticks;

        loop {
            let now = now_local();
            let window = WeekWindow::current(now);
            let snap = RefreshLogic::refresh(&store, &department, &window, now)?;

            let state = if snap.clocked_in { "IN " } else { "OUT" };
            print!(
                "\r{} | {} | week {}   ",
                department,
                state,
                format_seconds_hms(snap.total_seconds)
            );
            std::io::stdout().flush()?;

            if let Some(n) = remaining.as_mut() {
                if *n <= 1 {
                    break;
                }
                *n -= 1;
            }

            thread::sleep(every);
        }
        println!();
    }

    Ok(())
}
