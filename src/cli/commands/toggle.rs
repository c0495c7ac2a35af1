use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::refresh::RefreshLogic;
use crate::core::toggle::{ToggleLogic, ToggleOutcome};
use crate::errors::AppResult;
use crate::models::week::WeekWindow;
use crate::store::EventStore;
use crate::ui::messages::{info, success};
use crate::utils::time::{format_seconds_hms, now_local};

/// Clock in or out of a department, then refresh the weekly total.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Toggle { dept } = cmd {
        let department = dept
            .clone()
            .unwrap_or_else(|| cfg.current_department.clone());

        let store = EventStore::open(&cfg.log_file)?;
        let outcome = ToggleLogic::apply(&store, &department, now_local())?;

        match outcome {
            ToggleOutcome::ClockedIn { closed } => {
                if let Some(other) = closed {
                    info(format!("Clocked OUT — {}", other));
                }
                success(format!("Clocked IN — {}", department));
            }
            ToggleOutcome::ClockedOut => success(format!("Clocked OUT — {}", department)),
        }

        // refresh immediately after the state change
        let now = now_local();
        let window = WeekWindow::current(now);
        let snap = RefreshLogic::refresh(&store, &department, &window, now)?;
        info(format!(
            "This week: {}",
            format_seconds_hms(snap.total_seconds)
        ));
    }

    Ok(())
}
