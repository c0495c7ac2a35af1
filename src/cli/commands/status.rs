use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::refresh::{RefreshLogic, Snapshot};
use crate::errors::AppResult;
use crate::models::week::WeekWindow;
use crate::store::EventStore;
use crate::ui::messages::{FG_GREEN, FG_RED, RESET, info};
use crate::utils::table::{Align, Column, Table};
use crate::utils::time::{format_seconds_hms, now_local};

/// Show the clock state and the current week's shifts for one department.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { dept } = cmd {
        let department = dept
            .clone()
            .unwrap_or_else(|| cfg.current_department.clone());

        let store = EventStore::open(&cfg.log_file)?;
        let now = now_local();
        let window = WeekWindow::current(now);
        let snap = RefreshLogic::refresh(&store, &department, &window, now)?;

        print_snapshot(&snap);
    }

    Ok(())
}

pub fn print_snapshot(snap: &Snapshot) {
    println!("Department: {}", snap.department);

    match snap.open_since {
        Some(since) => println!(
            "Status: {}CLOCKED IN{} (since {})",
            FG_GREEN,
            RESET,
            since.format("%Y-%m-%d %H:%M:%S")
        ),
        None => {
            println!("Status: {}CLOCKED OUT{}", FG_RED, RESET);
            if let Some(other) = &snap.open_department {
                if other != &snap.department {
                    info(format!("Clocked in elsewhere: {}", other));
                }
            }
        }
    }

    println!("Week: {}", snap.window.label());
    print_shift_table(snap);
    println!("Total: {}", format_seconds_hms(snap.total_seconds));
}

pub fn print_shift_table(snap: &Snapshot) {
    if snap.shifts.is_empty() {
        println!("No shifts recorded this week.");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("#", 3, Align::Right),
        Column::new("Start", 19, Align::Left),
        Column::new("End", 19, Align::Left),
        Column::new("Duration", 8, Align::Right),
    ]);

    for (i, shift) in snap.shifts.iter().enumerate() {
        let duration = if shift.open {
            format!("{} (open)", shift.duration_hms())
        } else {
            shift.duration_hms()
        };
        table.add_row(vec![
            (i + 1).to_string(),
            shift.start_str(),
            shift.end_str(),
            duration,
        ]);
    }

    print!("{}", table.render());
}
