use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::EventStore;
use crate::ui::messages::{info, success};
use crate::utils::table::{Align, Column, Table};

/// Print the raw event table or force the migration pass.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print, migrate } = cmd {
        if *migrate {
            let store = EventStore::new(&cfg.log_file);
            store.ensure_exists()?;
            if store.migrate_if_needed()? {
                success("Event log migrated to the 3-column shape.");
            } else {
                info("Event log already up to date.");
            }
        }

        if *print {
            let store = EventStore::open(&cfg.log_file)?;
            let events = store.load_all()?;

            let mut table = Table::new(vec![
                Column::new("Timestamp", 19, Align::Left),
                Column::new("Action", 6, Align::Left),
                Column::new("Department", 12, Align::Left),
            ]);
            for ev in &events {
                table.add_row(vec![
                    ev.timestamp_str(),
                    ev.action.as_str().to_string(),
                    ev.department.clone(),
                ]);
            }
            print!("{}", table.render());
            println!("{} events", events.len());
        }
    }

    Ok(())
}
