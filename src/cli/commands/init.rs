use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::EventStore;
use crate::ui::messages::success;

/// Initialize the configuration file and the event log.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.log.clone(), cli.config.clone(), cli.test)?;

    // creates the log with its header and migrates legacy shapes
    let store = EventStore::open(&cfg.log_file)?;
    success(format!("Event log: {}", store.path().display()));

    Ok(())
}
