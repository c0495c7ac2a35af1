use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftlogger
/// CLI application to track per-department work shifts in a CSV event log
#[derive(Parser)]
#[command(
    name = "shiftlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track work shifts per department: clock in/out, weekly totals, live status",
    long_about = None
)]
pub struct Cli {
    /// Override event log path (useful for tests or a custom log)
    #[arg(global = true, long = "log")]
    pub log: Option<String>,

    /// Override config file path (useful for tests or a custom profile)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the event log
    Init,

    /// Clock in or out (alternates based on the last recorded event)
    Toggle {
        #[arg(long = "dept", help = "Department to toggle instead of the current one")]
        dept: Option<String>,
    },

    /// Show clock state and this week's shifts
    Status {
        #[arg(long = "dept", help = "Department to inspect instead of the current one")]
        dept: Option<String>,
    },

    /// List the shifts of a week (default: the current one)
    Week {
        /// Reference date inside the wanted week (YYYY-MM-DD)
        date: Option<String>,

        #[arg(long = "dept", help = "Department to inspect instead of the current one")]
        dept: Option<String>,
    },

    /// Redraw the live status line at a fixed interval
    Watch {
        #[arg(long = "interval", help = "Seconds between refreshes (default: the configured refresh_secs)")]
        interval: Option<u64>,

        #[arg(long = "ticks", help = "Stop after N refreshes (default: run until interrupted)")]
        ticks: Option<u64>,

        #[arg(long = "dept", help = "Department to watch instead of the current one")]
        dept: Option<String>,
    },

    /// Manage departments
    Dept {
        #[arg(long = "list", help = "List departments")]
        list: bool,

        #[arg(long = "add", value_name = "NAME", help = "Add a department")]
        add: Option<String>,

        #[arg(long = "remove", value_name = "NAME", help = "Remove a department (its logged events are kept)")]
        remove: Option<String>,

        #[arg(
            long = "rename",
            num_args = 2,
            value_names = ["OLD", "NEW"],
            help = "Rename a department, rewriting its logged events"
        )]
        rename: Option<Vec<String>>,

        #[arg(long = "switch", value_name = "NAME", help = "Make a department the current one")]
        switch: Option<String>,
    },

    /// Print or migrate the raw event log
    Log {
        #[arg(long = "print", help = "Print the raw event table")]
        print: bool,

        #[arg(long = "migrate", help = "Normalize legacy rows to the 3-column shape")]
        migrate: bool,
    },

    /// Export one week's shifts
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_name = "DATE", help = "Reference date inside the wanted week")]
        week: Option<String>,

        #[arg(long = "dept", help = "Department to export instead of the current one")]
        dept: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the event log
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
