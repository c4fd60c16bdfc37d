use crate::core::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rworklog
/// CLI application to log daily work activities with SQLite
#[derive(Parser)]
#[command(
    name = "rworklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple activity log: record daily tasks per school and ticket, print grouped daily reports",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (integrity checks, info, etc.)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "last", value_name = "N", help = "Only the last N rows")]
        last: Option<usize>,
    },

    /// Add an activity
    Add {
        /// What was done
        task: String,

        /// Date of the activity (YYYY-MM-DD, default: today)
        #[arg(long = "date", short = 'd')]
        date: Option<String>,

        /// Ticket number (default: "Keine")
        #[arg(long = "ticket", short = 't')]
        ticket: Option<String>,

        /// School / unit code (default from config, usually "Allgemein")
        #[arg(long = "unit", short = 'u', visible_alias = "school")]
        unit: Option<String>,

        /// Accept a unit that is not in the configured list
        #[arg(long = "custom")]
        custom: bool,
    },

    /// Show the report of a day, with entry ids
    Show {
        /// Day to show (YYYY-MM-DD, default: today)
        date: Option<String>,
    },

    /// Delete an entry by ID
    Del {
        /// Entry ID as shown by `show`
        id: String,
    },

    /// Export the report of a day, without ids
    Export {
        /// Day to export (YYYY-MM-DD, default: today)
        date: Option<String>,

        #[arg(long, value_enum, default_value = "text")]
        format: ExportFormat,

        /// Write to FILE instead of stdout
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite FILE without asking")]
        force: bool,
    },

    /// Show which days have entries
    Calendar {
        /// Month to show (YYYY-MM, default: current month)
        #[arg(long, value_name = "YYYY-MM")]
        month: Option<String>,

        #[arg(long, help = "List every date with entries instead of a month view")]
        list: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite FILE without asking")]
        force: bool,
    },
}
