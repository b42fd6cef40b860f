use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rPayroll
/// CLI application to log attendance and compute salary reports with SQLite
#[derive(Parser)]
#[command(
    name = "rpayroll",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal attendance log: record time in/out and compute monthly salary reports with lateness and absence deductions",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Use a configuration file other than the standard one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

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

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Check the configuration file for missing fields and inconsistent rules"
        )]
        check: bool,

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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

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
    },

    /// Create or replace the attendance record of a day
    Add {
        /// Date of the record (YYYY-MM-DD)
        date: String,

        #[arg(long = "in", help = "Time in (HH:MM or HH:MM:SS)")]
        time_in: Option<String>,

        #[arg(long = "out", help = "Time out (HH:MM or HH:MM:SS)")]
        time_out: Option<String>,
    },

    /// Change some fields of an existing attendance record
    Edit {
        /// Date of the record (YYYY-MM-DD)
        date: String,

        #[arg(long = "in", help = "New time in (HH:MM or HH:MM:SS)")]
        time_in: Option<String>,

        #[arg(long = "out", help = "New time out (HH:MM or HH:MM:SS)")]
        time_out: Option<String>,

        #[arg(
            long = "clear-out",
            conflicts_with = "time_out",
            help = "Remove the time out"
        )]
        clear_out: bool,
    },

    /// Delete the attendance record of a day
    Del {
        /// Date of the record (YYYY-MM-DD)
        date: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show the attendance record of a day
    Show {
        /// Date of the record (YYYY-MM-DD)
        date: String,
    },

    /// List attendance records
    List {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (default: current pay period)"
        )]
        period: Option<String>,
    },

    /// Manage holidays
    Holiday {
        #[command(subcommand)]
        action: HolidayAction,
    },

    /// Log in for today (creates the record or resumes the session)
    Start,

    /// Log out for today
    Stop,

    /// Compute the salary report of a pay period
    Report {
        #[arg(
            long,
            value_name = "YYYY-MM",
            conflicts_with_all = ["from", "to"],
            help = "Pay month (default: the pay period containing today)"
        )]
        period: Option<String>,

        #[arg(long, value_name = "DATE", requires = "to", help = "First day of a custom range")]
        from: Option<String>,

        #[arg(long, value_name = "DATE", requires = "from", help = "Last day of a custom range")]
        to: Option<String>,

        #[arg(long = "details", help = "Show the classification of every day")]
        details: bool,

        #[arg(long, value_name = "FILE", help = "Export the per-day table (absolute path)")]
        export: Option<String>,

        #[arg(long, value_enum, default_value = "csv", help = "Export format")]
        format: ExportFormat,

        #[arg(long, short = 'f', requires = "export", help = "Overwrite an existing export file")]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}

#[derive(Subcommand)]
pub enum HolidayAction {
    /// Mark a date as holiday (re-adding updates the description)
    Add {
        date: String,

        #[arg(long = "desc")]
        description: Option<String>,
    },

    /// Remove a holiday
    Del { date: String },

    /// List holidays
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range (default: current year)")]
        period: Option<String>,
    },
}
