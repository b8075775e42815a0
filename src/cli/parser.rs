use crate::export::ExportFormat;
use crate::models::calendar::Granularity;
use crate::models::event::EventKind;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for heliops
/// Flight and maintenance scheduling for a helicopter charter operation
#[derive(Parser)]
#[command(
    name = "heliops",
    version = env!("CARGO_PKG_VERSION"),
    about = "Schedule flights and maintenance, browse the calendar and compute flight times",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the civil zone offset (±HH:MM)
    #[arg(global = true, long = "utc-offset", allow_hyphen_values = true)]
    pub utc_offset: Option<String>,

    /// Print debug diagnostics on stderr
    #[arg(global = true, short, long)]
    pub verbose: bool,

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
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing configuration fields with defaults")]
        migrate: bool,

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

    /// Schedule a flight or a maintenance job
    Add {
        #[command(subcommand)]
        what: AddCommand,
    },

    /// Update the status or odometer readings of a stored event
    Set {
        #[arg(value_enum)]
        kind: EventKind,

        id: i64,

        #[arg(long, help = "New status tag (completed, scheduled, cancelled, ...)")]
        status: Option<String>,

        #[arg(
            long,
            num_args = 2,
            value_names = ["INITIAL", "FINAL"],
            help = "Odometer readings in hours (flights only)"
        )]
        odometers: Option<Vec<f64>>,
    },

    /// Delete a flight or a maintenance job
    Del {
        #[arg(value_enum)]
        kind: EventKind,

        id: i64,

        #[arg(short = 'y', long = "yes", help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Show the calendar grid with its events
    Calendar {
        /// Reference date (YYYY-MM-DD), default today
        date: Option<String>,

        #[arg(long, value_enum, help = "Month, week or day view")]
        view: Option<Granularity>,

        #[arg(long, conflicts_with = "next", help = "Step back N periods")]
        prev: Option<u32>,

        #[arg(long, help = "Step forward N periods")]
        next: Option<u32>,
    },

    /// List events for a range
    List {
        #[arg(long, help = "YYYY | YYYY-MM | YYYY-MM-DD | A:B (default: current month)")]
        range: Option<String>,

        #[arg(long, help = "Only events of this aircraft")]
        resource: Option<String>,
    },

    /// Flight/maintenance counters for a month
    Summary {
        /// Month (YYYY-MM), default current month
        month: Option<String>,
    },

    /// Elapsed time between two HH:MM times
    Duration {
        start: String,
        end: String,

        #[arg(long = "from-date", requires = "to_date", help = "Start date (YYYY-MM-DD)")]
        from_date: Option<String>,

        #[arg(long = "to-date", requires = "from_date", help = "End date (YYYY-MM-DD)")]
        to_date: Option<String>,
    },

    /// Flight time from odometer readings
    Odometer {
        initial: f64,
        #[arg(value_name = "FINAL")]
        final_reading: f64,
    },

    /// Export events to CSV or JSON
    Export {
        #[arg(long, value_enum)]
        format: ExportFormat,

        #[arg(long, help = "Absolute path of the output file")]
        file: String,

        #[arg(long, help = "all | YYYY | YYYY-MM | YYYY-MM-DD | A:B")]
        range: Option<String>,

        #[arg(long, help = "Only events of this aircraft")]
        resource: Option<String>,

        #[arg(long, help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Backup the database
    Backup {
        #[arg(long, help = "Destination file")]
        file: String,

        #[arg(long, help = "Compress the backup as .zip")]
        compress: bool,

        #[arg(long, help = "Overwrite an existing file without asking")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum AddCommand {
    /// Schedule a flight
    Flight(FlightArgs),

    /// Schedule a maintenance job
    Maintenance(MaintenanceArgs),
}

#[derive(Args)]
pub struct FlightArgs {
    /// Civil date (YYYY-MM-DD)
    pub date: String,

    /// Departure time (HH:MM)
    pub start: String,

    /// Landing time (HH:MM); earlier than departure means after midnight
    #[arg(long)]
    pub end: Option<String>,

    #[arg(long)]
    pub aircraft: String,

    #[arg(long)]
    pub pilot: Option<String>,

    #[arg(long, default_value = "")]
    pub title: String,

    #[arg(long, default_value = "scheduled")]
    pub status: String,

    #[arg(long = "odo-start")]
    pub odometer_start: Option<f64>,

    #[arg(long = "odo-end")]
    pub odometer_end: Option<f64>,
}

#[derive(Args)]
pub struct MaintenanceArgs {
    /// Civil date (YYYY-MM-DD)
    pub date: String,

    /// Start time (HH:MM)
    pub start: String,

    #[arg(long)]
    pub aircraft: String,

    #[arg(long)]
    pub technician: Option<String>,

    #[arg(long, default_value = "")]
    pub title: String,

    #[arg(long, default_value = "scheduled")]
    pub status: String,
}
