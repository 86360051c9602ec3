use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for clienttrack
/// CLI application to track client relationships with SQLite
#[derive(Parser)]
#[command(
    name = "clienttrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple client tracking CLI: roster, statuses, call notes and industry rollups backed by SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the people ingestion file path
    #[arg(global = true, long = "people-file")]
    pub people_file: Option<String>,

    /// Override the companies ingestion file path
    #[arg(global = true, long = "companies-file")]
    pub companies_file: Option<String>,

    /// Override the updated-roster artifact path
    #[arg(global = true, long = "updated-file")]
    pub updated_file: Option<String>,

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

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,
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

    /// Ingest the roster files and classify missing industry labels
    Ingest {
        #[arg(
            long = "people",
            help = "Override the people ingestion file for this run"
        )]
        people: Option<String>,

        #[arg(
            long = "save",
            help = "Write the classified roster back as the updated-roster artifact"
        )]
        save: bool,
    },

    /// Set the pipeline status of a client
    Status {
        /// Client id ("Name @ Company")
        client: String,

        /// One of: open, contacted, engaged, negotiation, won, lost, on-hold
        status: String,
    },

    /// Log a call note for a client (also bumps last-contacted)
    Call {
        /// Client id ("Name @ Company")
        client: String,

        /// Free-text note, must not be blank
        note: String,

        #[arg(
            long = "at",
            help = "Timestamp of the call (YYYY-MM-DD [HH:MM]); defaults to now"
        )]
        at: Option<String>,
    },

    /// Override the industry label of a client
    Industry {
        /// Client id ("Name @ Company")
        client: String,

        /// Operator-supplied industry label
        label: String,
    },

    /// Print logged call notes, newest first
    Calls {
        #[arg(long = "client", help = "Only notes for this client id")]
        client: Option<String>,
    },

    /// List the reconciled client view
    List {
        #[arg(long, help = "Filter by industry label")]
        industry: Option<String>,

        #[arg(long, help = "Filter by status")]
        status: Option<String>,

        #[arg(long, help = "Filter by company name")]
        company: Option<String>,
    },

    /// Show derived metrics over the reconciled view
    Metrics {
        #[arg(
            long,
            help = "Recent-contact window in days (defaults to the configured value)"
        )]
        days: Option<i64>,
    },

    /// Save the reconciled view as the updated-roster artifact
    Save,

    /// Export the reconciled view
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
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
