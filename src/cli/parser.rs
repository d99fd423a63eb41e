use crate::export::ExportFormat;
use crate::models::{EmployeeQuery, GenderFilter, StatusFilter};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for empmanager
#[derive(Parser)]
#[command(
    name = "empmanager",
    version = env!("CARGO_PKG_VERSION"),
    about = "Manage an employee roster: add, edit, filter, toggle and delete records stored in SQLite",
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

/// Search box and drop-downs shared by `list` and `export`.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    #[arg(long, default_value = "", help = "Case-insensitive name search")]
    pub name: String,

    #[arg(long, default_value = "all", help = "all, male or female")]
    pub gender: GenderFilter,

    #[arg(long, default_value = "all", help = "all, active or inactive")]
    pub status: StatusFilter,
}

impl FilterArgs {
    pub fn to_query(&self) -> EmployeeQuery {
        EmployeeQuery::new(self.name.clone(), self.gender, self.status)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Open a session
    Login {
        #[arg(long, short = 'u')]
        username: String,

        #[arg(long, short = 'p')]
        password: String,
    },

    /// Close the current session
    Logout,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
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

    /// Database maintenance
    Db {
        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(
            long = "reset",
            help = "Drop the stored roster; the built-in one is restored on next use"
        )]
        reset: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show counters and the employee table
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show total / active / inactive counters
    Summary,

    /// Add a new employee
    Add {
        #[arg(long, default_value = "", help = "Employee ID (unique)")]
        id: String,

        #[arg(long, default_value = "", help = "Full name (min 3 characters)")]
        name: String,

        #[arg(long, default_value = "", help = "Male or Female")]
        gender: String,

        #[arg(long, default_value = "", help = "Date of birth (YYYY-MM-DD)")]
        dob: String,

        #[arg(long, default_value = "", help = "Tamil Nadu, Karnataka or Kerala")]
        state: String,

        #[arg(long, value_name = "FILE", help = "Profile picture (any image file)")]
        image: Option<PathBuf>,

        #[arg(long, help = "Create the employee as inactive")]
        inactive: bool,
    },

    /// Edit an existing employee (the ID cannot change)
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        gender: Option<String>,

        #[arg(long)]
        dob: Option<String>,

        #[arg(long)]
        state: Option<String>,

        #[arg(long, value_name = "FILE")]
        image: Option<PathBuf>,

        #[arg(long, conflicts_with = "inactive")]
        active: bool,

        #[arg(long)]
        inactive: bool,
    },

    /// Flip an employee between active and inactive
    Toggle { id: String },

    /// Delete an employee
    Del {
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export the (filtered) employee table
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
