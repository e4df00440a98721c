//! CLI argument definitions for `roster`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use student_roster::config::ConfigOverrides;
use student_roster::core::models::RecordUpdate;
use student_roster::core::queries::SortOrder;
use student_roster::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `roster_file`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

/// Field to change on an existing record
#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum UpdateField {
    /// Replace the student's name
    Name {
        /// New name
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Replace all three coursework marks
    Cw {
        /// Coursework 1 (0-20)
        #[arg(value_name = "CW1", allow_negative_numbers = true)]
        cw1: i32,
        /// Coursework 2 (0-20)
        #[arg(value_name = "CW2", allow_negative_numbers = true)]
        cw2: i32,
        /// Coursework 3 (0-20)
        #[arg(value_name = "CW3", allow_negative_numbers = true)]
        cw3: i32,
    },
    /// Replace the exam mark
    Exam {
        /// New exam mark (0-100)
        #[arg(value_name = "MARK", allow_negative_numbers = true)]
        mark: i32,
    },
}

impl From<UpdateField> for RecordUpdate {
    fn from(field: UpdateField) -> Self {
        match field {
            UpdateField::Name { name } => Self::Name(name),
            UpdateField::Cw { cw1, cw2, cw3 } => Self::Coursework([cw1, cw2, cw3]),
            UpdateField::Exam { mark } => Self::Exam(mark),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Show every record, the total number of students and the average percentage.
    List,
    /// Show one record by student ID.
    Show {
        /// Student ID
        #[arg(value_name = "ID", allow_negative_numbers = true)]
        id: i64,
    },
    /// Show the record with the highest overall percentage.
    Highest,
    /// Show the record with the lowest overall percentage.
    Lowest,
    /// Show all records ordered by overall percentage.
    Sort {
        /// Highest percentage first
        #[arg(short, long)]
        descending: bool,
    },
    /// Add a record and save the roster.
    Add {
        /// Student ID
        #[arg(long, allow_negative_numbers = true)]
        id: i64,
        /// Student name
        #[arg(long)]
        name: String,
        /// Coursework 1 (0-20)
        #[arg(long, allow_negative_numbers = true)]
        cw1: i32,
        /// Coursework 2 (0-20)
        #[arg(long, allow_negative_numbers = true)]
        cw2: i32,
        /// Coursework 3 (0-20)
        #[arg(long, allow_negative_numbers = true)]
        cw3: i32,
        /// Exam mark (0-100)
        #[arg(long, allow_negative_numbers = true)]
        exam: i32,
    },
    /// Delete the first record with the given ID and save the roster.
    Delete {
        /// Student ID
        #[arg(value_name = "ID", allow_negative_numbers = true)]
        id: i64,
    },
    /// Update one field of the first record with the given ID and save the roster.
    Update {
        /// Student ID
        #[arg(value_name = "ID", allow_negative_numbers = true)]
        id: i64,
        #[command(subcommand)]
        field: UpdateField,
    },
    /// Write a roster report.
    Report {
        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,

        /// Output file path (optional; defaults to the configured reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

impl Command {
    /// Sort direction for the `sort` subcommand
    #[must_use]
    pub const fn sort_order(descending: bool) -> SortOrder {
        if descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    about = "Student marks roster command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Roster file to use for this run (overrides config `roster_file`)
    #[arg(long, value_name = "PATH", global = true)]
    pub roster: Option<PathBuf>,

    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--reports-dir`) take precedence over long-form
    /// flags (e.g., `--config-reports-dir`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let path_string = |p: &PathBuf| p.to_string_lossy().to_string();
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self.config_log_file.as_ref().map(path_string),
            verbose: self.config_verbose,
            roster_file: self.roster.as_ref().map(path_string),
            reports_dir: self
                .reports_dir
                .as_ref()
                .or(self.config_reports_dir.as_ref())
                .map(path_string),
        }
    }
}
