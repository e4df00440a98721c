//! CLI command handlers for `roster`.
//!
//! Each group of subcommands is implemented in its own submodule.

pub mod config;
pub mod records;
pub mod report;
