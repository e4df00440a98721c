//! Shared library for `student-roster`
//! Contains the record store, grading math, reports, configuration and logging
//! used by the `roster` CLI.

pub mod config;
pub mod core;
pub mod logger;

/// Returns the current version of the `student-roster` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
