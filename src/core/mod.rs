//! Core roster functionality: records, grading, storage, queries and reports

pub mod grading;
pub mod models;
pub mod queries;
pub mod report;
pub mod store;
