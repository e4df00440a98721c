//! Data models for `student-roster`

pub mod student;

pub use student::{RecordUpdate, StudentRecord};
