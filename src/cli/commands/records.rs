//! Record command handlers: viewing, ordering and editing the roster

use student_roster::core::grading::format_percentage;
use student_roster::core::models::{RecordUpdate, StudentRecord};
use student_roster::core::queries::{RosterSummary, SortOrder};
use student_roster::core::report::RecordSummary;
use student_roster::core::store::{RecordStore, StoreError};
use student_roster::{error, info};
use std::fmt::Write;

/// Every record, then the head count and average
pub fn list(store: &RecordStore) {
    print!("{}", render_listing(store.records()));
}

/// Text printed by `list` and `sort`
pub fn render_listing(records: &[StudentRecord]) -> String {
    if records.is_empty() {
        return "No students loaded.\n".to_string();
    }

    let mut out = String::new();
    for record in records {
        let _ = writeln!(out, "{}", RecordSummary(record));
    }

    let summary = RosterSummary::of(records);
    let _ = writeln!(out, "\nTotal Students: {}", summary.count);
    if let Some(average) = summary.average_percentage {
        let _ = writeln!(out, "Average Percentage: {}%", format_percentage(average));
    }
    out
}

/// One record by id
///
/// # Errors
/// Returns a message when no record has `id`
pub fn show(store: &RecordStore, id: i64) -> Result<(), String> {
    let record = store.find(id).ok_or_else(|| not_found(id))?;
    print!("{}", RecordSummary(record));
    Ok(())
}

/// Best record, if the roster has any
pub fn highest(store: &RecordStore) {
    match store.highest() {
        Some(record) => print!("{}", RecordSummary(record)),
        None => println!("No students loaded."),
    }
}

/// Weakest record, if the roster has any
pub fn lowest(store: &RecordStore) {
    match store.lowest() {
        Some(record) => print!("{}", RecordSummary(record)),
        None => println!("No students loaded."),
    }
}

/// Reorder the roster for this run and list it
pub fn sort(store: &mut RecordStore, order: SortOrder) {
    store.sort_by_percentage(order);
    list(store);
}

/// Add a record from raw marks
///
/// # Errors
/// Returns a message if the roster cannot be saved
pub fn add(
    store: &mut RecordStore,
    id: i64,
    name: String,
    coursework: [i32; 3],
    exam: i32,
) -> Result<(), String> {
    let record = StudentRecord::from_components(id, name, coursework, exam);
    store.add(record).map_err(|e| failure("add", &e))?;
    info!("Added student {id} to {}", store.path().display());
    println!("✓ Added student {id}");
    list(store);
    Ok(())
}

/// Delete the first record with `id`
///
/// # Errors
/// Returns a message when `id` is unknown or saving fails
pub fn delete(store: &mut RecordStore, id: i64) -> Result<(), String> {
    let removed = store.delete(id).map_err(|e| failure("delete", &e))?;
    println!("✓ Deleted student {} ({})", removed.id, removed.name);
    list(store);
    Ok(())
}

/// Update one field of the first record with `id`
///
/// # Errors
/// Returns a message when `id` is unknown or saving fails
pub fn update(store: &mut RecordStore, id: i64, change: RecordUpdate) -> Result<(), String> {
    store.update(id, change).map_err(|e| failure("update", &e))?;
    println!("✓ Updated student {id}");
    list(store);
    Ok(())
}

fn not_found(id: i64) -> String {
    format!("✗ {}", StoreError::NotFound(id))
}

fn failure(action: &str, err: &StoreError) -> String {
    match err {
        StoreError::NotFound(id) => not_found(*id),
        StoreError::Io { .. } => {
            error!("Failed to {action} record: {err}");
            format!("✗ Failed to {action} record: {err}")
        }
    }
}
