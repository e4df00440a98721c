//! Roster-wide queries: extremes, ordering and averages
//!
//! Ties always go to the record that appears first in roster order, and sorts
//! are stable in both directions.

use crate::core::grading::round2;
use crate::core::models::StudentRecord;
use std::cmp::Ordering;

/// Direction for percentage sorts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Lowest percentage first
    #[default]
    Ascending,
    /// Highest percentage first
    Descending,
}

/// Record with the highest percentage; the earliest wins a tie
#[must_use]
pub fn highest(records: &[StudentRecord]) -> Option<&StudentRecord> {
    first_extreme(records, Ordering::Greater)
}

/// Record with the lowest percentage; the earliest wins a tie
#[must_use]
pub fn lowest(records: &[StudentRecord]) -> Option<&StudentRecord> {
    first_extreme(records, Ordering::Less)
}

/// Keep the current best unless a later record is strictly `wanted` of it.
fn first_extreme(records: &[StudentRecord], wanted: Ordering) -> Option<&StudentRecord> {
    records.iter().fold(None, |best, record| match best {
        Some(current) if record.percentage().total_cmp(&current.percentage()) != wanted => {
            Some(current)
        }
        _ => Some(record),
    })
}

fn compare(a: &StudentRecord, b: &StudentRecord, order: SortOrder) -> Ordering {
    let by_percentage = a.percentage().total_cmp(&b.percentage());
    match order {
        SortOrder::Ascending => by_percentage,
        SortOrder::Descending => by_percentage.reverse(),
    }
}

/// Stable in-place sort by percentage
pub fn sort_by_percentage(records: &mut [StudentRecord], order: SortOrder) {
    records.sort_by(|a, b| compare(a, b, order));
}

/// Borrowed view of `records` ordered by percentage, leaving the roster as is
#[must_use]
pub fn sorted_by_percentage(records: &[StudentRecord], order: SortOrder) -> Vec<&StudentRecord> {
    let mut view: Vec<&StudentRecord> = records.iter().collect();
    view.sort_by(|a, b| compare(a, b, order));
    view
}

/// Head count and average percentage of a roster
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RosterSummary {
    /// Number of records
    pub count: usize,
    /// Mean of per-record percentages, rounded to 2 places; `None` when empty
    pub average_percentage: Option<f64>,
}

impl RosterSummary {
    /// Summarize `records`
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn of(records: &[StudentRecord]) -> Self {
        let average_percentage = if records.is_empty() {
            None
        } else {
            let total: f64 = records.iter().map(StudentRecord::percentage).sum();
            Some(round2(total / records.len() as f64))
        };
        Self {
            count: records.len(),
            average_percentage,
        }
    }
}
