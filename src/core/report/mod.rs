//! Roster reports
//!
//! [`RecordSummary`] renders the plain-text block shown for a single student.
//! [`ReportContext`] gathers a whole roster for the Markdown and HTML
//! generators in [`formats`].

pub mod formats;

use crate::core::grading::{format_percentage, Grade};
use crate::core::models::StudentRecord;
use crate::core::queries::{self, RosterSummary};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Line printed under each record summary
pub const SUMMARY_DIVIDER: &str = "~~~~~~~~~~~~~~~~~~~~~~~~~~~~";

/// Plain-text summary of one record
#[derive(Debug, Clone, Copy)]
pub struct RecordSummary<'a>(pub &'a StudentRecord);

impl fmt::Display for RecordSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.0;
        let percentage = record.percentage();
        writeln!(f, "Name: {}", record.name)?;
        writeln!(f, "ID: {}", record.id)?;
        writeln!(f, "Coursework Total: {} / 60", record.coursework_total)?;
        writeln!(f, "Exam Mark: {} / 100", record.exam_mark)?;
        writeln!(f, "Overall %: {}%", format_percentage(percentage))?;
        writeln!(f, "Grade: {}", record.grade())?;
        writeln!(f, "{SUMMARY_DIVIDER}")
    }
}

/// One table row of a roster report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// Student id
    pub id: i64,
    /// Student name
    pub name: String,
    /// Coursework total out of 60
    pub coursework_total: i64,
    /// Exam mark out of 100
    pub exam_mark: i32,
    /// Overall percentage, already formatted
    pub percentage: String,
    /// Letter grade
    pub grade: Grade,
}

impl From<&StudentRecord> for ReportRow {
    fn from(record: &StudentRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            coursework_total: record.coursework_total,
            exam_mark: record.exam_mark,
            percentage: format_percentage(record.percentage()),
            grade: record.grade(),
        }
    }
}

/// Data needed to render a roster report
#[derive(Debug, Clone)]
pub struct ReportContext {
    /// Report heading
    pub title: String,
    /// Rows in roster order
    pub rows: Vec<ReportRow>,
    /// Count and average
    pub summary: RosterSummary,
    /// `name (id)` of the best record, if any
    pub highest: Option<String>,
    /// `name (id)` of the weakest record, if any
    pub lowest: Option<String>,
}

impl ReportContext {
    /// Build a context from a roster
    #[must_use]
    pub fn new(title: impl Into<String>, records: &[StudentRecord]) -> Self {
        let label = |r: &StudentRecord| format!("{} ({})", r.name, r.id);
        Self {
            title: title.into(),
            rows: records.iter().map(ReportRow::from).collect(),
            summary: RosterSummary::of(records),
            highest: queries::highest(records).map(label),
            lowest: queries::lowest(records).map(label),
        }
    }

    /// Average percentage as shown in reports, `n/a` for an empty roster
    #[must_use]
    pub fn average_label(&self) -> String {
        self.summary
            .average_percentage
            .map_or_else(|| "n/a".to_string(), |avg| format!("{}%", format_percentage(avg)))
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if template rendering fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;

    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if rendering or writing the file fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(output_path, content)?;
        Ok(())
    }
}
