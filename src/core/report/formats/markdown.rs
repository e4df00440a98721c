//! Markdown report generator
//!
//! Renders the roster as a Markdown table followed by the roster summary.

use crate::core::report::{ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "roster.md")]
struct MarkdownTemplate<'a> {
    ctx: &'a ReportContext,
    average: String,
    highest: &'a str,
    lowest: &'a str,
}

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let template = MarkdownTemplate {
            ctx,
            average: ctx.average_label(),
            highest: ctx.highest.as_deref().unwrap_or("-"),
            lowest: ctx.lowest.as_deref().unwrap_or("-"),
        };
        Ok(template.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::StudentRecord;

    #[test]
    fn test_markdown_contains_rows_and_summary() {
        let records = vec![
            StudentRecord::new(1, "Ann".to_string(), 50, 80),
            StudentRecord::new(2, "Ben".to_string(), 30, 50),
        ];
        let ctx = ReportContext::new("Student Marks", &records);
        let output = MarkdownReporter::new().render(&ctx).expect("render");

        assert!(output.starts_with("# Student Marks"));
        assert!(output.contains("| 1 | Ann | 50 / 60 | 80 / 100 | 81.25% | A |"));
        assert!(output.contains("| 2 | Ben | 30 / 60 | 50 / 100 | 50.0% | C |"));
        assert!(output.contains("**Total Students:** 2"));
        assert!(output.contains("**Average Percentage:** 65.62%"));
        assert!(output.contains("**Highest:** Ann (1)"));
    }

    #[test]
    fn test_markdown_empty_roster() {
        let ctx = ReportContext::new("Empty", &[]);
        let output = MarkdownReporter::new().render(&ctx).expect("render");
        assert!(output.contains("No students loaded."));
        assert!(output.contains("**Average Percentage:** n/a"));
    }
}
