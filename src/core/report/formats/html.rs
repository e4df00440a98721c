//! HTML report generator
//!
//! Produces a single self-contained page with embedded CSS. Names are
//! HTML-escaped by the template engine.

use crate::core::report::{ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "roster.html")]
struct HtmlTemplate<'a> {
    ctx: &'a ReportContext,
    average: String,
    highest: &'a str,
    lowest: &'a str,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let template = HtmlTemplate {
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
    fn test_html_escapes_names() {
        let records = vec![StudentRecord::new(3, "<Zed & Co>".to_string(), 20, 20)];
        let ctx = ReportContext::new("Marks", &records);
        let output = HtmlReporter::new().render(&ctx).expect("render");

        assert!(output.contains("<title>Marks</title>"));
        assert!(output.contains("&lt;Zed &amp; Co&gt;"));
        assert!(!output.contains("<Zed"));
        assert!(output.contains("25.0%"));
        assert!(output.contains("<td class=\"grade grade-F\">F</td>"));
    }
}
