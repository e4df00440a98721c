//! Report command handler

use std::path::{Path, PathBuf};
use student_roster::config::Config;
use student_roster::core::report::{ReportContext, ReportFormat};
use student_roster::core::store::RecordStore;
use student_roster::{error, info};

/// Render a roster report to `output`, or to `<reports_dir>/<roster>_report.<ext>`
///
/// # Errors
/// Returns a message if the format is unknown or the report cannot be written
pub fn run(
    store: &RecordStore,
    format: &str,
    output: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let format: ReportFormat = format.parse().map_err(|e| format!("✗ {e}"))?;
    let output_path =
        output.map_or_else(|| default_output_path(store.path(), config, format), Path::to_path_buf);

    let ctx = ReportContext::new(report_title(store.path()), store.records());
    format
        .reporter()
        .generate(&ctx, &output_path)
        .map_err(|e| {
            error!("Report generation failed: {e}");
            format!("✗ Failed to write report {}: {e}", output_path.display())
        })?;

    info!("Wrote {format} report to {}", output_path.display());
    println!("✓ Report generated: {}", output_path.display());
    Ok(())
}

fn roster_stem(roster_path: &Path) -> &str {
    roster_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("roster")
}

fn report_title(roster_path: &Path) -> String {
    format!("Student Report: {}", roster_stem(roster_path))
}

fn default_output_path(roster_path: &Path, config: &Config, format: ReportFormat) -> PathBuf {
    PathBuf::from(&config.paths.reports_dir).join(format!(
        "{}_report.{}",
        roster_stem(roster_path),
        format.extension()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        let mut config = Config::default();
        config.paths.reports_dir = "/tmp/reports".to_string();
        let path = default_output_path(
            Path::new("data/studentMarks.txt"),
            &config,
            ReportFormat::Markdown,
        );
        assert_eq!(path, PathBuf::from("/tmp/reports/studentMarks_report.md"));
    }

    #[test]
    fn test_report_title() {
        assert_eq!(
            report_title(Path::new("marks.txt")),
            "Student Report: marks"
        );
    }
}
