//! Line parser and writer for the roster text format
//!
//! ```text
//! <count>
//! <id>,<name>,<cw1>,<cw2>,<cw3>,<exam>
//! ```
//!
//! The count line is advisory and never checked. Malformed data lines are
//! skipped and reported as [`SkippedLine`]s rather than failing the load.

use crate::core::models::StudentRecord;
use std::fmt;
use std::fmt::Write;

/// Number of comma-separated fields on a record line
pub const FIELD_COUNT: usize = 6;

/// Field names, in file order
const FIELD_NAMES: [&str; FIELD_COUNT] = ["id", "name", "cw1", "cw2", "cw3", "exam"];

/// Why a data line was left out of the roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The line did not split into exactly six fields
    FieldCount {
        /// Number of fields actually found
        found: usize,
    },
    /// A numeric field did not parse as an integer
    InvalidNumber {
        /// Field name (`id`, `cw1`, `cw2`, `cw3` or `exam`)
        field: &'static str,
        /// Raw text of the field
        value: String,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount { found } => {
                write!(f, "expected {FIELD_COUNT} fields, found {found}")
            }
            Self::InvalidNumber { field, value } => {
                write!(f, "field '{field}' is not an integer: '{value}'")
            }
        }
    }
}

/// Result of parsing one data line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// A well-formed record
    Record(StudentRecord),
    /// A line that was skipped
    Skipped(SkipReason),
}

/// A skipped line and where it was
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the source text
    pub line_number: usize,
    /// Why it was skipped
    pub reason: SkipReason,
}

/// Records and skips from one roster text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRoster {
    /// Valid records in file order
    pub records: Vec<StudentRecord>,
    /// Data lines that were skipped
    pub skipped: Vec<SkippedLine>,
}

/// Parse a whole roster text.
///
/// Blank lines are ignored everywhere. The first non-blank line is the count
/// header and is dropped; a text with no lines after it yields an empty roster.
#[must_use]
pub fn parse_roster(content: &str) -> ParsedRoster {
    let mut parsed = ParsedRoster::default();

    let data_lines = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .skip(1);

    for (line_number, line) in data_lines {
        match parse_line(line) {
            LineOutcome::Record(record) => parsed.records.push(record),
            LineOutcome::Skipped(reason) => parsed.skipped.push(SkippedLine {
                line_number,
                reason,
            }),
        }
    }

    parsed
}

/// Parse a single (already trimmed) data line
#[must_use]
pub fn parse_line(line: &str) -> LineOutcome {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != FIELD_COUNT {
        return LineOutcome::Skipped(SkipReason::FieldCount {
            found: fields.len(),
        });
    }

    let id = match parse_field::<i64>(&fields, 0) {
        Ok(id) => id,
        Err(reason) => return LineOutcome::Skipped(reason),
    };

    let mut marks = [0_i32; 4];
    for (slot, idx) in marks.iter_mut().zip(2..FIELD_COUNT) {
        match parse_field::<i32>(&fields, idx) {
            Ok(value) => *slot = value,
            Err(reason) => return LineOutcome::Skipped(reason),
        }
    }

    let [cw1, cw2, cw3, exam] = marks;
    LineOutcome::Record(StudentRecord::from_components(
        id,
        fields[1].to_string(),
        [cw1, cw2, cw3],
        exam,
    ))
}

fn parse_field<T: std::str::FromStr>(fields: &[&str], idx: usize) -> Result<T, SkipReason> {
    let raw = fields[idx];
    raw.trim()
        .parse::<T>()
        .map_err(|_| SkipReason::InvalidNumber {
            field: FIELD_NAMES[idx],
            value: raw.to_string(),
        })
}

/// Render records in the roster text format.
///
/// Coursework is written as three parts via
/// [`StudentRecord::coursework_components`].
#[must_use]
pub fn render_roster(records: &[StudentRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", records.len());
    for record in records {
        let [c1, c2, c3] = record.coursework_components();
        let _ = writeln!(
            out,
            "{},{},{c1},{c2},{c3},{}",
            record.id, record.name, record.exam_mark
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_valid() {
        let outcome = parse_line("1845,John Smith,14,15,17,69");
        assert_eq!(
            outcome,
            LineOutcome::Record(StudentRecord::new(1845, "John Smith".to_string(), 46, 69))
        );
    }

    #[test]
    fn test_parse_line_trims_numeric_fields_only() {
        let outcome = parse_line("7, Ada Lovelace , 10 ,10,10, 90");
        let LineOutcome::Record(record) = outcome else {
            panic!("expected a record");
        };
        assert_eq!(record.id, 7);
        assert_eq!(record.name, " Ada Lovelace ");
        assert_eq!(record.coursework_total, 30);
        assert_eq!(record.exam_mark, 90);
    }

    #[test]
    fn test_parse_line_wrong_field_count() {
        assert_eq!(
            parse_line("1,Ann,10,10,10"),
            LineOutcome::Skipped(SkipReason::FieldCount { found: 5 })
        );
        assert_eq!(
            parse_line("1,Smith, Ann,10,10,10,50"),
            LineOutcome::Skipped(SkipReason::FieldCount { found: 7 })
        );
    }

    #[test]
    fn test_parse_line_invalid_number() {
        assert_eq!(
            parse_line("1,Ann,10,x,10,50"),
            LineOutcome::Skipped(SkipReason::InvalidNumber {
                field: "cw2",
                value: "x".to_string(),
            })
        );
        assert_eq!(
            parse_line("abc,Ann,10,10,10,50"),
            LineOutcome::Skipped(SkipReason::InvalidNumber {
                field: "id",
                value: "abc".to_string(),
            })
        );
        assert!(matches!(
            parse_line("1,Ann,10,10,10,5.5"),
            LineOutcome::Skipped(SkipReason::InvalidNumber { field: "exam", .. })
        ));
    }

    #[test]
    fn test_parse_roster_skips_header_and_blank_lines() {
        let content = "\n3\n\n1,A,10,10,10,50\n\n2,B,20,20,20,100\n";
        let parsed = parse_roster(content);
        assert_eq!(parsed.records.len(), 2);
        assert!(parsed.skipped.is_empty());
        assert_eq!(parsed.records[1].coursework_total, 60);
    }

    #[test]
    fn test_parse_roster_accepts_extreme_integer_marks() {
        let parsed = parse_roster("1\n1,A,2000000000,2000000000,1,1\n");
        assert!(parsed.skipped.is_empty());
        assert_eq!(parsed.records[0].coursework_total, 4_000_000_001);

        let rendered = render_roster(&parsed.records);
        assert_eq!(rendered, "1\n1,A,1333333333,1333333333,1333333335,1\n");
        assert_eq!(parse_roster(&rendered).records, parsed.records);
    }

    #[test]
    fn test_parse_roster_header_only_is_empty() {
        assert!(parse_roster("0\n").records.is_empty());
        assert!(parse_roster("").records.is_empty());
    }

    #[test]
    fn test_parse_roster_records_skip_positions() {
        let content = "3\n1,A,10,10,10,50\n2,B,10,10,10\n3,C,1,2,3,4\n";
        let parsed = parse_roster(content);
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(
            parsed.skipped,
            vec![SkippedLine {
                line_number: 3,
                reason: SkipReason::FieldCount { found: 5 },
            }]
        );
    }

    #[test]
    fn test_render_roster_splits_coursework() {
        let records = vec![
            StudentRecord::new(1, "A".to_string(), 50, 80),
            StudentRecord::new(2, "B".to_string(), 30, 40),
        ];
        assert_eq!(render_roster(&records), "2\n1,A,16,16,18,80\n2,B,10,10,10,40\n");
    }

    #[test]
    fn test_render_empty_roster() {
        assert_eq!(render_roster(&[]), "0\n");
    }

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(
            SkipReason::FieldCount { found: 2 }.to_string(),
            "expected 6 fields, found 2"
        );
    }
}
