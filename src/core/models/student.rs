//! Student record model

use crate::core::grading::{self, Grade};

/// One student on the roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    /// Student number; expected to be unique but never enforced
    pub id: i64,

    /// Free-text name, stored verbatim
    pub name: String,

    /// Sum of the three coursework components (each nominally 0-20). Wider
    /// than a single component so any three `i32` marks add up safely.
    pub coursework_total: i64,

    /// Exam mark (nominally 0-100)
    pub exam_mark: i32,
}

impl StudentRecord {
    /// Create a record from an already summed coursework total
    #[must_use]
    pub const fn new(id: i64, name: String, coursework_total: i64, exam_mark: i32) -> Self {
        Self {
            id,
            name,
            coursework_total,
            exam_mark,
        }
    }

    /// Create a record from the three coursework components
    #[must_use]
    pub fn from_components(id: i64, name: String, coursework: [i32; 3], exam_mark: i32) -> Self {
        Self::new(id, name, coursework_sum(coursework), exam_mark)
    }

    /// Overall percentage, rounded to two decimal places
    #[must_use]
    pub fn percentage(&self) -> f64 {
        grading::percentage(self.coursework_total, i64::from(self.exam_mark))
    }

    /// Letter grade for [`percentage`](Self::percentage)
    #[must_use]
    pub fn grade(&self) -> Grade {
        grading::grade_from_percentage(self.percentage())
    }

    /// Split the coursework total back into three components for storage.
    ///
    /// The first two parts are `floor(total / 3)` and the third takes the
    /// remainder, so the original components only survive when they were equal.
    #[must_use]
    pub const fn coursework_components(&self) -> [i64; 3] {
        let part = self.coursework_total.div_euclid(3);
        [part, part, self.coursework_total - 2 * part]
    }

    /// Apply a single field update
    pub fn apply(&mut self, update: RecordUpdate) {
        match update {
            RecordUpdate::Name(name) => self.name = name,
            RecordUpdate::Coursework(parts) => {
                self.coursework_total = coursework_sum(parts);
            }
            RecordUpdate::Exam(mark) => self.exam_mark = mark,
        }
    }
}

fn coursework_sum(parts: [i32; 3]) -> i64 {
    parts.iter().copied().map(i64::from).sum()
}

/// A change to one field of an existing record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordUpdate {
    /// Replace the name
    Name(String),
    /// Replace the coursework total with the sum of three new components
    Coursework([i32; 3]),
    /// Replace the exam mark
    Exam(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StudentRecord {
        StudentRecord::new(1, "A".to_string(), 50, 80)
    }

    #[test]
    fn test_from_components_sums_coursework() {
        let record = StudentRecord::from_components(7, "Ada".to_string(), [12, 15, 19], 70);
        assert_eq!(record.coursework_total, 46);
        assert_eq!(record.exam_mark, 70);
    }

    #[test]
    fn test_from_components_with_extreme_marks() {
        let record =
            StudentRecord::from_components(1, "A".to_string(), [2_000_000_000, 2_000_000_000, 1], 1);
        assert_eq!(record.coursework_total, 4_000_000_001);
        assert_eq!(record.grade(), Grade::A);
        assert_eq!(record.coursework_components().iter().sum::<i64>(), 4_000_000_001);
    }

    #[test]
    fn test_percentage_and_grade() {
        let record = sample();
        assert!((record.percentage() - 81.25).abs() < f64::EPSILON);
        assert_eq!(record.grade(), Grade::A);
    }

    #[test]
    fn test_coursework_components_remainder_on_third() {
        let record = StudentRecord::new(1, "A".to_string(), 50, 0);
        assert_eq!(record.coursework_components(), [16, 16, 18]);

        let even = StudentRecord::new(1, "A".to_string(), 45, 0);
        assert_eq!(even.coursework_components(), [15, 15, 15]);
    }

    #[test]
    fn test_coursework_components_always_sum_to_total() {
        for total in [-7, -1, 0, 1, 2, 59, 60] {
            let record = StudentRecord::new(1, "A".to_string(), total, 0);
            let parts = record.coursework_components();
            assert_eq!(parts.iter().sum::<i64>(), total);
            assert_eq!(parts[0], parts[1]);
        }
    }

    #[test]
    fn test_apply_updates() {
        let mut record = sample();

        record.apply(RecordUpdate::Name("Grace".to_string()));
        assert_eq!(record.name, "Grace");

        record.apply(RecordUpdate::Coursework([10, 10, 5]));
        assert_eq!(record.coursework_total, 25);

        record.apply(RecordUpdate::Coursework([i32::MAX, i32::MAX, 1]));
        assert_eq!(record.coursework_total, 2 * i64::from(i32::MAX) + 1);

        record.apply(RecordUpdate::Exam(41));
        assert_eq!(record.exam_mark, 41);
        assert_eq!(record.id, 1);
    }
}
