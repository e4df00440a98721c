//! Percentage and letter-grade calculations

use std::fmt;

/// Coursework is marked out of 60 and the exam out of 100.
pub const MAX_COMBINED_MARK: i64 = 160;

/// Letter grades, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    /// 70% and above
    A,
    /// 60% and above
    B,
    /// 50% and above
    C,
    /// 40% and above
    D,
    /// Below 40%
    F,
}

/// Lower bounds checked from the top; the first bound met wins.
const GRADE_THRESHOLDS: [(f64, Grade); 4] = [
    (70.0, Grade::A),
    (60.0, Grade::B),
    (50.0, Grade::C),
    (40.0, Grade::D),
];

impl Grade {
    /// Single-letter form
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::F => 'F',
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Combined percentage: `(coursework + exam) / 160 * 100`, rounded to 2 places
/// with [`round2`].
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percentage(coursework_total: i64, exam_mark: i64) -> f64 {
    let sum = coursework_total.saturating_add(exam_mark);
    round2(sum as f64 / MAX_COMBINED_MARK as f64 * 100.0)
}

/// Letter grade for a percentage
#[must_use]
pub fn grade_from_percentage(percentage: f64) -> Grade {
    GRADE_THRESHOLDS
        .iter()
        .find(|(bound, _)| percentage >= *bound)
        .map_or(Grade::F, |(_, grade)| *grade)
}

/// Round to two decimal places.
///
/// The exact binary value of `value` is rounded, so `30.625000000000004` goes up
/// to `30.63` while a true tie such as `65.625` goes to the even `65.62`.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1 << 52) - 1);
    // value = mantissa * 2^exponent
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1 << 52), biased - 1075)
    };
    if exponent >= 0 {
        return value;
    }

    let scaled = u128::from(mantissa) * 100;
    let shift = exponent.unsigned_abs();
    let hundredths = if shift >= 128 {
        0
    } else {
        let whole = scaled >> shift;
        let rest = scaled - (whole << shift);
        let half = 1_u128 << (shift - 1);
        if rest > half || (rest == half && whole & 1 == 1) {
            whole + 1
        } else {
            whole
        }
    };

    let rounded = hundredths as f64 / 100.0;
    if value.is_sign_negative() {
        -rounded
    } else {
        rounded
    }
}

/// Render a percentage the way it is shown to users: always at least one
/// decimal place (`50.0`, `81.25`).
#[must_use]
pub fn format_percentage(value: f64) -> String {
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_percentage_known_values() {
        assert_close(percentage(60, 100), 100.0);
        assert_close(percentage(0, 0), 0.0);
        assert_close(percentage(30, 50), 50.0);
        assert_close(percentage(50, 80), 81.25);
    }

    #[test]
    fn test_percentage_rounds_to_two_places() {
        // 1/160 = 0.625%, an exact tie
        assert_close(percentage(1, 0), 0.62);
        // 3/160 = 1.875%
        assert_close(percentage(3, 0), 1.88);
        // 7/160 = 4.375%
        assert_close(percentage(0, 7), 4.38);
    }

    #[test]
    fn test_percentage_rounds_the_computed_value() {
        // 23/160*100 evaluates just below 14.375
        assert_close(percentage(23, 0), 14.37);
        // 49/160*100 evaluates just above 30.625
        assert_close(percentage(49, 0), 30.63);
        assert_close(percentage(51, 0), 31.87);
        assert_close(percentage(60, 33), 58.13);
    }

    #[test]
    fn test_percentage_sums_large_marks() {
        let total = i64::from(i32::MAX) * 3;
        assert!(percentage(total, 0) > 0.0);
    }

    #[test]
    fn test_percentage_negative_marks() {
        assert_close(percentage(-16, 0), -10.0);
    }

    #[test]
    fn test_grade_thresholds_exact() {
        assert_eq!(grade_from_percentage(100.0), Grade::A);
        assert_eq!(grade_from_percentage(70.0), Grade::A);
        assert_eq!(grade_from_percentage(69.99), Grade::B);
        assert_eq!(grade_from_percentage(60.0), Grade::B);
        assert_eq!(grade_from_percentage(59.99), Grade::C);
        assert_eq!(grade_from_percentage(50.0), Grade::C);
        assert_eq!(grade_from_percentage(49.99), Grade::D);
        assert_eq!(grade_from_percentage(40.0), Grade::D);
        assert_eq!(grade_from_percentage(39.99), Grade::F);
        assert_eq!(grade_from_percentage(0.0), Grade::F);
    }

    #[test]
    fn test_grade_display() {
        assert_eq!(Grade::A.to_string(), "A");
        assert_eq!(Grade::F.to_string(), "F");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(50.0), "50.0");
        assert_eq!(format_percentage(81.25), "81.25");
        assert_eq!(format_percentage(100.0), "100.0");
    }

    #[test]
    fn test_round2() {
        assert_close(round2(66.666_666), 66.67);
        assert_close(round2(12.0), 12.0);
        assert_close(round2(-10.004), -10.0);
    }

    #[test]
    fn test_round2_ties_go_to_even() {
        assert_close(round2(65.625), 65.62);
        assert_close(round2(0.375), 0.38);
        assert_close(round2(-0.625), -0.62);
    }
}
