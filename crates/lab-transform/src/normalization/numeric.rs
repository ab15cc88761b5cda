//! Numeric coercion utilities.

/// Parses a string as a finite f64, returning None for invalid or empty
/// strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|number| number.is_finite())
}

/// Outcome of coercing one raw numeric cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericParse {
    Number(f64),
    /// Non-empty text that is not a number.
    Invalid,
    Empty,
}

impl NumericParse {
    pub fn value(self) -> Option<f64> {
        match self {
            NumericParse::Number(value) => Some(value),
            NumericParse::Invalid | NumericParse::Empty => None,
        }
    }
}

pub fn coerce_numeric(raw: Option<&str>) -> NumericParse {
    match raw.map(str::trim) {
        None | Some("") => NumericParse::Empty,
        Some(text) => parse_f64(text).map_or(NumericParse::Invalid, NumericParse::Number),
    }
}

/// Whether a yield lies within the nominal 0–100 percent range.
pub fn is_valid_percentage(value: f64) -> bool {
    (0.0..=100.0).contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_f64(" 85.5 "), Some(85.5));
        assert_eq!(parse_f64("-3"), Some(-3.0));
        assert_eq!(parse_f64("1e2"), Some(100.0));
    }

    #[test]
    fn rejects_text_and_non_finite() {
        assert_eq!(parse_f64("n/a"), None);
        assert_eq!(parse_f64("85,5"), None);
        assert_eq!(parse_f64("NaN"), None);
        assert_eq!(parse_f64("inf"), None);
    }

    #[test]
    fn coerce_distinguishes_empty_from_invalid() {
        assert_eq!(coerce_numeric(None), NumericParse::Empty);
        assert_eq!(coerce_numeric(Some("  ")), NumericParse::Empty);
        assert_eq!(coerce_numeric(Some("abc")), NumericParse::Invalid);
        assert_eq!(coerce_numeric(Some("12")), NumericParse::Number(12.0));
    }

    #[test]
    fn percentage_bounds_inclusive() {
        assert!(is_valid_percentage(0.0));
        assert!(is_valid_percentage(100.0));
        assert!(!is_valid_percentage(100.1));
        assert!(!is_valid_percentage(-0.5));
    }
}
