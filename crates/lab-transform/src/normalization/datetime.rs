//! Multi-format calendar date parsing.
//!
//! Source sheets mix European, ISO and US conventions. Formats are tried in a
//! fixed order and the first successful match wins:
//!
//! 1. `DD/MM/YYYY` (slashes are always day-first)
//! 2. `YYYY-MM-DD` (ISO)
//! 3. `MM-DD-YYYY`
//! 4. `DD-MM-YYYY`
//!
//! Dash-separated dates with a trailing year are therefore read month-first
//! whenever both readings are valid (`03-04-2024` is 4 March 2024); the
//! day-first reading only applies when the first field exceeds 12.

use std::fmt;

use chrono::NaiveDate;

/// One accepted input layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    DayMonthYearSlash,
    IsoYearMonthDay,
    MonthDayYearDash,
    DayMonthYearDash,
}

impl DateFormat {
    /// Trial order used by [`parse_date`].
    pub const ORDER: [DateFormat; 4] = [
        DateFormat::DayMonthYearSlash,
        DateFormat::IsoYearMonthDay,
        DateFormat::MonthDayYearDash,
        DateFormat::DayMonthYearDash,
    ];

    /// chrono format string.
    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::DayMonthYearSlash => "%d/%m/%Y",
            DateFormat::IsoYearMonthDay => "%Y-%m-%d",
            DateFormat::MonthDayYearDash => "%m-%d-%Y",
            DateFormat::DayMonthYearDash => "%d-%m-%Y",
        }
    }

    fn separator(self) -> char {
        match self {
            DateFormat::DayMonthYearSlash => '/',
            _ => '-',
        }
    }

    fn year_first(self) -> bool {
        matches!(self, DateFormat::IsoYearMonthDay)
    }

    /// Field layout check: three fields, the year exactly four digits and
    /// the others one or two digits.
    fn matches_shape(self, value: &str) -> bool {
        let fields: Vec<&str> = value.split(self.separator()).collect();
        if fields.len() != 3 || fields.iter().any(|field| !is_digits(field)) {
            return false;
        }
        let (year, rest) = if self.year_first() {
            (fields[0], [fields[1], fields[2]])
        } else {
            (fields[2], [fields[0], fields[1]])
        };
        year.len() == 4 && rest.iter().all(|field| field.len() <= 2)
    }

    fn try_parse(self, value: &str) -> Option<NaiveDate> {
        if !self.matches_shape(value) {
            return None;
        }
        NaiveDate::parse_from_str(value, self.pattern()).ok()
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DateFormat::DayMonthYearSlash => "DD/MM/YYYY",
            DateFormat::IsoYearMonthDay => "YYYY-MM-DD",
            DateFormat::MonthDayYearDash => "MM-DD-YYYY",
            DateFormat::DayMonthYearDash => "DD-MM-YYYY",
        };
        f.write_str(label)
    }
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}

/// Outcome of parsing one raw date cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParse {
    Parsed { date: NaiveDate, format: DateFormat },
    /// No format matched; carries the original text.
    Unparsed(String),
    Empty,
}

impl DateParse {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DateParse::Parsed { date, .. } => Some(*date),
            DateParse::Unparsed(_) | DateParse::Empty => None,
        }
    }

    pub fn is_unparsed(&self) -> bool {
        matches!(self, DateParse::Unparsed(_))
    }
}

/// Parses a raw date cell.
///
/// Surrounding and interior spaces are removed before the formats are
/// tried.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lab_transform::normalization::parse_date;
///
/// assert_eq!(parse_date(" 17/02/2024 ").date(), NaiveDate::from_ymd_opt(2024, 2, 17));
/// assert_eq!(parse_date("2023-10-13").date(), NaiveDate::from_ymd_opt(2023, 10, 13));
/// assert_eq!(parse_date("yesterday").date(), None);
/// ```
pub fn parse_date(raw: &str) -> DateParse {
    let compact: String = raw.chars().filter(|ch| !ch.is_whitespace()).collect();
    if compact.is_empty() {
        return DateParse::Empty;
    }
    for format in DateFormat::ORDER {
        if let Some(date) = format.try_parse(&compact) {
            return DateParse::Parsed { date, format };
        }
    }
    DateParse::Unparsed(raw.trim().to_string())
}

/// Parses an optional cell; `None` maps to [`DateParse::Empty`].
pub fn parse_optional_date(raw: Option<&str>) -> DateParse {
    raw.map_or(DateParse::Empty, parse_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn reports_matching_format() {
        assert_eq!(
            parse_date("11-26-2024"),
            DateParse::Parsed {
                date: ymd(2024, 11, 26),
                format: DateFormat::MonthDayYearDash,
            }
        );
        assert_eq!(
            parse_date("17-02-2024"),
            DateParse::Parsed {
                date: ymd(2024, 2, 17),
                format: DateFormat::DayMonthYearDash,
            }
        );
    }

    #[test]
    fn two_digit_year_rejected() {
        assert!(parse_date("17/02/24").is_unparsed());
    }

    #[test]
    fn shape_guard() {
        assert!(DateFormat::IsoYearMonthDay.matches_shape("2024-1-5"));
        assert!(!DateFormat::IsoYearMonthDay.matches_shape("24-01-05"));
        assert!(!DateFormat::DayMonthYearSlash.matches_shape("1/2/3/2024"));
        assert!(!DateFormat::DayMonthYearSlash.matches_shape("a1/02/2024"));
    }
}
