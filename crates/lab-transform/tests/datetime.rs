//! Tests for multi-format date parsing.

use chrono::NaiveDate;
use lab_transform::normalization::{DateFormat, DateParse, parse_date, parse_optional_date};

fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

#[test]
fn slash_dates_are_day_first() {
    assert_eq!(parse_date("17/02/2024").date(), ymd(2024, 2, 17));
    assert_eq!(parse_date("03/04/2024").date(), ymd(2024, 4, 3));
}

#[test]
fn iso_dates() {
    assert_eq!(parse_date("2023-10-13").date(), ymd(2023, 10, 13));
}

#[test]
fn dash_dates_prefer_month_first() {
    assert_eq!(parse_date("11-26-2024").date(), ymd(2024, 11, 26));
    assert_eq!(parse_date("03-04-2024").date(), ymd(2024, 3, 4));
    // First field above 12 can only be a day.
    assert_eq!(parse_date("17-02-2024").date(), ymd(2024, 2, 17));
}

#[test]
fn whitespace_is_removed_before_parsing() {
    assert_eq!(parse_date("  17 / 02 / 2024 ").date(), ymd(2024, 2, 17));
}

#[test]
fn unparseable_keeps_original_text() {
    assert_eq!(
        parse_date(" 31/02/2024 "),
        DateParse::Unparsed("31/02/2024".to_string())
    );
    assert_eq!(
        parse_date("febrero 2024"),
        DateParse::Unparsed("febrero 2024".to_string())
    );
}

#[test]
fn empty_input_is_empty() {
    assert_eq!(parse_date("   "), DateParse::Empty);
    assert_eq!(parse_optional_date(None), DateParse::Empty);
}

#[test]
fn trial_order_is_fixed() {
    assert_eq!(
        DateFormat::ORDER,
        [
            DateFormat::DayMonthYearSlash,
            DateFormat::IsoYearMonthDay,
            DateFormat::MonthDayYearDash,
            DateFormat::DayMonthYearDash,
        ]
    );
    assert_eq!(DateFormat::IsoYearMonthDay.to_string(), "YYYY-MM-DD");
}
