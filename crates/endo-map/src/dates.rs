//! Fixed-format date parsing for manifest fields.
//!
//! Manifests write dates day-first with `/` separators. Parsing never depends
//! on the process locale: the shape is checked character by character against
//! a template and the calendar is validated by `chrono`.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Human-readable form of the birth-date format.
pub const DATE_FORMAT: &str = "dd/MM/yyyy";

/// Human-readable form of the procedure date-time format.
pub const DATE_TIME_FORMAT: &str = "dd/MM/yyyy HH:mm:ss";

const DATE_TEMPLATE: &str = "00/00/0000";
const DATE_TIME_TEMPLATE: &str = "00/00/0000 00:00:00";

/// Parses a `dd/MM/yyyy` date. Returns `None` unless the text has exactly
/// that shape and names a real calendar day.
pub fn parse_day_month_year(value: &str) -> Option<NaiveDate> {
    if !matches_template(value, DATE_TEMPLATE) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%d/%m/%Y").ok()
}

/// Parses a `dd/MM/yyyy HH:mm:ss` date-time on the 24-hour clock.
pub fn parse_day_month_year_time(value: &str) -> Option<NaiveDateTime> {
    if !matches_template(value, DATE_TIME_TEMPLATE) {
        return None;
    }
    NaiveDateTime::parse_from_str(value, "%d/%m/%Y %H:%M:%S")
        .ok()
        // chrono reads second 60 as a leap second
        .filter(|parsed| parsed.nanosecond() < 1_000_000_000)
}

/// `0` in the template stands for any ASCII digit; every other character
/// must match literally.
fn matches_template(value: &str, template: &str) -> bool {
    value.len() == template.len()
        && value
            .bytes()
            .zip(template.bytes())
            .all(|(actual, expected)| match expected {
                b'0' => actual.is_ascii_digit(),
                _ => actual == expected,
            })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;

    #[test]
    fn parses_valid_date() {
        assert_eq!(
            parse_day_month_year("01/01/1980"),
            NaiveDate::from_ymd_opt(1980, 1, 1)
        );
        assert_eq!(
            parse_day_month_year("29/02/2020"),
            NaiveDate::from_ymd_opt(2020, 2, 29)
        );
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(parse_day_month_year("31/02/2020").is_none());
        assert!(parse_day_month_year("29/02/2021").is_none());
        assert!(parse_day_month_year("00/01/2020").is_none());
        assert!(parse_day_month_year("01/13/2020").is_none());
    }

    #[test]
    fn rejects_wrong_shape() {
        assert!(parse_day_month_year("").is_none());
        assert!(parse_day_month_year("1/1/1980").is_none());
        assert!(parse_day_month_year("1980-01-01").is_none());
        assert!(parse_day_month_year("01/01/80").is_none());
        assert!(parse_day_month_year(" 01/01/1980").is_none());
        assert!(parse_day_month_year("01/01/1980 10:00:00").is_none());
        assert!(parse_day_month_year("+1/01/1980").is_none());
    }

    #[test]
    fn parses_valid_date_time() {
        let parsed = parse_day_month_year_time("03/11/2021 14:05:30").expect("parse");
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2021, 11, 3).unwrap());
        assert_eq!(parsed.time(), NaiveTime::from_hms_opt(14, 5, 30).unwrap());
        assert_eq!(
            parse_day_month_year_time("31/12/1999 23:59:59").map(|dt| dt.hour()),
            Some(23)
        );
    }

    #[test]
    fn rejects_bad_date_time() {
        assert!(parse_day_month_year_time("03/11/2021").is_none());
        assert!(parse_day_month_year_time("03/11/2021 24:00:00").is_none());
        assert!(parse_day_month_year_time("03/11/2021 12:60:00").is_none());
        assert!(parse_day_month_year_time("31/12/2016 23:59:60").is_none());
        assert!(parse_day_month_year_time("03/11/2021 2:05:30 PM").is_none());
        assert!(parse_day_month_year_time("03/11/2021T14:05:30").is_none());
        assert!(parse_day_month_year_time("31/04/2021 14:05:30").is_none());
    }
}
