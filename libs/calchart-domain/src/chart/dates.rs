//! Strict `YYYY-MM-DD` date parsing

use chrono::NaiveDate;

/// Format string used both for parsing and for axis labels
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a calendar date written exactly as `YYYY-MM-DD`
///
/// chrono alone accepts `2024-1-5` and signed years, so the shape is checked
/// first: ten ASCII characters, digits everywhere except `-` at positions 4 and 7.
/// The calendar check (month range, days per month, leap years) is left to chrono.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 {
        return None;
    }

    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return None;
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_date() {
        assert_eq!(
            parse_iso_date("2024-01-02"),
            NaiveDate::from_ymd_opt(2024, 1, 2)
        );
    }

    #[test]
    fn test_leap_day() {
        assert!(parse_iso_date("2024-02-29").is_some());
        assert!(parse_iso_date("2023-02-29").is_none());
    }

    #[test]
    fn test_out_of_range_components() {
        assert!(parse_iso_date("2024-13-40").is_none());
        assert!(parse_iso_date("2024-00-10").is_none());
        assert!(parse_iso_date("2024-04-31").is_none());
    }

    #[test]
    fn test_wrong_shape() {
        for input in [
            "01-01-2024",
            "2024/01/01",
            "2024-1-5",
            "2024-01-01T00:00:00",
            " 2024-01-01",
            "+024-01-01",
            "",
            "not-a-date",
        ] {
            assert!(parse_iso_date(input).is_none(), "{input} should be rejected");
        }
    }
}
