use crate::BirthDate;

use std::str::FromStr;

use chrono::NaiveDate;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_parse_plain_date() {
    assert_eq!(BirthDate::from_str("1990-05-01").unwrap().date(), ymd(1990, 5, 1));
}

#[test]
fn test_parse_naive_date_time_keeps_date() {
    let date = BirthDate::from_str("1990-05-01T15:30:00.123").unwrap();
    assert_eq!(date.date(), ymd(1990, 5, 1));
}

#[test]
fn test_parse_offset_converts_to_utc_first() {
    let date = BirthDate::from_str("1990-05-01T22:00:00-03:00").unwrap();
    assert_eq!(date.date(), ymd(1990, 5, 2));
}

#[test]
fn test_parse_rejects_garbage() {
    assert!(BirthDate::from_str("01/05/1990").is_err());
    assert!(BirthDate::from_str("").is_err());
}

#[test]
fn test_wire_format_is_utc_midnight() {
    let date = BirthDate::new(ymd(1990, 5, 1));
    assert_eq!(date.to_wire(), "1990-05-01T00:00:00Z");
    assert_eq!(serde_json::to_string(&date).unwrap(), "\"1990-05-01T00:00:00Z\"");
}

#[test]
fn test_display_is_plain_date() {
    assert_eq!(BirthDate::new(ymd(2001, 12, 9)).to_string(), "2001-12-09");
}
