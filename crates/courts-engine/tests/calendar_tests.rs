//! Tests for weekday parsing and date selection.

use chrono::{NaiveDate, Weekday};
use courts_engine::calendar::{dates_for_weekdays, parse_weekday, parse_weekday_list};
use courts_engine::error::CourtsError;

fn wednesday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
}

#[test]
fn weekday_matches_first_three_letters_case_insensitively() {
    assert_eq!(parse_weekday("sat").unwrap(), Weekday::Sat);
    assert_eq!(parse_weekday("Saturday").unwrap(), Weekday::Sat);
    assert_eq!(parse_weekday("SUN").unwrap(), Weekday::Sun);
    assert_eq!(parse_weekday(" thursday ").unwrap(), Weekday::Thu);
}

#[test]
fn unknown_weekday_is_rejected() {
    let err = parse_weekday("sa").unwrap_err();
    assert!(matches!(err, CourtsError::UnknownWeekday(ref t) if t == "sa"));
    assert!(err.is_configuration());
    assert!(parse_weekday("friyay").is_ok());
    assert!(parse_weekday("xyz").is_err());
}

#[test]
fn weekday_list_accepts_commas_and_spaces() {
    assert_eq!(
        parse_weekday_list("sat, sun").unwrap(),
        vec![Weekday::Sat, Weekday::Sun]
    );
    assert_eq!(
        parse_weekday_list("mon tue,wed").unwrap(),
        vec![Weekday::Mon, Weekday::Tue, Weekday::Wed]
    );
    assert!(parse_weekday_list("").unwrap().is_empty());
    assert!(parse_weekday_list("sat,,nope").is_err());
}

#[test]
fn weekend_within_a_week_of_wednesday() {
    let dates = dates_for_weekdays(&[Weekday::Sat, Weekday::Sun], wednesday(), 7);
    assert_eq!(dates, vec!["2026-10-17", "2026-10-18"]);
}

#[test]
fn anchor_date_is_inclusive() {
    let dates = dates_for_weekdays(&[Weekday::Wed], wednesday(), 7);
    assert_eq!(dates, vec!["2026-10-14"]);
}

#[test]
fn two_week_window_covers_each_weekday_twice() {
    let dates = dates_for_weekdays(&[Weekday::Sun, Weekday::Sat], wednesday(), 14);
    assert_eq!(
        dates,
        vec!["2026-10-17", "2026-10-18", "2026-10-24", "2026-10-25"]
    );
}

#[test]
fn window_crossing_month_end_is_ascending() {
    let anchor = NaiveDate::from_ymd_opt(2026, 10, 29).unwrap();
    let dates = dates_for_weekdays(&[Weekday::Sat, Weekday::Mon], anchor, 7);
    assert_eq!(dates, vec!["2026-10-31", "2026-11-02"]);
}

#[test]
fn zero_window_is_empty() {
    assert!(dates_for_weekdays(&[Weekday::Wed], wednesday(), 0).is_empty());
}
