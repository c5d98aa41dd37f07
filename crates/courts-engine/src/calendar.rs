//! Weekday parsing and upcoming-date selection.

use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;

use crate::error::{CourtsError, Result};

/// Weekdays checked when a request names none.
pub const DEFAULT_WEEKDAYS: [Weekday; 2] = [Weekday::Sat, Weekday::Sun];

const WEEKDAY_PREFIXES: [(&str, Weekday); 7] = [
    ("mon", Weekday::Mon),
    ("tue", Weekday::Tue),
    ("wed", Weekday::Wed),
    ("thu", Weekday::Thu),
    ("fri", Weekday::Fri),
    ("sat", Weekday::Sat),
    ("sun", Weekday::Sun),
];

/// Parse a weekday by its first three letters, case-insensitively.
///
/// `"Saturday"`, `"SAT"` and `"sat"` all resolve to `Weekday::Sat`.
///
/// # Errors
/// Returns `CourtsError::UnknownWeekday` if the prefix matches no weekday.
pub fn parse_weekday(token: &str) -> Result<Weekday> {
    let trimmed = token.trim();
    let prefix: String = trimmed.chars().take(3).collect::<String>().to_lowercase();
    WEEKDAY_PREFIXES
        .iter()
        .find(|(name, _)| *name == prefix)
        .map(|(_, day)| *day)
        .ok_or_else(|| CourtsError::UnknownWeekday(trimmed.to_string()))
}

/// Parse a comma- or whitespace-separated weekday list such as `"sat, sun"`.
///
/// Empty items are skipped, so `""` yields no weekdays.
pub fn parse_weekday_list(raw: &str) -> Result<Vec<Weekday>> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|item| !item.is_empty())
        .map(parse_weekday)
        .collect()
}

/// Dates within `window_days` of `anchor` (inclusive) falling on one of
/// `weekdays`, ascending, formatted `YYYY-MM-DD`.
pub fn dates_for_weekdays(weekdays: &[Weekday], anchor: NaiveDate, window_days: u32) -> Vec<String> {
    (0..i64::from(window_days))
        .map(|offset| anchor + Duration::days(offset))
        .filter(|date| weekdays.contains(&date.weekday()))
        .map(|date| date.format("%Y-%m-%d").to_string())
        .collect()
}

/// Today's date on the club's wall clock.
pub fn today_in(timezone: Tz) -> NaiveDate {
    Utc::now().with_timezone(&timezone).date_naive()
}
