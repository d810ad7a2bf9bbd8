//! Calendar helpers and the canonical date key.
//!
//! Every day in a plan is addressed by a [`DateKey`], a validated
//! `YYYY-MM-DD` string. Because the format is fixed-width and zero-padded,
//! ordering keys as strings is the same as ordering them chronologically,
//! which the selection and schedule maps rely on.

use std::{fmt, str::FromStr};

use jiff::{Span, Zoned, civil::Date, civil::Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, WeekendlyError};

/// Canonical `YYYY-MM-DD` key identifying one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(Date);

impl DateKey {
    /// Parses a date key, rejecting anything that is not exactly
    /// `YYYY-MM-DD` naming a real calendar date.
    pub fn parse(input: &str) -> Result<Self> {
        if !has_key_shape(input) {
            return Err(WeekendlyError::invalid_input("date")
                .with_reason(format!("'{input}' is not in YYYY-MM-DD format")));
        }
        let date = input.parse::<Date>().map_err(|e| {
            WeekendlyError::invalid_input("date").with_reason(format!("'{input}': {e}"))
        })?;
        Ok(Self(date))
    }

    /// Wraps a civil date.
    pub fn from_date(date: Date) -> Self {
        Self(date)
    }

    /// Returns the underlying civil date.
    pub fn date(&self) -> Date {
        self.0
    }

    /// Returns the key of the following day.
    pub fn next_day(&self) -> Self {
        Self(add_days(self.0, 1))
    }
}

// Four digits, dash, two digits, dash, two digits.
fn has_key_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for DateKey {
    type Err = WeekendlyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Date> for DateKey {
    fn from(date: Date) -> Self {
        Self(date)
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Today's date in the system time zone.
pub fn today() -> Date {
    Zoned::now().date()
}

/// Shifts a date by a number of days (negative moves backwards).
pub fn add_days(date: Date, days: i64) -> Date {
    date.saturating_add(Span::new().days(days))
}

/// The upcoming Saturday, or `from` itself when it already is one.
pub fn next_saturday(from: Date) -> Date {
    let offset = 6 - from.weekday().to_sunday_zero_offset();
    add_days(from, i64::from(offset))
}

/// Seven consecutive dates starting at `start`.
pub fn week_dates(start: Date) -> [Date; 7] {
    std::array::from_fn(|i| add_days(start, i as i64))
}

/// The weekend a fresh plan starts with: the upcoming Saturday and Sunday.
pub fn default_selected_days(today: Date) -> Vec<DateKey> {
    let saturday = DateKey::from_date(next_saturday(today));
    vec![saturday, saturday.next_day()]
}

/// Long-form label for a plan heading, e.g. `Saturday, Oct 28`.
pub fn format_for_display(key: &DateKey) -> String {
    key.date().strftime("%A, %b %-d").to_string()
}

/// Calendar header label for the week containing `date`, e.g. `October 2023`.
pub fn month_label(date: Date) -> String {
    date.strftime("%B %Y").to_string()
}

/// Short weekday name, e.g. `Sat`.
pub fn short_weekday(date: Date) -> &'static str {
    match date.weekday() {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_parse_accepts_zero_padded_keys() {
        let key = DateKey::parse("2024-06-01").unwrap();
        assert_eq!(key.date(), date(2024, 6, 1));
        assert_eq!(key.to_string(), "2024-06-01");
    }

    #[test]
    fn test_parse_rejects_malformed_keys() {
        for bad in ["2024-6-1", "20240601", "2024/06/01", "2024-02-30", "", "2024-06-01T00:00"] {
            assert!(DateKey::parse(bad).is_err(), "accepted {bad}");
        }
    }

    #[test]
    fn test_key_order_is_chronological() {
        let mut keys = vec![
            DateKey::parse("2024-06-01").unwrap(),
            DateKey::parse("2023-12-31").unwrap(),
            DateKey::parse("2024-05-30").unwrap(),
        ];
        keys.sort();
        let rendered: Vec<String> = keys.iter().map(ToString::to_string).collect();
        let mut lexical = rendered.clone();
        lexical.sort();
        assert_eq!(rendered, lexical);
        assert_eq!(rendered[0], "2023-12-31");
    }

    #[test]
    fn test_next_saturday_from_weekdays() {
        // 2024-05-29 is a Wednesday
        assert_eq!(next_saturday(date(2024, 5, 29)), date(2024, 6, 1));
        // Saturday stays put
        assert_eq!(next_saturday(date(2024, 6, 1)), date(2024, 6, 1));
        // Sunday rolls forward six days
        assert_eq!(next_saturday(date(2024, 6, 2)), date(2024, 6, 8));
    }

    #[test]
    fn test_default_selected_days_is_the_weekend() {
        let days = default_selected_days(date(2024, 5, 29));
        let rendered: Vec<String> = days.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["2024-06-01", "2024-06-02"]);
    }

    #[test]
    fn test_week_dates_cross_month_boundary() {
        let week = week_dates(date(2024, 5, 29));
        assert_eq!(week[0], date(2024, 5, 29));
        assert_eq!(week[3], date(2024, 6, 1));
        assert_eq!(week[6], date(2024, 6, 4));
    }

    #[test]
    fn test_add_days_backwards() {
        assert_eq!(add_days(date(2024, 3, 3), -7), date(2024, 2, 25));
    }

    #[test]
    fn test_display_labels() {
        let key = DateKey::parse("2023-10-28").unwrap();
        assert_eq!(format_for_display(&key), "Saturday, Oct 28");
        assert_eq!(month_label(key.date()), "October 2023");
        assert_eq!(short_weekday(key.date()), "Sat");
    }

    #[test]
    fn test_serde_uses_key_string() {
        let key = DateKey::parse("2024-06-01").unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"2024-06-01\"");
        let back: DateKey = serde_json::from_str("\"2024-06-01\"").unwrap();
        assert_eq!(back, key);
        assert!(serde_json::from_str::<DateKey>("\"June 1\"").is_err());
    }
}
