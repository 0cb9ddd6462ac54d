//! Canonical Months
//!
//! Reports and dashboard queries are keyed by calendar month. Every input
//! path (free text, the structured picker, the CLI) resolves to the same
//! canonical `YYYY-MM` value; anything else is rejected rather than guessed.

use chrono::{Datelike, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// A calendar month, always rendered as `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Month {
    year: i32,
    month: u32,
}

/// Month parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthError {
    #[error("month is empty")]
    Empty,

    #[error("'{0}' is not in YYYY-MM format")]
    Format(String),

    #[error("month {0} is out of range (01-12)")]
    MonthOutOfRange(u32),

    #[error("year {0} is out of range (0000-9999)")]
    YearOutOfRange(i32),
}

fn month_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // ASCII digits only; `\d` would also accept other Unicode digits
    PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9]{4})-([0-9]{2})$").expect("month pattern is a valid regex")
    })
}

impl Month {
    /// Parse a canonical `YYYY-MM` string
    pub fn parse(input: &str) -> Result<Self, MonthError> {
        if input.is_empty() {
            return Err(MonthError::Empty);
        }

        let caps = month_pattern()
            .captures(input)
            .ok_or_else(|| MonthError::Format(input.to_string()))?;

        let year: i32 = caps[1]
            .parse()
            .map_err(|_| MonthError::Format(input.to_string()))?;
        let month: u32 = caps[2]
            .parse()
            .map_err(|_| MonthError::Format(input.to_string()))?;

        Self::from_year_month(year, month)
    }

    /// Build a month from structured picker values
    pub fn from_year_month(year: i32, month: u32) -> Result<Self, MonthError> {
        if !(0..=9999).contains(&year) {
            return Err(MonthError::YearOutOfRange(year));
        }
        if !(1..=12).contains(&month) {
            return Err(MonthError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }

    /// The current month in UTC
    pub fn current() -> Self {
        Self::from_date(Utc::now().date_naive())
    }

    /// The month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        // year and month are range-checked on construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Human-readable label, e.g. "May 2024"
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = MonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Month {
    type Error = MonthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Month> for String {
    fn from(month: Month) -> Self {
        month.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical() {
        let month = Month::parse("2024-05").unwrap();
        assert_eq!(month.year(), 2024);
        assert_eq!(month.month(), 5);
        assert_eq!(month.to_string(), "2024-05");
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        for input in ["", "2024-5", "24-05", "2024/05", "2024-05-01", " 2024-05", "May 2024", "2024-٠٥"] {
            assert!(Month::parse(input).is_err(), "accepted {:?}", input);
        }
        assert_eq!(Month::parse(""), Err(MonthError::Empty));
    }

    #[test]
    fn test_parse_rejects_month_out_of_range() {
        assert_eq!(Month::parse("2024-13"), Err(MonthError::MonthOutOfRange(13)));
        assert_eq!(Month::parse("2024-00"), Err(MonthError::MonthOutOfRange(0)));
    }

    #[test]
    fn test_picker_and_text_agree() {
        let picked = Month::from_year_month(2024, 5).unwrap();
        let typed: Month = "2024-05".parse().unwrap();
        assert_eq!(picked, typed);
        assert_eq!(picked.to_string(), typed.to_string());
    }

    #[test]
    fn test_small_years_are_zero_padded() {
        let month = Month::from_year_month(987, 1).unwrap();
        assert_eq!(month.to_string(), "0987-01");
        assert!(Month::from_year_month(10000, 1).is_err());
    }

    #[test]
    fn test_label() {
        assert_eq!(Month::parse("2024-01").unwrap().label(), "January 2024");
        assert_eq!(Month::parse("2024-12").unwrap().label(), "December 2024");
    }

    #[test]
    fn test_serde_as_string() {
        let month = Month::parse("2024-05").unwrap();
        assert_eq!(serde_json::to_string(&month).unwrap(), "\"2024-05\"");
        let restored: Month = serde_json::from_str("\"2024-05\"").unwrap();
        assert_eq!(restored, month);
        assert!(serde_json::from_str::<Month>("\"2024-5\"").is_err());
    }
}
