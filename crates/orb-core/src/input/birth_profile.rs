//! Birth data validation for the daily reading flow.

use serde::{Deserialize, Serialize};

use crate::error::{OrbError, Result};

/// Oldest accepted birth year.
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// A fully validated calendar birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl BirthDate {
    /// Parses `DD.MM.YYYY`, enforcing calendar rules: month lengths
    /// including leap-year Feb 29, and a year within
    /// `[MIN_BIRTH_YEAR, current_year]`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` describing the first violated rule.
    pub fn parse(text: &str, current_year: i32) -> Result<Self> {
        let parts: Vec<&str> = text.split('.').collect();
        if parts.len() != 3 || parts[0].len() != 2 || parts[1].len() != 2 || parts[2].len() != 4 {
            return Err(OrbError::invalid_input(
                "birth_date",
                format!("expected DD.MM.YYYY, got '{text}'"),
            ));
        }
        let day: u32 = parse_field(parts[0], "birth_date")?;
        let month: u32 = parse_field(parts[1], "birth_date")?;
        let year: i32 = parse_field(parts[2], "birth_date")?;

        if !(MIN_BIRTH_YEAR..=current_year).contains(&year) {
            return Err(OrbError::invalid_input(
                "birth_date",
                format!("year {year} outside [{MIN_BIRTH_YEAR}, {current_year}]"),
            ));
        }
        if !(1..=12).contains(&month) {
            return Err(OrbError::invalid_input(
                "birth_date",
                format!("month {month} outside [1, 12]"),
            ));
        }
        let max_day = days_in_month(month, year);
        if !(1..=max_day).contains(&day) {
            return Err(OrbError::invalid_input(
                "birth_date",
                format!("day {day} outside [1, {max_day}] for month {month}"),
            ));
        }

        Ok(Self { day, month, year })
    }
}

/// A validated wall-clock birth time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthTime {
    pub hour: u32,
    pub minute: u32,
}

impl BirthTime {
    /// Parses `HH:MM` with hour 0-23 and minute 0-59.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` describing the first violated rule.
    pub fn parse(text: &str) -> Result<Self> {
        let parts: Vec<&str> = text.split(':').collect();
        if parts.len() != 2 || parts[0].len() != 2 || parts[1].len() != 2 {
            return Err(OrbError::invalid_input(
                "birth_time",
                format!("expected HH:MM, got '{text}'"),
            ));
        }
        let hour: u32 = parse_field(parts[0], "birth_time")?;
        let minute: u32 = parse_field(parts[1], "birth_time")?;

        if hour > 23 {
            return Err(OrbError::invalid_input(
                "birth_time",
                format!("hour {hour} outside [0, 23]"),
            ));
        }
        if minute > 59 {
            return Err(OrbError::invalid_input(
                "birth_time",
                format!("minute {minute} outside [0, 59]"),
            ));
        }

        Ok(Self { hour, minute })
    }
}

/// The birth data the daily reading is personalized with.
///
/// Fields hold the masked display strings; persistence is the preference
/// store's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthProfile {
    pub date: String,
    pub time: String,
    pub city: String,
}

impl BirthProfile {
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            city: city.into(),
        }
    }

    /// True once every field is non-blank. The daily request is only built
    /// from a complete profile.
    pub fn is_complete(&self) -> bool {
        !self.date.trim().is_empty()
            && !self.time.trim().is_empty()
            && !self.city.trim().is_empty()
    }

    /// Validates the date and time fields against full calendar rules.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for the first field that fails.
    pub fn validate(&self, current_year: i32) -> Result<()> {
        BirthDate::parse(&self.date, current_year)?;
        BirthTime::parse(&self.time)?;
        if self.city.trim().is_empty() {
            return Err(OrbError::invalid_input("birth_city", "city is blank"));
        }
        Ok(())
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}

fn parse_field<T: std::str::FromStr>(text: &str, field: &'static str) -> Result<T> {
    text.parse()
        .map_err(|_| OrbError::invalid_input(field, format!("'{text}' is not a number")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURRENT_YEAR: i32 = 2026;

    #[test]
    fn feb_29_requires_a_leap_year() {
        assert!(BirthDate::parse("29.02.2023", CURRENT_YEAR).is_err());
        let date = BirthDate::parse("29.02.2024", CURRENT_YEAR).unwrap();
        assert_eq!((date.day, date.month, date.year), (29, 2, 2024));
    }

    #[test]
    fn century_leap_rules_hold() {
        assert!(BirthDate::parse("29.02.1900", CURRENT_YEAR).is_err());
        assert!(BirthDate::parse("29.02.2000", CURRENT_YEAR).is_ok());
    }

    #[test]
    fn day_bounded_by_month_length() {
        assert!(BirthDate::parse("31.04.1995", CURRENT_YEAR).is_err());
        assert!(BirthDate::parse("30.04.1995", CURRENT_YEAR).is_ok());
        assert!(BirthDate::parse("31.12.1995", CURRENT_YEAR).is_ok());
    }

    #[test]
    fn year_bounded_by_range() {
        assert!(BirthDate::parse("01.01.1899", CURRENT_YEAR).is_err());
        assert!(BirthDate::parse("01.01.2027", CURRENT_YEAR).is_err());
        assert!(BirthDate::parse("01.01.1900", CURRENT_YEAR).is_ok());
    }

    #[test]
    fn malformed_dates_are_rejected() {
        assert!(BirthDate::parse("1.1.1990", CURRENT_YEAR).is_err());
        assert!(BirthDate::parse("29-02-1990", CURRENT_YEAR).is_err());
        assert!(BirthDate::parse("", CURRENT_YEAR).is_err());
    }

    #[test]
    fn time_bounds_hold() {
        assert!(BirthTime::parse("23:59").is_ok());
        assert!(BirthTime::parse("00:00").is_ok());
        assert!(BirthTime::parse("24:00").is_err());
        assert!(BirthTime::parse("23:61").is_err());
        assert!(BirthTime::parse("9:30").is_err());
    }

    #[test]
    fn profile_completeness_requires_every_field() {
        let mut profile = BirthProfile::new("29.02.2024", "12:30", "");
        assert!(!profile.is_complete());
        profile.city = "Lisbon".to_string();
        assert!(profile.is_complete());
        assert!(profile.validate(CURRENT_YEAR).is_ok());
    }
}
