//! Calendar facts for a birth date and a large star-glyph rendering of it.
//!
//! ```
//! use star_date::{CalendarDate, DateReport, Locale, render_star_number_string};
//!
//! let birth: CalendarDate = "23.11.2000".parse().unwrap();
//! let report = DateReport::new(birth, CalendarDate::reference());
//! assert_eq!(report.age, 25);
//! assert_eq!(report.weekday.name(Locale::English), "Thursday");
//!
//! let block = render_star_number_string(&birth.glyph_text(), 1, 2);
//! assert_eq!(block.lines().count(), 7);
//! ```

mod consts;
mod prelude;
mod types;

pub mod calendar;
pub mod glyph;
pub mod locale;
pub mod prompt;
pub mod render;
pub mod report;
pub mod validate;

pub use calendar::{Weekday, calculate_age, day_of_week};
pub use consts::*;
pub use glyph::Glyph;
pub use locale::Locale;
pub use prompt::{PromptError, read_int_in_range};
pub use render::{RenderOptions, RenderedBlock, render, render_star_number_string};
pub use report::DateReport;
pub use types::{Day, Month, Year, days_in_month, is_leap_year};
pub use validate::{valid_date, validate_date};

use crate::prelude::*;
use std::str::FromStr;

/// An existing date of the proleptic Gregorian calendar, years 1..=9999.
///
/// Field order makes the derived ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(i64),
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(i64),
    #[error("Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { day: i64, month: u8, year: u16 },
    #[error("Empty date string")]
    EmptyInput,
}

/// The default reference ("today") date.
pub const REFERENCE_DATE: CalendarDate =
    CalendarDate::from_const(REFERENCE_YEAR, REFERENCE_MONTH, REFERENCE_DAY);

impl CalendarDate {
    /// Builds a date from day, month and year in one construction attempt.
    ///
    /// # Errors
    /// Returns the first component that does not fit: year, then month, then day.
    pub fn from_components(day: i64, month: i64, year: i64) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Compile-time constructor for fixed dates; an invalid date fails const evaluation.
    pub(crate) const fn from_const(year: u16, month: u8, day: u8) -> Self {
        assert!(year >= MIN_YEAR && year <= MAX_YEAR, "year out of range");
        assert!(month >= 1 && month <= MAX_MONTH, "month out of range");
        assert!(
            day >= MIN_DAY && day <= days_in_month(year, month),
            "day out of range"
        );
        Self {
            year: Year::from_const(year),
            month: Month::from_const(month),
            day: Day::from_const(day),
        }
    }

    /// The built-in reference date, 2025-11-23.
    pub const fn reference() -> Self {
        REFERENCE_DATE
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// `(month, day)`, the key used for birthday comparisons.
    pub const fn month_day(&self) -> (u8, u8) {
        (self.month.get(), self.day.get())
    }

    /// Day-first display form, `dd.mm.yyyy`.
    pub fn dotted(&self) -> String {
        format!(
            "{:02}{sep}{:02}{sep}{:04}",
            self.day(),
            self.month(),
            self.year(),
            sep = DOTTED_SEPARATOR
        )
    }

    /// The text fed to the star renderer, `dd mm yyyy`.
    pub fn glyph_text(&self) -> String {
        format!("{:02} {:02} {:04}", self.day(), self.month(), self.year())
    }

    fn parse_component(s: &str) -> Result<i64, DateError> {
        s.parse::<i64>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }

    fn parse_parts(parts: &[&str], joined_by: char) -> Result<[i64; 3], DateError> {
        match parts {
            [a, b, c] => Ok([
                Self::parse_component(a)?,
                Self::parse_component(b)?,
                Self::parse_component(c)?,
            ]),
            _ => Err(DateError::InvalidFormat(format!(
                "expected 3 components separated by '{joined_by}', found {}",
                parts.len()
            ))),
        }
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Accepts ISO `YYYY-MM-DD` or day-first `DD.MM.YYYY`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let has_dot = trimmed.contains(DOTTED_SEPARATOR);

        match (has_hyphen, has_dot) {
            (true, false) => {
                let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
                let [year, month, day] = Self::parse_parts(&parts, DATE_SEPARATOR)?;
                Self::from_components(day, month, year)
            }
            (false, true) => {
                let parts: Vec<&str> = trimmed.split(DOTTED_SEPARATOR).map(str::trim).collect();
                let [day, month, year] = Self::parse_parts(&parts, DOTTED_SEPARATOR)?;
                Self::from_components(day, month, year)
            }
            (true, true) => Err(DateError::InvalidFormat(format!(
                "Mixed delimiters ({DATE_SEPARATOR} and {DOTTED_SEPARATOR})"
            ))),
            (false, false) => Err(DateError::InvalidFormat(trimmed.to_owned())),
        }
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
