use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use crate::prelude::*;
use std::num::{NonZeroU8, NonZeroU16};

/// A year in `MIN_YEAR..=MAX_YEAR` (1..=9999).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is outside `MIN_YEAR..=MAX_YEAR`.
    pub fn new(value: i64) -> Result<Self, DateError> {
        u16::try_from(value)
            .ok()
            .filter(|v| (MIN_YEAR..=MAX_YEAR).contains(v))
            .and_then(NonZeroU16::new)
            .map(Self)
            .ok_or(DateError::InvalidYear(value))
    }

    /// Caller guarantees the range; zero fails const evaluation.
    pub(crate) const fn from_const(value: u16) -> Self {
        match NonZeroU16::new(value) {
            Some(v) => Self(v),
            None => panic!("year must be non-zero"),
        }
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    pub const fn is_leap(self) -> bool {
        is_leap_year(self.0.get() as i32)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

/// A month in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: i64) -> Result<Self, DateError> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= MAX_MONTH)
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(DateError::InvalidMonth(value))
    }

    pub(crate) const fn from_const(value: u8) -> Self {
        match NonZeroU8::new(value) {
            Some(v) => Self(v),
            None => panic!("month must be non-zero"),
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

/// A day of month, valid for the year and month it was built against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day checked against the length of `month` in `year`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the day does not exist in that month.
    pub fn new(value: i64, year: Year, month: Month) -> Result<Self, DateError> {
        let max_day = days_in_month(year.get(), month.get());
        u8::try_from(value)
            .ok()
            .filter(|v| (MIN_DAY..=max_day).contains(v))
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(DateError::InvalidDay {
                day: value,
                month: month.get(),
                year: year.get(),
            })
    }

    pub(crate) const fn from_const(value: u8) -> Self {
        match NonZeroU8::new(value) {
            Some(v) => Self(v),
            None => panic!("day must be non-zero"),
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.get()
    }
}

/// Gregorian leap-year rule. Total over every `i32`, including years the
/// date types reject.
pub const fn is_leap_year(year: i32) -> bool {
    year % LEAP_YEAR_CYCLE == 0 && (year % CENTURY_CYCLE != 0 || year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year as i32) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_bounds() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(9999).is_ok());
        assert!(matches!(Year::new(0), Err(DateError::InvalidYear(0))));
        assert!(matches!(Year::new(10000), Err(DateError::InvalidYear(10000))));
        assert!(matches!(Year::new(-5), Err(DateError::InvalidYear(-5))));
        assert!(matches!(
            Year::new(i64::from(u16::MAX) + 1),
            Err(DateError::InvalidYear(65536))
        ));
    }

    #[test]
    fn test_year_display_and_into() {
        let year = Year::new(2024).unwrap();
        assert_eq!(year.to_string(), "2024");
        let value: u16 = year.into();
        assert_eq!(value, 2024);
        assert!(year.is_leap());
    }

    #[test]
    fn test_month_bounds() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
        assert!(matches!(Month::new(0), Err(DateError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(DateError::InvalidMonth(13))));
        assert!(matches!(Month::new(256), Err(DateError::InvalidMonth(256))));
    }

    #[test]
    fn test_day_against_month_length() {
        let leap = Year::new(2024).unwrap();
        let plain = Year::new(2023).unwrap();
        let feb = Month::new(2).unwrap();
        let apr = Month::new(4).unwrap();

        assert!(Day::new(29, leap, feb).is_ok());
        assert!(Day::new(30, leap, feb).is_err());
        assert!(Day::new(28, plain, feb).is_ok());
        assert!(Day::new(29, plain, feb).is_err());
        assert!(Day::new(30, plain, apr).is_ok());
        assert!(matches!(
            Day::new(31, plain, apr),
            Err(DateError::InvalidDay {
                day: 31,
                month: 4,
                year: 2023
            })
        ));
        assert!(Day::new(0, plain, apr).is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i32,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase { year: 2024, is_leap: true, description: "divisible by 4" },
            TestCase { year: 2025, is_leap: false, description: "not divisible by 4" },
            TestCase { year: 1900, is_leap: false, description: "century not divisible by 400" },
            TestCase { year: 2100, is_leap: false, description: "century not divisible by 400" },
            TestCase { year: 2000, is_leap: true, description: "divisible by 400" },
            TestCase { year: 0, is_leap: true, description: "year zero is divisible by 400" },
            TestCase { year: -4, is_leap: true, description: "negative multiple of 4" },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description,
            );
        }
    }

    #[test]
    fn test_is_leap_year_matches_rule() {
        for year in -800..=2800 {
            let expected = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
            assert_eq!(is_leap_year(year), expected, "year {year}");
        }
    }

    #[test]
    fn test_days_in_month_table() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12u8 {
            assert_eq!(days_in_month(2023, month), expected[month as usize]);
        }
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
    }
}
