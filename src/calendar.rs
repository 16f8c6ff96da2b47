//! Derived calendar facts: weekday, age and day arithmetic.
//!
//! Weekdays come from a days-from-civil count over the proleptic Gregorian
//! calendar, with 1970-01-01 (a Thursday) as day zero.

use crate::consts::DAYS_IN_WEEK;
use crate::locale::Locale;
use crate::prelude::*;
use crate::CalendarDate;
use serde::Serialize;

/// Days in a full 400-year Gregorian cycle
const DAYS_PER_ERA: i64 = 146_097;
/// Offset from 0000-03-01 to 1970-01-01
const EPOCH_SHIFT: i64 = 719_468;
/// Weekday index of 1970-01-01 (Thursday, Monday = 0)
const EPOCH_WEEKDAY: i64 = 3;

/// Day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Monday = 0 … Sunday = 6.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self, locale: Locale) -> &'static str {
        locale.weekday_names()[self.index()]
    }
}

/// Weekday of a validated date.
pub fn day_of_week(date: CalendarDate) -> Weekday {
    let days = date.days_since_epoch();
    let index = (days + EPOCH_WEEKDAY).rem_euclid(DAYS_IN_WEEK);
    let weekday = Weekday::ALL[index as usize];
    tracing::trace!(%date, days, ?weekday, "computed weekday");
    weekday
}

/// Whole years elapsed from `birth` to `reference`.
///
/// The year difference drops by one while `(month, day)` of the reference is
/// lexicographically before that of the birth date. The result is not
/// clamped, so a birth date after the reference gives a negative age.
pub fn calculate_age(birth: CalendarDate, reference: CalendarDate) -> i32 {
    let mut age = i32::from(reference.year()) - i32::from(birth.year());
    if reference.month_day() < birth.month_day() {
        age -= 1;
    }
    age
}

impl CalendarDate {
    /// Signed day count relative to 1970-01-01.
    pub fn days_since_epoch(&self) -> i64 {
        let month = i64::from(self.month());
        let day = i64::from(self.day());
        // Years start in March so the leap day falls at the end.
        let year = i64::from(self.year()) - i64::from(month <= 2);

        let era = year.div_euclid(400);
        let year_of_era = year - era * 400;
        let shifted_month = (month + 9) % 12;
        let day_of_year = (153 * shifted_month + 2) / 5 + day - 1;
        let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

        era * DAYS_PER_ERA + day_of_era - EPOCH_SHIFT
    }

    /// Inverse of [`CalendarDate::days_since_epoch`]. `None` outside years 1..=9999.
    pub fn from_days_since_epoch(days: i64) -> Option<Self> {
        let z = days.checked_add(EPOCH_SHIFT)?;
        let era = z.div_euclid(DAYS_PER_ERA);
        let day_of_era = z - era * DAYS_PER_ERA;
        let year_of_era =
            (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
        let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
        let shifted_month = (5 * day_of_year + 2) / 153;
        let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
        let month = if shifted_month < 10 {
            shifted_month + 3
        } else {
            shifted_month - 9
        };
        let year = year_of_era + era * 400 + i64::from(month <= 2);

        Self::from_components(day, month, year).ok()
    }

    /// Adds (or with a negative count, subtracts) whole days.
    pub fn checked_add_days(&self, days: i64) -> Option<Self> {
        Self::from_days_since_epoch(self.days_since_epoch().checked_add(days)?)
    }
}
