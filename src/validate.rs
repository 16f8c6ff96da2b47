//! Gatekeeping for user-entered day, month and year.

use crate::{CalendarDate, DateError};

/// Validates a `(day, month, year)` triple with a single construction attempt.
///
/// # Errors
/// Returns the `DateError` describing the first component that does not fit.
pub fn validate_date(day: i64, month: i64, year: i64) -> Result<CalendarDate, DateError> {
    CalendarDate::from_components(day, month, year).inspect_err(|err| {
        tracing::debug!(day, month, year, %err, "rejected date");
    })
}

/// Whether `(day, month, year)` names an existing date.
pub fn valid_date(day: i64, month: i64, year: i64) -> bool {
    validate_date(day, month, year).is_ok()
}
