//! Everything derived from one birth date, ready to print.

use serde::Serialize;

use crate::calendar::{Weekday, calculate_age, day_of_week};
use crate::locale::Locale;
use crate::render::{RenderOptions, render};
use crate::types::is_leap_year;
use crate::CalendarDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateReport {
    pub date: CalendarDate,
    pub reference: CalendarDate,
    pub weekday: Weekday,
    pub leap_year: bool,
    pub age: i32,
}

impl DateReport {
    pub fn new(date: CalendarDate, reference: CalendarDate) -> Self {
        let report = Self {
            date,
            reference,
            weekday: day_of_week(date),
            leap_year: is_leap_year(i32::from(date.year())),
            age: calculate_age(date, reference),
        };
        tracing::debug!(?report, "built date report");
        report
    }

    /// The fact lines: date, weekday, leap year, age.
    pub fn to_text(&self, locale: Locale) -> String {
        let s = locale.strings();
        format!(
            "{}: {}\n{}: {}\n{}: {}\n{}: {} {}",
            s.date_label,
            self.date.dotted(),
            s.weekday_label,
            self.weekday.name(locale),
            s.leap_label,
            locale.yes_no(self.leap_year),
            s.age_label,
            self.age,
            locale.years_noun(self.age)
        )
    }

    /// The fact lines followed by the star rendering of `dd mm yyyy`.
    pub fn to_text_with_stars(&self, locale: Locale, options: &RenderOptions) -> String {
        format!(
            "{}\n\n{}\n\n{}",
            self.to_text(locale),
            locale.strings().stars_heading,
            render(&self.date.glyph_text(), options)
        )
    }

    /// # Errors
    /// Propagates serializer failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: i64, month: i64, year: i64) -> CalendarDate {
        CalendarDate::from_components(day, month, year).unwrap()
    }

    #[test]
    fn test_reference_day_report() {
        let report = DateReport::new(date(23, 11, 2025), CalendarDate::reference());
        assert_eq!(report.weekday, Weekday::Sunday);
        assert!(!report.leap_year);
        assert_eq!(report.age, 0);
    }

    #[test]
    fn test_english_text() {
        let report = DateReport::new(date(29, 2, 2000), CalendarDate::reference());
        assert_eq!(
            report.to_text(Locale::English),
            "Date: 29.02.2000\nDay of week: Tuesday\nLeap year: yes\nAge: 25 years"
        );
    }

    #[test]
    fn test_russian_text() {
        let report = DateReport::new(date(24, 11, 2003), CalendarDate::reference());
        assert_eq!(
            report.to_text(Locale::Russian),
            "Дата: 24.11.2003\nДень недели: понедельник\nВисокосный год: нет\nСейчас лет: 21 год"
        );
    }

    #[test]
    fn test_text_with_stars() {
        let report = DateReport::new(date(1, 1, 2001), CalendarDate::reference());
        let text = report.to_text_with_stars(Locale::English, &RenderOptions::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4 + 1 + 1 + 1 + 7);
        assert_eq!(lines[5], "Date in stars (format: dd mm yyyy):");
        assert_eq!(
            lines[7],
            " ***    *            ***    *            ***   ***   ***    *  "
        );
    }

    #[test]
    fn test_json_shape() {
        let report = DateReport::new(date(23, 11, 2025), CalendarDate::reference());
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["date"], "2025-11-23");
        assert_eq!(value["reference"], "2025-11-23");
        assert_eq!(value["weekday"], "Sunday");
        assert_eq!(value["leap_year"], false);
        assert_eq!(value["age"], 0);
    }
}
