//! Fixed output languages: weekday names, labels and the "years" noun.

use serde::{Deserialize, Serialize};

/// Output language.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Locale {
    #[default]
    #[value(name = "en")]
    #[serde(rename = "en")]
    English,
    #[value(name = "ru")]
    #[serde(rename = "ru")]
    Russian,
}

/// User-visible text for one locale.
#[derive(Debug)]
pub struct Strings {
    pub weekdays: [&'static str; 7],
    pub yes: &'static str,
    pub no: &'static str,
    pub date_label: &'static str,
    pub weekday_label: &'static str,
    pub leap_label: &'static str,
    pub age_label: &'static str,
    pub stars_heading: &'static str,
    pub enter_birth_date: &'static str,
    pub day_prompt: &'static str,
    pub month_prompt: &'static str,
    pub year_prompt: &'static str,
    pub not_a_number: &'static str,
    pub out_of_range: &'static str,
    pub invalid_date: &'static str,
}

static ENGLISH: Strings = Strings {
    weekdays: [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ],
    yes: "yes",
    no: "no",
    date_label: "Date",
    weekday_label: "Day of week",
    leap_label: "Leap year",
    age_label: "Age",
    stars_heading: "Date in stars (format: dd mm yyyy):",
    enter_birth_date: "Enter your date of birth:",
    day_prompt: "Day (1-31): ",
    month_prompt: "Month (1-12): ",
    year_prompt: "Year (e.g. 1990): ",
    not_a_number: "Error: enter a whole number.",
    out_of_range: "Error: enter a number from {min} to {max}.",
    invalid_date: "Error: this date does not exist. Check the day, month and year.",
};

static RUSSIAN: Strings = Strings {
    weekdays: [
        "понедельник",
        "вторник",
        "среда",
        "четверг",
        "пятница",
        "суббота",
        "воскресенье",
    ],
    yes: "да",
    no: "нет",
    date_label: "Дата",
    weekday_label: "День недели",
    leap_label: "Високосный год",
    age_label: "Сейчас лет",
    stars_heading: "Дата в звёздочках (формат: дд мм гггг):",
    enter_birth_date: "Введите дату рождения:",
    day_prompt: "День (1-31): ",
    month_prompt: "Месяц (1-12): ",
    year_prompt: "Год (например, 1990): ",
    not_a_number: "Ошибка: введите целое число.",
    out_of_range: "Ошибка: введите число от {min} до {max}.",
    invalid_date: "Ошибка: введённой даты не существует. Проверьте день/месяц/год.",
};

impl Locale {
    pub fn strings(self) -> &'static Strings {
        match self {
            Self::English => &ENGLISH,
            Self::Russian => &RUSSIAN,
        }
    }

    pub fn weekday_names(self) -> &'static [&'static str; 7] {
        &self.strings().weekdays
    }

    pub fn yes_no(self, value: bool) -> &'static str {
        if value {
            self.strings().yes
        } else {
            self.strings().no
        }
    }

    /// Out-of-range prompt error with the bounds filled in.
    pub fn out_of_range(self, min: i64, max: i64) -> String {
        self.strings()
            .out_of_range
            .replace("{min}", &min.to_string())
            .replace("{max}", &max.to_string())
    }

    /// The noun that follows an age, agreeing with the number.
    ///
    /// Russian uses three forms picked by the last one or two digits:
    /// 1, 21, 101 take "год"; 2-4, 22-24 take "года"; everything else,
    /// including 11-14, takes "лет".
    pub const fn years_noun(self, age: i32) -> &'static str {
        let n = age.unsigned_abs();
        match self {
            Self::English => {
                if n == 1 {
                    "year"
                } else {
                    "years"
                }
            }
            Self::Russian => {
                let last = n % 10;
                let last_two = n % 100;
                if last == 1 && last_two != 11 {
                    "год"
                } else if last >= 2 && last <= 4 && (last_two < 10 || last_two >= 20) {
                    "года"
                } else {
                    "лет"
                }
            }
        }
    }
}
