/// Smallest valid year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of any month
pub const MIN_DAY: u8 = 1;
/// Longest month length, the upper bound the prompt accepts for a day
pub const MAX_DAY: u8 = 31;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in a week
pub const DAYS_IN_WEEK: i64 = 7;

/// Default reference ("today") date used for age: 2025-11-23
pub const REFERENCE_YEAR: u16 = 2025;
pub const REFERENCE_MONTH: u8 = 11;
pub const REFERENCE_DAY: u8 = 23;

/// ISO date component separator
pub const DATE_SEPARATOR: char = '-';
/// Day-first (dd.mm.yyyy) component separator
pub const DOTTED_SEPARATOR: char = '.';

/// Rows in every glyph
pub const GLYPH_HEIGHT: usize = 7;
/// Columns in every glyph
pub const GLYPH_WIDTH: usize = 5;
/// Stroke character the glyph table is authored with
pub const GLYPH_STROKE: char = '*';

/// Default number of spaces between two digits of the same group
pub const DEFAULT_DIGIT_SPACING: usize = 1;
/// Default number of spaces on each side of a group separator
pub const DEFAULT_GROUP_SPACING: usize = 2;
