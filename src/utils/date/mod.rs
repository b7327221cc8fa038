// Date utility functions shared by the calendar and clock engines

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

/// Single-letter weekday labels, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// Long month names indexed by `month - 1`.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn is_same_day(date1: NaiveDateTime, date2: NaiveDateTime) -> bool {
    date1.date() == date2.date()
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Format `number` with exactly `digits` digits, zero-padded on the left.
///
/// Higher-order digits are dropped, so `fill_in_digit(123, 2)` is `"23"`.
pub fn fill_in_digit(number: u32, digits: u32) -> String {
    let max = 10u32.saturating_pow(digits);
    let clean = if max == 0 { number } else { number % max };
    format!("{:0width$}", clean, width = digits as usize)
}

/// Long name of a 1-based month, empty for out-of-range input.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// Get the number of days in a given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// Index of a month on a continuous month line: `year * 12 + (month - 1)`.
pub fn month_index(year: i32, month: u32) -> i32 {
    year * 12 + month as i32 - 1
}

/// Inverse of [`month_index`], returning `(year, month)` with a 1-based month.
pub fn from_month_index(index: i32) -> (i32, u32) {
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}
