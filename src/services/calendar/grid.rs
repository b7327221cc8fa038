//! Month and year grid generation.

use chrono::{Datelike, NaiveDate};

use crate::models::calendar::{Week, YearRow, YEARS_PER_BLOCK, YEARS_PER_ROW};
use crate::utils::date::{days_in_month, from_month_index};

/// Weeks of `month` (1-based), Sunday first.
///
/// The first week is padded with `None` up to the weekday of the 1st and the
/// last week is padded after the final day, so every week has 7 slots.
pub fn month_grid(year: i32, month: u32) -> Vec<Week> {
    let Some(first_of_month) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let leading = first_of_month.weekday().num_days_from_sunday() as usize;
    let days = days_in_month(year, month) as usize;
    let weeks_needed = (leading + days).div_ceil(7);

    let mut weeks = vec![[None; 7]; weeks_needed];
    for (offset, date) in first_of_month.iter_days().take(days).enumerate() {
        let cell = leading + offset;
        weeks[cell / 7][cell % 7] = Some(date);
    }
    weeks
}

/// Month grid addressed by month index (`year * 12 + month - 1`).
pub fn month_grid_for_index(index: i32) -> Vec<Week> {
    let (year, month) = from_month_index(index);
    month_grid(year, month)
}

/// Years `block * 18 ..= block * 18 + 17` in rows of three.
pub fn year_grid(block_index: i32) -> Vec<YearRow> {
    let start = block_index * YEARS_PER_BLOCK;
    let years: Vec<i32> = (start..start + YEARS_PER_BLOCK).collect();
    years
        .chunks(YEARS_PER_ROW)
        .map(|row| [row[0], row[1], row[2]])
        .collect()
}

/// First and last year of an 18-year block.
pub fn year_block_range(block_index: i32) -> (i32, i32) {
    let start = block_index * YEARS_PER_BLOCK;
    (start, start + YEARS_PER_BLOCK - 1)
}
